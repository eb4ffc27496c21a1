//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules::{self, Line};
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (moves on even steps, so it goes first).
    #[display("X")]
    X,
    /// Mark O (moves on odd steps).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark that moves when the step pointer is at `step`.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// One immutable 3x3 board snapshot.
///
/// Snapshots never change after they are stored in a game's history.
/// Placing a mark goes through [`Board::with_mark`], which leaves the
/// receiver untouched and returns the next snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from raw cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Gets the mark at the given position, if any.
    pub fn mark(&self, pos: Position) -> Option<Mark> {
        self.get(pos).mark()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    #[must_use]
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = self.clone();
        next.cells[pos.index()] = Cell::Occupied(mark);
        next
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Positions where this board and `other` disagree.
    pub fn diff(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.get(*pos) != other.get(*pos))
            .collect()
    }

    /// The first completed line on this board.
    pub fn winning_line(&self) -> Option<Line> {
        rules::detect_line(self)
    }

    /// The mark owning the first completed line.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(3).enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                match cell {
                    Cell::Empty => f.write_str(".")?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
            }
        }
        Ok(())
    }
}
