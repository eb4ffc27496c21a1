//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three aligned positions: a row, a column or a diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::index)
    }

    /// Checks if `pos` belongs to this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Every line on the board, in the order they are checked.
///
/// When several lines are complete at once the earliest one here is reported.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first line whose three cells hold the same mark.
///
/// Returns `None` if no line is complete.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn detect_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|line| {
        let [a, b, c] = line.positions();
        let first = board.get(a);
        first != Cell::Empty && first == board.get(b) && first == board.get(c)
    })
}

/// Returns the mark owning the first complete line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    detect_line(board).and_then(|line| board.mark(line.positions()[0]))
}
