//! Pure rendering of a game into a plain-data visual tree.
//!
//! Every frontend draws from a [`GameView`]; none of them read the game
//! directly. Rendering the same game twice yields equal views.

use super::game::{Game, MoveOrder, Status};
use super::rules::Line;
use super::{Board, Mark, Position};
use tracing::instrument;

/// One rendered board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Which cell this is; clicks report it back.
    pub position: Position,
    /// The mark shown, if any.
    pub mark: Option<Mark>,
    /// Part of the winning line.
    pub highlighted: bool,
}

impl CellView {
    /// Text shown in the cell.
    pub fn text(&self) -> String {
        self.mark.map(|mark| mark.to_string()).unwrap_or_default()
    }

    /// Stylesheet class for the cell.
    pub fn class(&self) -> &'static str {
        if self.highlighted {
            "square-highlight"
        } else {
            "square"
        }
    }
}

/// The rendered 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Cells in row-major order.
    pub cells: [CellView; 9],
}

impl BoardView {
    /// Renders a snapshot, highlighting the cells of `line`.
    pub fn render(board: &Board, line: Option<Line>) -> Self {
        Self {
            cells: Position::ALL.map(|position| CellView {
                position,
                mark: board.mark(position),
                highlighted: line.is_some_and(|line| line.contains(position)),
            }),
        }
    }

    /// The three rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(3)
    }

    /// The rendered cell at `position`.
    pub fn cell(&self, position: Position) -> &CellView {
        &self.cells[position.index()]
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// `Go to game start` or `Go to move #n`.
    pub label: String,
    /// Move label, empty for game start.
    pub annotation: String,
    /// The step pointer is on this entry.
    pub current: bool,
}

impl MoveEntry {
    fn render(game: &Game, step: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self {
            step,
            label,
            annotation: game.label(step),
            current: step == game.step(),
        }
    }

    /// Button text.
    pub fn text(&self) -> String {
        if self.annotation.is_empty() {
            self.label.clone()
        } else {
            format!("{} {}", self.label, self.annotation)
        }
    }

    /// Stylesheet class for the entry's button.
    pub fn class(&self) -> &'static str {
        if self.current { "move-current" } else { "move" }
    }
}

/// The whole rendered game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    /// Current snapshot with highlights.
    pub board: BoardView,
    /// Status line.
    pub status: Status,
    /// Move list order.
    pub order: MoveOrder,
    /// Move list entries in display order.
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    /// Renders the game's current state.
    #[instrument(level = "trace", skip_all, fields(step = game.step(), order = ?game.order()))]
    pub fn render(game: &Game) -> Self {
        let mut moves: Vec<MoveEntry> = (0..game.history().len())
            .map(|step| MoveEntry::render(game, step))
            .collect();
        if game.order() == MoveOrder::Descending {
            moves.reverse();
        }

        Self {
            board: BoardView::render(game.current(), game.winning_line()),
            status: game.status(),
            order: game.order(),
            moves,
        }
    }

    /// Label of the order toggle control.
    pub fn order_sign(&self) -> &'static str {
        match self.order {
            MoveOrder::Ascending => "▲",
            MoveOrder::Descending => "▼",
        }
    }
}
