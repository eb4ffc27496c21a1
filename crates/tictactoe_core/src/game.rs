//! History-tracking game engine.
//!
//! A [`Game`] owns every board snapshot from the empty start to the latest
//! move, plus a step pointer selecting the snapshot on display. The mark to
//! move, the winner and the status are all derived from the snapshot under
//! the step pointer, never stored.

use super::action::Move;
use super::contracts::{Contract, JumpContract, PlaceContract};
use super::rules::Line;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Returns the opposite order.
    pub fn toggled(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }
}

/// Status line derived from the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// The board is full and nobody won.
    #[display("Draw")]
    Draw,
    /// The game goes on.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

impl Status {
    /// Returns true once the snapshot is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Ignored {
    /// The current snapshot already has a winner.
    #[display("Game is already decided")]
    Decided,
    /// The target cell holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Position),
}

/// Result of [`Game::place_mark`].
///
/// Ignored placements are not errors: callers driven by user clicks drop
/// the value and the click simply has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Placement {
    /// A new snapshot was appended.
    Placed(Move),
    /// Nothing changed.
    Ignored(Ignored),
}

impl Placement {
    /// Returns true if the move was applied.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed(_))
    }
}

/// Tic-tac-toe game with full move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) history: Vec<Board>,
    pub(crate) annotations: Vec<Option<Move>>,
    pub(crate) step: usize,
    pub(crate) order: MoveOrder,
}

impl Game {
    /// Creates a new game with an empty board and ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(MoveOrder::default())
    }

    /// Creates a new game whose move list starts in `order`.
    #[instrument]
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            history: vec![Board::new()],
            annotations: vec![None],
            step: 0,
            order,
        }
    }

    /// Builds a game by placing marks at `positions` in turn.
    ///
    /// Placements that would be ignored on a click are ignored here too.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Self {
        let mut game = Self::new();
        for pos in positions {
            let _ = game.place_mark(*pos);
        }
        game
    }

    /// Places the active mark at `position`.
    ///
    /// Ignored if the current snapshot is won or the cell is taken.
    /// Otherwise every snapshot after the step pointer is discarded, the
    /// new snapshot is appended and the step pointer moves to it.
    #[instrument(skip(self), fields(step = self.step, mark = %self.to_move()))]
    pub fn place_mark(&mut self, position: Position) -> Placement {
        if let Err(ignored) = PlaceContract::pre(self, &position) {
            return Placement::Ignored(ignored);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let action = Move::new(self.to_move(), position);
        let next = self.current().with_mark(position, action.mark);

        let keep = self.step + 1;
        self.history.truncate(keep);
        self.annotations.truncate(keep);
        self.history.push(next);
        self.annotations.push(Some(action));
        self.step = self.history.len() - 1;

        debug!(%action, step = self.step, board = %self.current(), "Mark placed");

        #[cfg(debug_assertions)]
        if let Err(violation) = PlaceContract::post(&before, self) {
            panic!("place_mark broke a game invariant: {}", violation);
        }

        Placement::Placed(action)
    }

    /// Moves the step pointer to `step` without touching history.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not an index into the history.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) {
        if let Err(violation) = JumpContract::pre(self, &step) {
            panic!("jump_to called with an invalid step: {}", violation);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.step = step;
        debug!(step, to_move = %self.to_move(), "Jumped to step");

        #[cfg(debug_assertions)]
        if let Err(violation) = JumpContract::post(&before, self) {
            panic!("jump_to broke a game invariant: {}", violation);
        }
    }

    /// Jumps one step back. Returns false at game start.
    pub fn step_back(&mut self) -> bool {
        match self.step.checked_sub(1) {
            Some(step) => {
                self.jump_to(step);
                true
            }
            None => false,
        }
    }

    /// Jumps one step forward. Returns false at the latest snapshot.
    pub fn step_forward(&mut self) -> bool {
        if self.is_latest() {
            return false;
        }
        self.jump_to(self.step + 1);
        true
    }

    /// Flips the display order of the move list.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
        debug!(order = ?self.order, "Move order toggled");
    }

    /// The snapshot under the step pointer.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// The step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns true if the step pointer is on the latest snapshot.
    pub fn is_latest(&self) -> bool {
        self.step + 1 == self.history.len()
    }

    /// All snapshots, the empty starting board first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// The move behind each snapshot; `None` for the starting board.
    pub fn annotations(&self) -> &[Option<Move>] {
        &self.annotations
    }

    /// Text label of the move that produced snapshot `step`, empty for game start.
    pub fn label(&self, step: usize) -> String {
        self.annotations
            .get(step)
            .copied()
            .flatten()
            .map(|action| action.label())
            .unwrap_or_default()
    }

    /// Current display order of the move list.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// The mark placed by the next move, from step parity.
    pub fn to_move(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// The completed line on the current snapshot.
    pub fn winning_line(&self) -> Option<Line> {
        self.current().winning_line()
    }

    /// Derives the status line for the current snapshot.
    pub fn status(&self) -> Status {
        let board = self.current();
        if let Some(mark) = board.winner() {
            Status::Winner(mark)
        } else if board.is_full() {
            Status::Draw
        } else {
            Status::NextPlayer(self.to_move())
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
