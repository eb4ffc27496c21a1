//! Contract-based validation for game operations.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. A failed precondition on a placement is an ordinary
//! outcome (the click is ignored); a failed postcondition is a bug.

use super::game::{Game, Ignored};
use super::invariants::{GameInvariants, InvariantSet};
use super::Position;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a failed precondition reports.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// A postcondition that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractViolation {
    /// Descriptions of every failed check.
    pub descriptions: Vec<String>,
}

impl ContractViolation {
    /// Creates a violation from a single description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            descriptions: vec![description.into()],
        }
    }
}

impl std::fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Postcondition failed: {}", self.descriptions.join("; "))
    }
}

impl std::error::Error for ContractViolation {}

fn check_invariants(game: &Game) -> Result<(), ContractViolation> {
    GameInvariants::check_all(game).map_err(|violations| ContractViolation {
        descriptions: violations.into_iter().map(|v| v.description).collect(),
    })
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The current snapshot has no winner.
pub struct NotDecided;

impl NotDecided {
    /// Rejects placements on a won snapshot.
    pub fn check(game: &Game) -> Result<(), Ignored> {
        if game.winning_line().is_some() {
            Err(Ignored::Decided)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects placements on an occupied cell.
    pub fn check(game: &Game, position: Position) -> Result<(), Ignored> {
        if game.current().is_empty(position) {
            Ok(())
        } else {
            Err(Ignored::Occupied(position))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`Game::place_mark`].
///
/// Preconditions:
/// - Current snapshot has no winner
/// - Target cell is empty
///
/// Postconditions:
/// - Snapshots up to the old step pointer are unchanged
/// - Exactly one snapshot follows them and the step pointer is on it
/// - All game invariants hold
pub struct PlaceContract;

impl Contract<Game, Position> for PlaceContract {
    type Rejection = Ignored;

    #[instrument(level = "trace", skip(game))]
    fn pre(game: &Game, position: &Position) -> Result<(), Ignored> {
        NotDecided::check(game)?;
        CellIsEmpty::check(game, *position)?;
        Ok(())
    }

    fn post(before: &Game, after: &Game) -> Result<(), ContractViolation> {
        let kept = before.step + 1;
        if after.history.len() != kept + 1 {
            return Err(ContractViolation::new(
                "History holds the kept prefix plus one new snapshot",
            ));
        }
        if after.history[..kept] != before.history[..kept]
            || after.annotations[..kept] != before.annotations[..kept]
        {
            return Err(ContractViolation::new("Kept prefix is unchanged"));
        }
        if after.step != kept {
            return Err(ContractViolation::new("Step pointer is on the new snapshot"));
        }
        check_invariants(after)
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Contract for [`Game::jump_to`].
///
/// Precondition: step indexes into history.
/// Postcondition: history and annotations are untouched.
pub struct JumpContract;

impl Contract<Game, usize> for JumpContract {
    type Rejection = ContractViolation;

    fn pre(game: &Game, step: &usize) -> Result<(), ContractViolation> {
        if *step < game.history.len() {
            Ok(())
        } else {
            Err(ContractViolation::new(format!(
                "Step {} is outside a history of {} snapshots",
                step,
                game.history.len()
            )))
        }
    }

    fn post(before: &Game, after: &Game) -> Result<(), ContractViolation> {
        if before.history != after.history || before.annotations != after.annotations {
            return Err(ContractViolation::new("Jumping leaves history untouched"));
        }
        check_invariants(after)
    }
}
