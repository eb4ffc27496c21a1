//! Parallel history invariant: one annotation per snapshot.

use super::super::Game;
use super::Invariant;

/// Invariant: Annotations run parallel to history.
///
/// There is exactly one annotation per snapshot, the starting board has
/// none and every later snapshot has one.
pub struct ParallelHistoryInvariant;

impl Invariant<Game> for ParallelHistoryInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let annotations = game.annotations();

        history.len() == annotations.len()
            && annotations.first() == Some(&None)
            && annotations.iter().skip(1).all(Option::is_some)
    }

    fn description() -> &'static str {
        "Annotations run parallel to history"
    }
}
