//! Step pointer invariant: the pointer selects an existing snapshot.

use super::super::Game;
use super::Invariant;

/// Invariant: `0 <= step < history.len()`.
pub struct StepInRangeInvariant;

impl Invariant<Game> for StepInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.step < game.history.len()
    }

    fn description() -> &'static str {
        "Step pointer selects a snapshot in history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_every_jump_holds() {
        let mut game = Game::replay(&[Position::TopLeft, Position::Center]);
        for step in 0..game.history().len() {
            game.jump_to(step);
            assert!(StepInRangeInvariant::holds(&game));
        }
    }

    #[test]
    fn test_pointer_past_end_violates() {
        let mut game = Game::new();
        game.step = 1;
        assert!(!StepInRangeInvariant::holds(&game));
    }
}
