//! Single cell delta invariant: each snapshot adds exactly one mark.

use super::super::{Board, Cell, Game};
use super::Invariant;

/// Invariant: Snapshot `i` differs from snapshot `i - 1` in exactly one cell.
///
/// The differing cell is the one named by annotation `i` and it holds the
/// annotated mark. Snapshot 0 is the empty board. Marks alternate because
/// the annotated mark must match the parity of its step.
pub struct SingleCellDeltaInvariant;

impl Invariant<Game> for SingleCellDeltaInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if history.first() != Some(&Board::new()) {
            return false;
        }

        history
            .windows(2)
            .zip(game.annotations().iter().skip(1))
            .enumerate()
            .all(|(i, (pair, annotation))| {
                let Some(action) = annotation else {
                    return false;
                };
                pair[0].diff(&pair[1]) == [action.position]
                    && pair[1].get(action.position) == Cell::Occupied(action.mark)
                    && action.mark == crate::Mark::for_step(i)
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly the annotated mark to its predecessor"
    }
}
