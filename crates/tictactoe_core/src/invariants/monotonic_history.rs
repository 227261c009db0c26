//! History consistency invariant: each step adds exactly one mark.

use super::Invariant;
use crate::coordinates::{coordinates_of, Coordinates};
use crate::{GameController, Player, Square};

/// Invariant: the history is a chain of single-mark moves.
///
/// - Step 0 is the empty board with unset coordinates.
/// - Every later step differs from its predecessor in exactly one square,
///   which was empty, now holds the player whose turn it was, and matches
///   the coordinates recorded on the step.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameController> for MonotonicHistoryInvariant {
    fn holds(game: &GameController) -> bool {
        let history = game.history();
        let size = game.board_size();

        let Some(first) = history.first() else {
            return false;
        };
        if first.occupied() != 0 || first.coordinates() != Coordinates::Unset {
            return false;
        }

        history.windows(2).enumerate().all(|(i, pair)| {
            let (before, after) = (&pair[0], &pair[1]);
            if before.squares().len() != after.squares().len() {
                return false;
            }

            let changed: Vec<usize> = before
                .squares()
                .iter()
                .zip(after.squares())
                .enumerate()
                .filter(|(_, (b, a))| b != a)
                .map(|(index, _)| index)
                .collect();

            match changed.as_slice() {
                [index] => {
                    before.squares()[*index] == Square::Empty
                        && after.squares()[*index] == Square::Occupied(Player::for_step(i + 1))
                        && after.coordinates() == coordinates_of(*index, size)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history step adds exactly one mark at its recorded coordinates"
    }
}
