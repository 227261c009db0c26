//! Mark balance invariant: X never falls behind O, and never leads by two.

use super::Invariant;
use crate::{GameController, Player};

/// Invariant: on every recorded board, count(X) − count(O) is 0 or 1.
///
/// X always moves first and turns strictly alternate.
pub struct MarkBalanceInvariant;

impl Invariant<GameController> for MarkBalanceInvariant {
    fn holds(game: &GameController) -> bool {
        game.history().iter().all(|board| {
            let x = board.count(Player::X);
            let o = board.count(Player::O);
            x == o || x == o + 1
        })
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1 on every board"
    }
}
