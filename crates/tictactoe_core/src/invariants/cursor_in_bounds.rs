//! Cursor invariant: the cursor always points into the history.

use super::Invariant;
use crate::GameController;

/// Invariant: `0 <= cursor < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameController> for CursorInBoundsInvariant {
    fn holds(game: &GameController) -> bool {
        game.cursor() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor points into the history"
    }
}
