//! Contract-based validation for controller transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Out-of-range input fails the precondition with an error;
//! a legal-but-pointless click yields a rejection and leaves the state alone.

use crate::action::{GameError, MoveRejection};
use crate::controller::GameController;
use crate::invariants::{ControllerInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Outcome of a precondition check that did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The action will be applied.
    Accept,
    /// The action is silently ignored.
    Ignore(MoveRejection),
}

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Verdict, GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the index must address a square on the board.
pub struct IndexInBounds;

impl IndexInBounds {
    /// Fails fast when `index` is beyond the board.
    #[instrument(level = "trace", skip(game))]
    pub fn check(index: usize, game: &GameController) -> Result<(), GameError> {
        let cells = game.board_size().cell_count();
        if index < cells {
            Ok(())
        } else {
            Err(GameError::IndexOutOfRange { index, cells })
        }
    }
}

/// Precondition: the current board must not have a winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Returns the rejection when the current board is already won.
    #[instrument(level = "trace", skip(game))]
    pub fn check(game: &GameController) -> Option<MoveRejection> {
        game.winner().map(MoveRejection::GameOver)
    }
}

/// Precondition: the target square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Returns the rejection when the square is occupied.
    #[instrument(level = "trace", skip(game))]
    pub fn check(index: usize, game: &GameController) -> Option<MoveRejection> {
        (!game.current_board().is_empty(index)).then_some(MoveRejection::SquareOccupied(index))
    }
}

/// Composite precondition for placing a mark.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a placement.
    #[instrument(level = "trace", skip(game))]
    pub fn check(index: usize, game: &GameController) -> Result<Verdict, GameError> {
        IndexInBounds::check(index, game)?;
        let rejection = GameNotOver::check(game).or_else(|| SquareIsEmpty::check(index, game));
        Ok(rejection.map_or(Verdict::Accept, Verdict::Ignore))
    }
}

fn check_invariants(after: &GameController) -> Result<(), GameError> {
    ControllerInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Postcondition failed");
        GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

// ─────────────────────────────────────────────────────────────
//  Move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark at a square index.
///
/// Postconditions:
/// - History is the old prefix `[0, cursor]` plus exactly one new board
/// - Cursor points at the new board
/// - All controller invariants hold
pub struct MoveContract;

impl Contract<GameController, usize> for MoveContract {
    fn pre(game: &GameController, index: &usize) -> Result<Verdict, GameError> {
        LegalMove::check(*index, game)
    }

    fn post(before: &GameController, after: &GameController) -> Result<(), GameError> {
        let kept = before.cursor() + 1;
        let prefix_kept = after.history().len() == kept + 1
            && after.history()[..kept] == before.history()[..kept];
        if !prefix_kept || after.cursor() != kept {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: history was not truncated and extended by one".to_string(),
            ));
        }
        check_invariants(after)
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Contract for moving the cursor to a history step.
///
/// Postconditions:
/// - History is unchanged
/// - All controller invariants hold
pub struct JumpContract;

impl Contract<GameController, usize> for JumpContract {
    fn pre(game: &GameController, step: &usize) -> Result<Verdict, GameError> {
        let len = game.history().len();
        if *step < len {
            Ok(Verdict::Accept)
        } else {
            Err(GameError::StepOutOfRange { step: *step, len })
        }
    }

    fn post(before: &GameController, after: &GameController) -> Result<(), GameError> {
        if before.history() != after.history() {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: jump modified the history".to_string(),
            ));
        }
        check_invariants(after)
    }
}
