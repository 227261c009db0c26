//! First-class input events and error types.
//!
//! Events are what the rendering layer forwards from user clicks. They can be
//! logged, serialized and replayed independently of the controller.

use crate::types::{BoardSize, Player};
use serde::{Deserialize, Serialize};

/// A user action forwarded by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Event {
    /// A board square was clicked.
    #[display("click square {_0}")]
    CellClicked(usize),
    /// An entry of the move list was clicked.
    #[display("jump to step {_0}")]
    HistoryEntryClicked(usize),
}

/// Why a mark placement was ignored.
///
/// Ignored placements are not errors: the controller stays unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The square is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(usize),
    /// The game already has a winner.
    #[display("Game is already won by {_0}")]
    GameOver(Player),
}

/// Error raised when an input violates a precondition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Square index beyond the board.
    #[display("Square index {index} is out of range (board has {cells} squares)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of squares on the board.
        cells: usize,
    },

    /// History step beyond the recorded history.
    #[display("History step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// Board side length outside the supported range.
    #[display(
        "Board size {side} is not supported (expected {}..={})",
        BoardSize::MIN,
        BoardSize::MAX
    )]
    InvalidBoardSize {
        /// Requested side length.
        side: usize,
    },

    /// Board size text that is not a number.
    #[display("{input:?} is not a board size")]
    BoardSizeSyntax {
        /// Raw input.
        input: String,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}
