//! Pure tic-tac-toe game logic with a navigable move history.
//!
//! # Architecture
//!
//! - **Types**: players, squares, board sizes and immutable board states
//! - **Rules**: win lines generated from the board size, draw detection
//! - **Controller**: history, cursor and the `(state, event) -> state` transitions
//! - **Invariants / contracts**: properties post-checked after every transition
//!   in debug builds
//!
//! Rendering is left to the caller, which polls the query surface
//! (`current_board`, `status`, `history_entries`, `winning_line`) after
//! every transition.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod coordinates;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Event, GameError, MoveRejection};
pub use controller::{GameController, GameStatus, HistoryEntry};
pub use coordinates::{coordinates_of, Coordinates};
pub use rules::{check_winner, WinningLines};
pub use types::{BoardSize, BoardState, Player, Square};
