//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board states.
//! Rules are separated from history bookkeeping so the controller,
//! the invariants and the contracts can all compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, WinningLines};
