//! Terminal tic-tac-toe with a time-travelling move list.
//!
//! # Architecture
//!
//! - **Config**: TOML session settings with command-line overrides
//! - **Replay**: headless move-list playback with text or JSON output
//! - **TUI**: ratatui front end forwarding clicks and keys to the game controller
//!
//! Game rules and history live in `tictactoe_core`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod replay;
pub mod tui;

pub use config::{Config, ConfigError, HistoryOrder};
pub use replay::{ReplayError, Snapshot};
