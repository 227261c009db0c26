//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_app::HistoryOrder;
use tictactoe_core::BoardSize;

/// Tic-tac-toe with a move list you can jump back through
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with history navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Board side length (3-9)
        #[arg(long)]
        size: Option<BoardSize>,

        /// Initial order of the move list
        #[arg(long, value_enum)]
        history_order: Option<HistoryOrder>,
    },

    /// Replay a move list and print the resulting game
    Replay {
        /// Square indices in play order, e.g. "0,4,1,5,2"
        #[arg(short, long, default_value = "")]
        moves: String,

        /// History step to jump to after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Board side length (3-9)
        #[arg(long)]
        size: Option<BoardSize>,

        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },
}
