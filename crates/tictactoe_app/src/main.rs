//! Tictactoe - unified CLI
//!
//! Terminal game with a navigable move history, plus a headless replay mode.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_app::{replay, tui, Config, Snapshot};
use tictactoe_core::BoardSize;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play {
            size,
            history_order,
        } => tui::run(&config.with_overrides(size, history_order)),
        Command::Replay {
            moves,
            jump,
            size,
            json,
        } => {
            let config = config.with_overrides(size, None);
            initialize_stderr_tracing(&config);
            run_replay(*config.board_size(), &moves, jump, json)
        }
    }
}

/// Sends logs to stderr so stdout carries only the replay output.
fn initialize_stderr_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Replays `moves` and prints the result.
#[instrument(skip(moves))]
fn run_replay(board_size: BoardSize, moves: &str, jump: Option<usize>, json: bool) -> Result<()> {
    info!("Starting replay");

    let moves = replay::parse_moves(moves)?;
    let game = replay::run(board_size, &moves, jump)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&Snapshot::capture(&game))?);
    } else {
        print!("{}", replay::render_text(&game));
    }

    Ok(())
}
