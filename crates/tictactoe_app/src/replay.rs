//! Headless replay of a move list.
//!
//! Feeds square clicks (and optionally a final history jump) through the
//! controller and reports the resulting query surface as text or JSON.

use derive_more::{Display, Error, From};
use serde::Serialize;
use tictactoe_core::{BoardSize, Event, GameController, GameError, GameStatus, HistoryEntry, Square};
use tracing::{debug, info, instrument};

/// Error raised while replaying a move list.
#[derive(Debug, Display, Error, From)]
pub enum ReplayError {
    /// A token in the move list is not a square index.
    #[display("Invalid move {token:?}: expected a square index")]
    InvalidMove {
        /// Offending token.
        token: String,
    },

    /// The controller refused an input.
    #[display("{_0}")]
    #[from]
    Game(GameError),
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Side length of the board.
    pub board_size: usize,
    /// Squares of the current board in row-major order.
    pub cells: Vec<Square>,
    /// Status of the current board.
    pub status: GameStatus,
    /// Move-navigator rows.
    pub history: Vec<HistoryEntry>,
    /// Squares of the winning line, if any.
    pub winning_line: Option<Vec<usize>>,
}

impl Snapshot {
    /// Captures the query surface of `game`.
    pub fn capture(game: &GameController) -> Self {
        Self {
            board_size: game.board_size().get(),
            cells: game.current_board().squares().to_vec(),
            status: game.status(),
            history: game.history_entries(),
            winning_line: game.winning_line().map(<[usize]>::to_vec),
        }
    }
}

/// Parses a comma or whitespace separated list of square indices.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<usize>, ReplayError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<usize>().map_err(|_| ReplayError::InvalidMove {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Clicks every move in order, then jumps to `jump` if given.
#[instrument]
pub fn run(
    board_size: BoardSize,
    moves: &[usize],
    jump: Option<usize>,
) -> Result<GameController, ReplayError> {
    let events = moves
        .iter()
        .map(|index| Event::CellClicked(*index))
        .chain(jump.map(Event::HistoryEntryClicked));

    let mut game = GameController::new(board_size);
    for event in events {
        debug!(%event, "Replaying event");
        game = game.reduce(event)?;
    }

    info!(status = %game.status(), steps = game.history().len(), "Replay finished");
    Ok(game)
}

/// Renders board, status line and move list as plain text.
pub fn render_text(game: &GameController) -> String {
    let mut out = format!("{}\n\n{}\n\n", game.current_board(), game.status());
    for entry in game.history_entries() {
        let marker = if entry.is_active() { ">" } else { " " };
        out.push_str(&format!("{} {:>2}. {}\n", marker, entry.step(), entry));
    }
    out
}
