//! Game controller: history, cursor and every state transition.
//!
//! Transitions consume the controller and return the next one, so the
//! rendering layer redraws from whatever state it gets back:
//!
//! ```
//! use tictactoe_core::{BoardSize, Event, GameController, GameStatus, Player};
//!
//! let game = GameController::new(BoardSize::CLASSIC)
//!     .reduce(Event::CellClicked(4))?
//!     .reduce(Event::CellClicked(0))?;
//! assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
//!
//! let game = game.reduce(Event::HistoryEntryClicked(1))?;
//! assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

use crate::action::{Event, GameError, MoveRejection};
use crate::contracts::{Contract, JumpContract, MoveContract, Verdict};
use crate::coordinates::{coordinates_of, Coordinates};
use crate::rules::{self, WinningLines};
use crate::types::{BoardSize, BoardState, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument};

/// Status of the board under the cursor.
///
/// Recomputed on every query; there is no stored phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// A player holds a complete line.
    Winner(Player),
    /// Every square is filled and nobody won.
    Draw,
    /// The game goes on.
    InProgress {
        /// Player to move.
        next: Player,
    },
}

impl GameStatus {
    /// Returns true once placements are no longer accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Winner(player) => Some(*player),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Winner(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
        }
    }
}

/// One row of the move navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    step: usize,
    coordinates: Coordinates,
    is_active: bool,
}

impl HistoryEntry {
    /// History step this entry jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Where the move of this step landed (`Unset` for step 0).
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// True for the step under the cursor.
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coordinates {
            Coordinates::Unset => write!(f, "Go to game start"),
            coordinates => write!(f, "Go to move #{} {}", self.step, coordinates),
        }
    }
}

/// Single source of truth for the board, the turn and the history.
///
/// `x_is_next` is derived from the cursor parity and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    pub(crate) board_size: BoardSize,
    pub(crate) lines: Rc<WinningLines>,
    pub(crate) history: Vec<BoardState>,
    pub(crate) cursor: usize,
}

impl GameController {
    /// Starts a session with one empty board in the history.
    #[instrument]
    pub fn new(board_size: BoardSize) -> Self {
        Self {
            board_size,
            lines: Rc::new(WinningLines::for_size(board_size)),
            history: vec![BoardState::empty(board_size)],
            cursor: 0,
        }
    }

    /// Builds a controller by clicking `moves` in order.
    ///
    /// Clicks that the game ignores (occupied square, game over) are skipped
    /// the same way they are during play.
    #[instrument]
    pub fn replay(board_size: BoardSize, moves: &[usize]) -> Result<Self, GameError> {
        moves
            .iter()
            .try_fold(Self::new(board_size), |game, index| game.place_mark(*index))
    }

    /// Board side length.
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    /// Precomputed winning lines for this board size.
    pub fn winning_lines(&self) -> &WinningLines {
        &self.lines
    }

    /// All recorded board states; index 0 is the empty board.
    pub fn history(&self) -> &[BoardState] {
        &self.history
    }

    /// Index of the displayed board state.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.cursor % 2 == 0
    }

    /// Player placing the next mark.
    pub fn next_player(&self) -> Player {
        if self.x_is_next() { Player::X } else { Player::O }
    }

    /// Board state under the cursor.
    pub fn current_board(&self) -> &BoardState {
        &self.history[self.cursor]
    }

    /// Winner of the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current_board(), &self.lines)
    }

    /// Squares of the first completed line on the current board.
    pub fn winning_line(&self) -> Option<&[usize]> {
        self.lines
            .completed_line(self.current_board())
            .map(|(_, line)| line)
    }

    /// Status of the current board.
    #[instrument(level = "trace", skip(self), fields(cursor = self.cursor))]
    pub fn status(&self) -> GameStatus {
        if let Some(player) = self.winner() {
            GameStatus::Winner(player)
        } else if rules::is_full(self.current_board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        }
    }

    /// Reports why clicking `index` would be ignored, if it would.
    ///
    /// # Errors
    ///
    /// Returns `GameError::IndexOutOfRange` if `index` is beyond the board.
    pub fn rejection(&self, index: usize) -> Result<Option<MoveRejection>, GameError> {
        Ok(match MoveContract::pre(self, &index)? {
            Verdict::Accept => None,
            Verdict::Ignore(rejection) => Some(rejection),
        })
    }

    /// Places the next player's mark at `index`.
    ///
    /// Clicking an occupied square or clicking after the game is won is a
    /// no-op: the same controller comes back. Otherwise any history beyond
    /// the cursor is discarded and the new board is appended.
    ///
    /// # Errors
    ///
    /// Returns `GameError::IndexOutOfRange` if `index` is beyond the board.
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.next_player()))]
    pub fn place_mark(self, index: usize) -> Result<Self, GameError> {
        if let Verdict::Ignore(rejection) = MoveContract::pre(&self, &index)? {
            debug!(%rejection, "Ignoring placement");
            return Ok(self);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.next_player();
        let coordinates = coordinates_of(index, self.board_size);
        let next = self.current_board().with_move(index, player, coordinates);

        let mut game = self;
        game.history.truncate(game.cursor + 1);
        game.history.push(next);
        game.cursor = game.history.len() - 1;

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        debug!(%coordinates, step = game.cursor, "Mark placed");
        Ok(game)
    }

    /// Moves the cursor to history step `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns `GameError::StepOutOfRange` if `step` is not in the history.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn jump_to(self, step: usize) -> Result<Self, GameError> {
        JumpContract::pre(&self, &step)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.cursor = step;

        #[cfg(debug_assertions)]
        JumpContract::post(&before, &game)?;

        debug!(step, "Jumped through history");
        Ok(game)
    }

    /// Applies a user event.
    #[instrument(skip(self))]
    pub fn reduce(self, event: Event) -> Result<Self, GameError> {
        match event {
            Event::CellClicked(index) => self.place_mark(index),
            Event::HistoryEntryClicked(step) => self.jump_to(step),
        }
    }

    /// Move-navigator rows in history order.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.history
            .iter()
            .enumerate()
            .map(|(step, board)| HistoryEntry {
                step,
                coordinates: board.coordinates(),
                is_active: step == self.cursor,
            })
            .collect()
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(BoardSize::CLASSIC)
    }
}
