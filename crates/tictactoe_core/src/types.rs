//! Core domain types for tic-tac-toe.

use crate::action::GameError;
use crate::coordinates::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player who makes the move leading to history step `step`.
    ///
    /// Step 0 is the empty board, so odd steps belong to X.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 1 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty => write!(f, "."),
            Square::Occupied(player) => write!(f, "{}", player),
        }
    }
}

/// Side length of a square board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
#[display("{_0}x{_0}")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest supported side length.
    pub const MIN: usize = 3;
    /// Largest supported side length.
    pub const MAX: usize = 9;
    /// The classic 3x3 board.
    pub const CLASSIC: BoardSize = BoardSize(3);

    /// Creates a board size, rejecting side lengths outside `MIN..=MAX`.
    pub fn new(side: usize) -> Result<Self, GameError> {
        if (Self::MIN..=Self::MAX).contains(&side) {
            Ok(Self(side))
        } else {
            Err(GameError::InvalidBoardSize { side })
        }
    }

    /// Side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of squares on the board.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = GameError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        Self::new(side)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl FromStr for BoardSize {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let side = s.trim().parse::<usize>().map_err(|_| GameError::BoardSizeSyntax {
            input: s.to_string(),
        })?;
        Self::new(side)
    }
}

/// Immutable snapshot of one point in game history.
///
/// Holds the squares in row-major order and the coordinates of the move
/// that produced it (`Unset` for the initial empty board).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub(crate) size: BoardSize,
    pub(crate) squares: Vec<Square>,
    pub(crate) coordinates: Coordinates,
}

impl BoardState {
    /// Creates the empty starting board.
    pub fn empty(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cell_count()],
            coordinates: Coordinates::Unset,
        }
    }

    /// Returns a new board with `player` at `index`, leaving `self` untouched.
    pub(crate) fn with_move(&self, index: usize, player: Player, coordinates: Coordinates) -> Self {
        let mut squares = self.squares.clone();
        squares[index] = Square::Occupied(player);
        Self {
            size: self.size,
            squares,
            coordinates,
        }
    }

    /// Board size this state was created for.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Coordinates of the move that created this state.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.size.get();
        for (row, chunk) in self.squares.chunks(side).enumerate() {
            if row > 0 {
                let rule = vec!["-"; side].join("+");
                writeln!(f)?;
                writeln!(f, "{}", rule)?;
            }
            let line = chunk
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
