//! Row/column coordinates of board squares.

use crate::types::BoardSize;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Location of the move that produced a board state.
///
/// The initial board was not produced by any move, so it carries `Unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Coordinates {
    /// No move produced this state.
    #[default]
    Unset,
    /// Zero-based row and column of the move.
    Set {
        /// Row, counted from the top.
        row: usize,
        /// Column, counted from the left.
        column: usize,
    },
}

impl Coordinates {
    /// Returns the row, if set.
    pub fn row(self) -> Option<usize> {
        match self {
            Coordinates::Unset => None,
            Coordinates::Set { row, .. } => Some(row),
        }
    }

    /// Returns the column, if set.
    pub fn column(self) -> Option<usize> {
        match self {
            Coordinates::Unset => None,
            Coordinates::Set { column, .. } => Some(column),
        }
    }

    /// Converts back to a row-major square index.
    pub fn index(self, size: BoardSize) -> Option<usize> {
        match self {
            Coordinates::Set { row, column } if row < size.get() && column < size.get() => {
                Some(row * size.get() + column)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinates::Unset => write!(f, "-"),
            Coordinates::Set { row, column } => write!(f, "({}, {})", row, column),
        }
    }
}

/// Computes the coordinates of a row-major square index.
#[instrument(level = "trace")]
pub fn coordinates_of(index: usize, size: BoardSize) -> Coordinates {
    Coordinates::Set {
        row: index / size.get(),
        column: index % size.get(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_of_classic() {
        let size = BoardSize::CLASSIC;
        assert_eq!(coordinates_of(0, size), Coordinates::Set { row: 0, column: 0 });
        assert_eq!(coordinates_of(2, size), Coordinates::Set { row: 0, column: 2 });
        assert_eq!(coordinates_of(7, size), Coordinates::Set { row: 2, column: 1 });
    }

    #[test]
    fn test_coordinates_round_trip_on_larger_board() {
        let size = BoardSize::new(5).unwrap();
        let coords = coordinates_of(13, size);
        assert_eq!(coords.row(), Some(2));
        assert_eq!(coords.column(), Some(3));
        assert_eq!(coords.index(size), Some(13));
    }

    #[test]
    fn test_unset_has_no_location() {
        assert_eq!(Coordinates::Unset.row(), None);
        assert_eq!(Coordinates::Unset.index(BoardSize::CLASSIC), None);
        assert_eq!(Coordinates::Unset.to_string(), "-");
        assert_eq!(Coordinates::Set { row: 1, column: 2 }.to_string(), "(1, 2)");
    }
}
