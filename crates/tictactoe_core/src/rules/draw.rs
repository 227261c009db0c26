//! Draw detection logic for tic-tac-toe.

use super::win::{check_winner, WinningLines};
use crate::types::{BoardState, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &BoardState) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is full without any completed line.
#[instrument(level = "trace", skip(board, lines))]
pub fn is_draw(board: &BoardState, lines: &WinningLines) -> bool {
    is_full(board) && check_winner(board, lines).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSize, Player};

    fn board_from(marks: &str) -> BoardState {
        let squares = marks
            .chars()
            .map(|c| match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            })
            .collect();
        BoardState {
            squares,
            ..BoardState::empty(BoardSize::CLASSIC)
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = BoardState::empty(BoardSize::CLASSIC);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&board_from("....X....")));
    }

    #[test]
    fn test_draw_detection() {
        let lines = WinningLines::for_size(BoardSize::CLASSIC);
        // X O X / O X X / O X O
        let board = board_from("XOXOXXOXO");
        assert!(is_full(&board));
        assert!(is_draw(&board, &lines));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let lines = WinningLines::for_size(BoardSize::CLASSIC);
        // X X X / O O X / O X O
        let board = board_from("XXXOOXOXO");
        assert!(is_full(&board));
        assert!(!is_draw(&board, &lines));
    }
}
