//! Win detection logic for tic-tac-toe.

use crate::types::{BoardSize, BoardState, Player, Square};
use tracing::instrument;

/// Every line that wins the game on a board of a given size.
///
/// Generated once from the board size: rows top to bottom, columns left to
/// right, then the main diagonal and the anti-diagonal. For a 3x3 board this
/// is the classic table of eight lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLines {
    size: BoardSize,
    lines: Vec<Vec<usize>>,
}

impl WinningLines {
    /// Builds the line table for `size`.
    #[instrument]
    pub fn for_size(size: BoardSize) -> Self {
        let n = size.get();
        let mut lines = Vec::with_capacity(2 * n + 2);

        // Rows
        lines.extend((0..n).map(|row| (0..n).map(|col| row * n + col).collect()));
        // Columns
        lines.extend((0..n).map(|col| (0..n).map(|row| row * n + col).collect()));
        // Diagonals
        lines.push((0..n).map(|i| i * n + i).collect());
        lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());

        Self { size, lines }
    }

    /// Board size the table was built for.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false: every board has at least its rows.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over the lines in table order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.lines.iter().map(Vec::as_slice)
    }

    /// Returns the first line fully held by one player, with that player.
    #[instrument(level = "trace", skip_all)]
    pub fn completed_line<'a>(&'a self, board: &BoardState) -> Option<(Player, &'a [usize])> {
        self.iter().find_map(|line| {
            let (first, rest) = line.split_first()?;
            let player = board.get(*first)?.player()?;
            rest.iter()
                .all(|i| board.get(*i) == Some(Square::Occupied(player)))
                .then_some((player, line))
        })
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player holds a complete line,
/// `None` otherwise. Evaluated fresh on every call.
#[instrument(level = "trace", skip_all)]
pub fn check_winner(board: &BoardState, lines: &WinningLines) -> Option<Player> {
    lines.completed_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Coordinates;

    fn place(board: BoardState, index: usize, player: Player) -> BoardState {
        board.with_move(index, player, Coordinates::Unset)
    }

    #[test]
    fn test_classic_table() {
        let lines = WinningLines::for_size(BoardSize::CLASSIC);
        let expected: Vec<Vec<usize>> = vec![
            vec![0, 1, 2],
            vec![3, 4, 5],
            vec![6, 7, 8],
            vec![0, 3, 6],
            vec![1, 4, 7],
            vec![2, 5, 8],
            vec![0, 4, 8],
            vec![2, 4, 6],
        ];
        let actual: Vec<Vec<usize>> = lines.iter().map(<[usize]>::to_vec).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_no_winner_empty_board() {
        let lines = WinningLines::for_size(BoardSize::CLASSIC);
        let board = BoardState::empty(BoardSize::CLASSIC);
        assert_eq!(check_winner(&board, &lines), None);
    }

    #[test]
    fn test_winner_top_row() {
        let lines = WinningLines::for_size(BoardSize::CLASSIC);
        let mut board = BoardState::empty(BoardSize::CLASSIC);
        for i in [0, 1, 2] {
            board = place(board, i, Player::X);
        }
        assert_eq!(check_winner(&board, &lines), Some(Player::X));
        assert_eq!(
            lines.completed_line(&board).map(|(_, line)| line.to_vec()),
            Some(vec![0, 1, 2])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let lines = WinningLines::for_size(BoardSize::CLASSIC);
        let mut board = BoardState::empty(BoardSize::CLASSIC);
        for i in [2, 4, 6] {
            board = place(board, i, Player::O);
        }
        assert_eq!(check_winner(&board, &lines), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let lines = WinningLines::for_size(BoardSize::CLASSIC);
        let mut board = BoardState::empty(BoardSize::CLASSIC);
        board = place(board, 0, Player::X);
        board = place(board, 1, Player::X);
        board = place(board, 2, Player::O);
        assert_eq!(check_winner(&board, &lines), None);
    }

    #[test]
    fn test_larger_board_needs_full_line() {
        let size = BoardSize::new(4).unwrap();
        let lines = WinningLines::for_size(size);
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|line| line.len() == 4));

        let mut board = BoardState::empty(size);
        for i in [0, 5, 10] {
            board = place(board, i, Player::X);
        }
        assert_eq!(check_winner(&board, &lines), None);
        board = place(board, 15, Player::X);
        assert_eq!(check_winner(&board, &lines), Some(Player::X));
    }
}
