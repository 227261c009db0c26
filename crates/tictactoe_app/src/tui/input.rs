//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::BoardSize;

/// Moves the selected square based on arrow keys.
pub fn move_cursor(cursor: usize, key: KeyCode, size: BoardSize) -> usize {
    let n = size.get();
    let (row, col) = (cursor / n, cursor % n);

    match key {
        KeyCode::Right if col + 1 < n => cursor + 1,
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Down if row + 1 < n => cursor + n,
        KeyCode::Up if row > 0 => cursor - n,
        // No change for other keys or edge cases
        _ => cursor,
    }
}
