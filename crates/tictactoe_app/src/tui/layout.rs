//! Screen geometry shared by drawing and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::ops::Range;
use tictactoe_core::BoardSize;

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the move-list panel.
pub const HISTORY_WIDTH: u16 = 30;

/// Rectangles of every widget for a given terminal area.
///
/// Computed the same way for drawing and for mapping mouse clicks back to
/// squares and history entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Board panel including its border.
    pub board: Rect,
    /// One rectangle per square, row-major, clipped to the board panel.
    pub cells: Vec<Rect>,
    /// Status line.
    pub status: Rect,
    /// Move-list panel including its border.
    pub history: Rect,
    /// Move-list rows area (inside the border).
    pub history_inner: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Lays out the screen for a board of `size` inside `area`.
    pub fn compute(area: Rect, size: BoardSize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Board + history
                Constraint::Length(3), // Status
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(HISTORY_WIDTH)])
            .split(rows[1]);

        let board = body[0];
        let board_inner = inner(board);
        let n = size.get() as u16;
        let grid = center_rect(board_inner, n * CELL_WIDTH, n * CELL_HEIGHT);

        let cells = (0..size.cell_count())
            .map(|index| {
                let row = index as u16 / n;
                let col = index as u16 % n;
                Rect::new(
                    grid.x + col * CELL_WIDTH,
                    grid.y + row * CELL_HEIGHT,
                    CELL_WIDTH,
                    CELL_HEIGHT,
                )
                .intersection(board_inner)
            })
            .collect();

        Self {
            title: rows[0],
            board,
            cells,
            status: rows[2],
            history: body[1],
            history_inner: inner(body[1]),
            help: rows[3],
        }
    }

    /// Square under the given terminal position.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cells.iter().position(|rect| contains(*rect, column, row))
    }

    /// Row offset inside the move list under the given terminal position.
    pub fn history_row_at(&self, column: u16, row: u16) -> Option<usize> {
        contains(self.history_inner, column, row).then(|| (row - self.history_inner.y) as usize)
    }
}

/// Range of move-list rows visible in a panel of `height` rows,
/// scrolled so that row `active` stays on screen.
pub fn history_window(len: usize, active: usize, height: usize) -> Range<usize> {
    let start = if active < height { 0 } else { active + 1 - height };
    start..len.min(start + height)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn inner(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_fit_inside_board() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 40), BoardSize::CLASSIC);
        assert_eq!(layout.cells.len(), 9);
        for cell in &layout.cells {
            assert_eq!(cell.width, CELL_WIDTH);
            assert_eq!(cell.height, CELL_HEIGHT);
            assert_eq!(cell.intersection(layout.board), *cell);
        }
    }

    #[test]
    fn test_cell_at_maps_back() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 100, 40), BoardSize::CLASSIC);
        let cell = layout.cells[5];
        assert_eq!(layout.cell_at(cell.x + 3, cell.y + 1), Some(5));
        assert_eq!(layout.cell_at(0, 0), None);
    }

    #[test]
    fn test_history_window_scrolls_to_active() {
        assert_eq!(history_window(5, 2, 10), 0..5);
        assert_eq!(history_window(20, 3, 10), 0..10);
        assert_eq!(history_window(20, 15, 10), 6..16);
        assert_eq!(history_window(20, 19, 10), 10..20);
    }
}
