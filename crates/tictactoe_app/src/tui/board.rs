//! Board rendering.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tictactoe_core::{coordinates_of, BoardSize, Coordinates, Player, Square};

use super::app::App;
use super::layout::ScreenLayout;

/// Which board edges a square touches.
///
/// Squares on an edge draw no grid line on that side, so the grid has only
/// inner lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellEdges {
    /// First row.
    pub top: bool,
    /// Last row.
    pub bottom: bool,
    /// First column.
    pub left: bool,
    /// Last column.
    pub right: bool,
}

impl CellEdges {
    /// Classifies the square at `index`.
    pub fn of(index: usize, size: BoardSize) -> Self {
        let last = size.get() - 1;
        match coordinates_of(index, size) {
            Coordinates::Set { row, column } => Self {
                top: row == 0,
                bottom: row == last,
                left: column == 0,
                right: column == last,
            },
            Coordinates::Unset => Self::default(),
        }
    }

    /// Grid lines drawn by this square: right and bottom unless on that edge.
    pub fn grid_borders(self) -> Borders {
        let mut borders = Borders::NONE;
        if !self.right {
            borders |= Borders::RIGHT;
        }
        if !self.bottom {
            borders |= Borders::BOTTOM;
        }
        borders
    }
}

/// Renders the board panel and every square.
pub fn render_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let game = app.game();
    let size = game.board_size();

    let panel = Block::default()
        .borders(Borders::ALL)
        .title(format!("Board {}", size));
    frame.render_widget(panel, layout.board);

    let winning = game.winning_line().unwrap_or(&[]);
    for (index, (square, area)) in game
        .current_board()
        .squares()
        .iter()
        .zip(&layout.cells)
        .enumerate()
    {
        let (symbol, base_style) = match square {
            Square::Empty => ("·", Style::default().fg(Color::DarkGray)),
            Square::Occupied(Player::X) => {
                ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            }
            Square::Occupied(Player::O) => {
                ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            }
        };

        let style = if index == app.selected() {
            base_style.bg(Color::White).fg(Color::Black)
        } else if winning.contains(&index) {
            base_style.bg(Color::Green)
        } else {
            base_style
        };

        let block = Block::default()
            .borders(CellEdges::of(index, size).grid_borders())
            .border_style(Style::default().fg(Color::DarkGray));

        let paragraph = Paragraph::new(symbol)
            .style(style)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(paragraph, *area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_and_center_edges() {
        let size = BoardSize::CLASSIC;
        assert_eq!(
            CellEdges::of(0, size),
            CellEdges { top: true, bottom: false, left: true, right: false }
        );
        assert_eq!(CellEdges::of(4, size), CellEdges::default());
        assert_eq!(
            CellEdges::of(8, size),
            CellEdges { top: false, bottom: true, left: false, right: true }
        );
    }

    #[test]
    fn test_grid_borders_skip_outer_edges() {
        let size = BoardSize::CLASSIC;
        assert_eq!(
            CellEdges::of(4, size).grid_borders(),
            Borders::RIGHT | Borders::BOTTOM
        );
        assert_eq!(CellEdges::of(2, size).grid_borders(), Borders::BOTTOM);
        assert_eq!(CellEdges::of(8, size).grid_borders(), Borders::NONE);
    }
}
