//! Stateless UI rendering.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::board::render_board;
use super::layout::{history_window, ScreenLayout};

const HELP: &str = "Click/arrows+Enter: place | [ ] Home End: history | S: sort | R: restart | Q: quit";

/// Draws the whole screen and returns the layout used, for hit-testing.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let layout = ScreenLayout::compute(frame.area(), app.game().board_size());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    render_board(frame, &layout, app);
    render_history(frame, &layout, app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);

    layout
}

fn render_history(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let entries = app.ordered_entries();
    let active = entries.iter().position(|e| e.is_active()).unwrap_or(0);
    let window = history_window(entries.len(), active, layout.history_inner.height as usize);

    let lines: Vec<Line> = entries[window]
        .iter()
        .map(|entry| {
            let style = if entry.is_active() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{:>2}. {}", entry.step(), entry), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("History ({})", app.history_order()));
    frame.render_widget(block, layout.history);
    frame.render_widget(Paragraph::new(lines), layout.history_inner);
}
