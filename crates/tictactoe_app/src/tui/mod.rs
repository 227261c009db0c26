//! Terminal UI: board, status line and move list.

mod app;
mod board;
mod input;
mod layout;
mod ui;

pub use app::{App, AppAction};
pub use board::CellEdges;
pub use input::move_cursor;
pub use layout::{history_window, ScreenLayout};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyEventKind,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::config::Config;

/// Runs the interactive game until the user quits.
pub fn run(config: &Config) -> Result<()> {
    // Log to a file so tracing output does not corrupt the screen
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(board_size = %config.board_size(), "Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Event loop: redraw, then block on the next terminal event.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let mut layout = None;
        terminal.draw(|frame| layout = Some(ui::draw(frame, &app)))?;

        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code)? == AppAction::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            TermEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(layout) = &layout {
                    app.handle_click(layout, mouse.column, mouse.row)?;
                }
            }
            _ => {}
        }
    }
}
