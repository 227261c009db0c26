//! Application state and key/mouse handling.

use crossterm::event::KeyCode;
use tictactoe_core::{BoardSize, Event, GameController, GameError, HistoryEntry};
use tracing::{debug, info};

use super::input::move_cursor;
use super::layout::{history_window, ScreenLayout};
use crate::config::{Config, HistoryOrder};

/// What the event loop should do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    game: GameController,
    selected: usize,
    history_order: HistoryOrder,
    message: Option<String>,
}

impl App {
    /// Creates a new application from the session config.
    pub fn new(config: &Config) -> Self {
        let size = *config.board_size();
        Self {
            game: GameController::new(size),
            selected: size.cell_count() / 2,
            history_order: *config.history_order(),
            message: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Square highlighted by the keyboard cursor.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Order of the move list.
    pub fn history_order(&self) -> HistoryOrder {
        self.history_order
    }

    /// Status text, followed by the reason the last click was ignored.
    pub fn status_line(&self) -> String {
        match &self.message {
            Some(message) => format!("{} | {}", self.game.status(), message),
            None => self.game.status().to_string(),
        }
    }

    /// Move-list rows in display order.
    pub fn ordered_entries(&self) -> Vec<HistoryEntry> {
        let mut entries = self.game.history_entries();
        if self.history_order == HistoryOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Forwards an event to the game.
    pub fn dispatch(&mut self, event: Event) -> Result<(), GameError> {
        debug!(%event, "Dispatching event");
        self.message = match event {
            Event::CellClicked(index) => self.game.rejection(index)?.map(|r| r.to_string()),
            Event::HistoryEntryClicked(_) => None,
        };
        self.game = self.game.clone().reduce(event)?;
        Ok(())
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<AppAction, GameError> {
        let size = self.game.board_size();
        let cursor = self.game.cursor();
        let last = self.game.history().len() - 1;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(AppAction::Quit),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('s') => {
                self.history_order = self.history_order.toggled();
                debug!(order = %self.history_order, "History order toggled");
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.selected = move_cursor(self.selected, key, size);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(Event::CellClicked(self.selected))?;
            }
            KeyCode::Char(c @ '1'..='9') if size == BoardSize::CLASSIC => {
                self.selected = c as usize - '1' as usize;
                self.dispatch(Event::CellClicked(self.selected))?;
            }
            KeyCode::Char('[') | KeyCode::PageUp if cursor > 0 => {
                self.dispatch(Event::HistoryEntryClicked(cursor - 1))?;
            }
            KeyCode::Char(']') | KeyCode::PageDown if cursor < last => {
                self.dispatch(Event::HistoryEntryClicked(cursor + 1))?;
            }
            KeyCode::Home => self.dispatch(Event::HistoryEntryClicked(0))?,
            KeyCode::End => self.dispatch(Event::HistoryEntryClicked(last))?,
            _ => {}
        }

        Ok(AppAction::Continue)
    }

    /// Handles a left click at a terminal position.
    pub fn handle_click(
        &mut self,
        layout: &ScreenLayout,
        column: u16,
        row: u16,
    ) -> Result<(), GameError> {
        if let Some(index) = layout.cell_at(column, row) {
            self.selected = index;
            return self.dispatch(Event::CellClicked(index));
        }

        if let Some(offset) = layout.history_row_at(column, row) {
            let entries = self.ordered_entries();
            let active = entries.iter().position(|e| e.is_active()).unwrap_or(0);
            let window = history_window(
                entries.len(),
                active,
                layout.history_inner.height as usize,
            );
            if let Some(entry) = entries[window].get(offset) {
                return self.dispatch(Event::HistoryEntryClicked(entry.step()));
            }
        }

        Ok(())
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameController::new(self.game.board_size());
        self.message = Some("Game restarted".to_string());
    }
}
