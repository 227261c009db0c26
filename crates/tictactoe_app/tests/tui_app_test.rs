//! Tests for terminal UI input handling.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tictactoe_app::tui::{App, AppAction, ScreenLayout};
use tictactoe_app::{Config, HistoryOrder};
use tictactoe_core::{BoardSize, GameStatus, Player, Square};

fn classic_app() -> App {
    App::new(&Config::default())
}

fn layout_for(app: &App) -> ScreenLayout {
    ScreenLayout::compute(Rect::new(0, 0, 100, 40), app.game().board_size())
}

#[test]
fn test_starts_centered() {
    let app = classic_app();
    assert_eq!(app.selected(), 4);
    assert_eq!(app.status_line(), "Next player: X");
}

#[test]
fn test_arrows_and_enter_place_marks() {
    let mut app = classic_app();
    app.handle_key(KeyCode::Enter).unwrap();
    app.handle_key(KeyCode::Up).unwrap();
    app.handle_key(KeyCode::Char(' ')).unwrap();

    let board = app.game().current_board();
    assert_eq!(board.get(4), Some(Square::Occupied(Player::X)));
    assert_eq!(board.get(1), Some(Square::Occupied(Player::O)));
}

#[test]
fn test_digits_place_on_classic_board() {
    let mut app = classic_app();
    for key in ['1', '5', '2', '6', '3'] {
        app.handle_key(KeyCode::Char(key)).unwrap();
    }
    assert_eq!(app.game().status(), GameStatus::Winner(Player::X));
}

#[test]
fn test_occupied_click_shows_reason() {
    let mut app = classic_app();
    app.handle_key(KeyCode::Enter).unwrap();
    app.handle_key(KeyCode::Enter).unwrap();
    assert_eq!(app.game().history().len(), 2);
    assert_eq!(
        app.status_line(),
        "Next player: O | Square 4 is already occupied"
    );
}

#[test]
fn test_history_keys_navigate() {
    let mut app = classic_app();
    for key in ['1', '5', '9'] {
        app.handle_key(KeyCode::Char(key)).unwrap();
    }
    app.handle_key(KeyCode::Char('[')).unwrap();
    assert_eq!(app.game().cursor(), 2);
    app.handle_key(KeyCode::Home).unwrap();
    assert_eq!(app.game().cursor(), 0);
    // Already at the start: no further step back.
    app.handle_key(KeyCode::Char('[')).unwrap();
    assert_eq!(app.game().cursor(), 0);
    app.handle_key(KeyCode::End).unwrap();
    assert_eq!(app.game().cursor(), 3);
    app.handle_key(KeyCode::Char(']')).unwrap();
    assert_eq!(app.game().cursor(), 3);
    assert_eq!(app.game().history().len(), 4);
}

#[test]
fn test_click_on_cell_places_mark() {
    let mut app = classic_app();
    let layout = layout_for(&app);
    let cell = layout.cells[8];
    app.handle_click(&layout, cell.x + 1, cell.y).unwrap();

    assert_eq!(app.selected(), 8);
    assert_eq!(
        app.game().current_board().get(8),
        Some(Square::Occupied(Player::X))
    );
}

#[test]
fn test_click_on_history_entry_jumps() {
    let mut app = classic_app();
    for key in ['1', '5'] {
        app.handle_key(KeyCode::Char(key)).unwrap();
    }
    let layout = layout_for(&app);
    let inner = layout.history_inner;

    // Ascending: row 0 is the game start.
    app.handle_click(&layout, inner.x + 1, inner.y).unwrap();
    assert_eq!(app.game().cursor(), 0);

    // Descending: row 0 is the latest move.
    app.handle_key(KeyCode::Char('s')).unwrap();
    assert_eq!(app.history_order(), HistoryOrder::Descending);
    app.handle_click(&layout, inner.x + 1, inner.y).unwrap();
    assert_eq!(app.game().cursor(), 2);

    // Below the last entry nothing happens.
    app.handle_click(&layout, inner.x + 1, inner.y + 10).unwrap();
    assert_eq!(app.game().cursor(), 2);
}

#[test]
fn test_restart_and_quit() {
    let mut app = classic_app();
    app.handle_key(KeyCode::Enter).unwrap();
    app.handle_key(KeyCode::Char('r')).unwrap();
    assert_eq!(app.game().history().len(), 1);
    assert_eq!(app.status_line(), "Next player: X | Game restarted");
    assert_eq!(app.handle_key(KeyCode::Char('q')).unwrap(), AppAction::Quit);
}

#[test]
fn test_larger_board_from_config() {
    let config = Config::default().with_overrides(BoardSize::new(5).ok(), None);
    let mut app = App::new(&config);
    assert_eq!(app.selected(), 12);
    // Digits only address the classic board.
    app.handle_key(KeyCode::Char('1')).unwrap();
    assert_eq!(app.game().history().len(), 1);
    app.handle_key(KeyCode::Right).unwrap();
    app.handle_key(KeyCode::Enter).unwrap();
    assert_eq!(
        app.game().current_board().get(13),
        Some(Square::Occupied(Player::X))
    );
}
