//! Tests for headless replay output.

use tictactoe_app::replay::{self, Snapshot};
use tictactoe_core::{BoardSize, GameStatus, Player};

#[test]
fn test_replay_text_output() {
    let game = replay::run(BoardSize::CLASSIC, &[0, 4, 1, 5, 2], None).unwrap();
    let text = replay::render_text(&game);

    assert!(text.starts_with("X|X|X\n-+-+-\n.|O|O\n-+-+-\n.|.|.\n"));
    assert!(text.contains("Winner: X"));
    assert!(text.contains("   0. Go to game start\n"));
    assert!(text.contains(">  5. Go to move #5 (0, 2)\n"));
}

#[test]
fn test_replay_jump_marks_active_step() {
    let game = replay::run(BoardSize::CLASSIC, &[0, 4, 1, 5, 2], Some(2)).unwrap();
    let text = replay::render_text(&game);
    assert!(text.contains("Next player: X"));
    assert!(text.contains(">  2. Go to move #2 (1, 1)\n"));
}

#[test]
fn test_snapshot_json() {
    let game = replay::run(BoardSize::CLASSIC, &[0, 4, 1, 5, 2], None).unwrap();
    let snapshot = Snapshot::capture(&game);
    assert_eq!(snapshot.status, GameStatus::Winner(Player::X));
    assert_eq!(snapshot.winning_line, Some(vec![0, 1, 2]));
    assert_eq!(snapshot.history.len(), 6);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["board_size"], 3);
    assert_eq!(json["status"]["Winner"], "X");
    assert_eq!(json["cells"][0]["Occupied"], "X");
    assert_eq!(json["cells"][6], "Empty");
    assert_eq!(json["history"][0]["coordinates"], "Unset");
    assert_eq!(json["history"][5]["is_active"], true);
}

#[test]
fn test_replay_out_of_range_move() {
    let err = replay::run(BoardSize::CLASSIC, &[9], None).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
