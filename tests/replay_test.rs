//! Tests for headless replay.

use strictly_history::{Player, Position, ReplayError, parse_positions, replay};

#[test]
fn test_replay_winning_game() {
    let positions = parse_positions("0,3,1,4,2").unwrap();
    let summary = replay(&positions, None, false, false).unwrap();

    assert_eq!(summary.status(), "Winner: X");
    let verdict = summary.verdict().unwrap();
    assert_eq!(*verdict.winner(), Player::X);
    assert_eq!(verdict.indices(), [0, 1, 2]);
    assert_eq!(summary.moves().len(), 6);
}

#[test]
fn test_replay_ignores_clicks_after_win() {
    let positions = parse_positions("0,3,1,4,2,8").unwrap();
    let summary = replay(&positions, None, false, false).unwrap();

    assert_eq!(*summary.current_move(), 5);
    assert_eq!(summary.ignored(), &vec!["Game is already over".to_string()]);
    assert!(summary.board().is_empty(Position::BottomRight));
}

#[test]
fn test_replay_json() {
    let positions = parse_positions("top-left,center").unwrap();
    let summary = replay(&positions, Some(0), false, false).unwrap();
    let json: serde_json::Value = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["current_move"], 0);
    assert_eq!(json["status"], "Next player: X");
    assert_eq!(json["moves"][0]["label"], "No moves have been made");
    assert_eq!(json["moves"][0]["kind"], "Current");
    assert_eq!(json["moves"][2]["label"], "Go to move #2 (1, 1)");
    assert!(json["verdict"].is_null());
}

#[test]
fn test_replay_rejects_bad_input() {
    assert_eq!(
        parse_positions("0,nine"),
        Err(ReplayError::InvalidPosition("nine".to_string()))
    );
}
