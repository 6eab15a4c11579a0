//! Tests for tic-tac-toe positions and board snapshots.

use strictly_history::{Board, MoveLocation, Player, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_row_and_column() {
    assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (1, 2));
    assert_eq!((Position::BottomLeft.row(), Position::BottomLeft.col()), (2, 0));
    assert_eq!(MoveLocation::from(Position::BottomLeft).to_string(), "(2, 0)");
}

#[test]
fn test_marks_produce_new_snapshots() {
    let empty = Board::new();
    let first = empty.with_mark(Position::TopLeft, Player::X);
    let second = first.with_mark(Position::Center, Player::O);

    assert_eq!(empty, Board::new());
    assert!(empty.is_empty(Position::TopLeft));
    assert_eq!(first.get(Position::TopLeft), Square::Occupied(Player::X));
    assert!(first.is_empty(Position::Center));
    assert_eq!(second.get(Position::Center), Square::Occupied(Player::O));
}
