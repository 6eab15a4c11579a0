//! Pure view model derived from controller state.
//!
//! Nothing here touches the terminal. The ratatui renderer and the
//! headless `replay` command both format the game through these types.

use serde::Serialize;

use crate::games::tictactoe::{Board, GameController, Position, Square};

/// How a move-list entry is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveItemKind {
    /// The viewed move: plain status text.
    Current,
    /// Any other move: a control that jumps to it.
    Jump,
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct MoveListItem {
    /// History index this row refers to.
    index: usize,
    /// Text shown for the row.
    label: String,
    /// Whether the row is the current move or a jump control.
    kind: MoveItemKind,
}

impl MoveListItem {
    /// Returns true if activating this row should jump.
    pub fn is_jump(&self) -> bool {
        self.kind == MoveItemKind::Jump
    }
}

/// Presentation of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Cell position.
    pub position: Position,
    /// Square contents.
    pub square: Square,
    /// Part of the winning line.
    pub winning: bool,
}

/// Status line for the viewed board.
pub fn status_line(controller: &GameController, detect_draw: bool) -> String {
    controller.status(detect_draw).to_string()
}

/// Cells of the viewed board with the winning line flagged.
pub fn cell_views(controller: &GameController) -> [CellView; 9] {
    let board = controller.current_board();
    let verdict = controller.verdict();
    Position::ALL.map(|position| CellView {
        position,
        square: board.get(position),
        winning: verdict.is_some_and(|v| v.contains(position)),
    })
}

/// The move list in display order.
///
/// Each item keeps its history index, so jump targets do not depend on
/// the order the list is shown in.
pub fn move_list(controller: &GameController) -> Vec<MoveListItem> {
    let current = controller.current_move();
    let mut items: Vec<MoveListItem> = controller
        .history()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let (label, kind) = match (index == current, entry.location()) {
                (true, None) => ("No moves have been made".to_string(), MoveItemKind::Current),
                (true, Some(loc)) => (
                    format!("You are at move #{} {}", index, loc),
                    MoveItemKind::Current,
                ),
                (false, None) => ("Go to game start".to_string(), MoveItemKind::Jump),
                (false, Some(loc)) => (format!("Go to move #{} {}", index, loc), MoveItemKind::Jump),
            };
            MoveListItem { index, label, kind }
        })
        .collect();

    if controller.is_reversed() {
        items.reverse();
    }
    items
}

/// Plain-text grid with blanks for empty cells.
pub fn render_board_text(board: &Board) -> String {
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|pos| match board.get(*pos).mark() {
                    "" => " ",
                    mark => mark,
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();
    rows.join("\n--+---+--\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    fn labels(controller: &GameController) -> Vec<String> {
        move_list(controller)
            .into_iter()
            .map(|item| item.label().clone())
            .collect()
    }

    #[test]
    fn test_fresh_game() {
        let controller = GameController::new();
        assert_eq!(status_line(&controller, false), "Next player: X");
        assert_eq!(labels(&controller), vec!["No moves have been made"]);
        assert!(cell_views(&controller).iter().all(|c| !c.winning));
    }

    #[test]
    fn test_move_list_labels() {
        let mut controller = GameController::new();
        controller.click_square(Position::TopLeft);
        controller.click_square(Position::Center);

        assert_eq!(
            labels(&controller),
            vec![
                "Go to game start",
                "Go to move #1 (0, 0)",
                "You are at move #2 (1, 1)",
            ]
        );

        controller.jump_to(0).unwrap();
        let items = move_list(&controller);
        assert_eq!(items[0].label(), "No moves have been made");
        assert_eq!(items[0].kind(), &MoveItemKind::Current);
        assert_eq!(items[2].label(), "Go to move #2 (1, 1)");
        assert!(items[2].is_jump());
    }

    #[test]
    fn test_reversed_list_keeps_indices() {
        let mut controller = GameController::with_order(true);
        controller.click_square(Position::TopLeft);
        controller.click_square(Position::Center);

        let indices: Vec<usize> = move_list(&controller).iter().map(|i| *i.index()).collect();
        assert_eq!(indices, vec![2, 1, 0]);
        assert_eq!(
            move_list(&controller)[0].label(),
            "You are at move #2 (1, 1)"
        );
    }

    #[test]
    fn test_toggle_twice_restores_list() {
        let mut controller = GameController::new();
        controller.click_square(Position::TopLeft);
        controller.click_square(Position::Center);
        let original = move_list(&controller);

        controller.toggle_order();
        assert_ne!(move_list(&controller), original);
        controller.toggle_order();
        assert_eq!(move_list(&controller), original);
    }

    #[test]
    fn test_winning_cells_flagged() {
        let mut controller = GameController::new();
        for i in [0, 3, 1, 4, 2] {
            controller.click_square(Position::ALL[i]);
        }

        assert_eq!(status_line(&controller, false), "Winner: X");
        let winning: Vec<usize> = cell_views(&controller)
            .iter()
            .filter(|c| c.winning)
            .map(|c| c.position.to_index())
            .collect();
        assert_eq!(winning, vec![0, 1, 2]);
    }

    #[test]
    fn test_board_text() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::BottomRight, Player::O);
        assert_eq!(
            render_board_text(&board),
            "X |   |  \n--+---+--\n  |   |  \n--+---+--\n  |   | O"
        );
    }
}
