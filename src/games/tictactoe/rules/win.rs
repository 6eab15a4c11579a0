//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Winning lines, checked in order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who won and which three cells did it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, derive_new::new)]
pub struct Verdict {
    /// The player holding all three cells.
    winner: Player,
    /// The three winning cells, in line order.
    line: [Position; 3],
}

impl Verdict {
    /// Board indices of the winning cells.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Checks whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Evaluates the board for a winner.
///
/// Returns the first fully marked line in [`LINES`] order, or `None`.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Option<Verdict> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(Verdict::new(player, [a, b, c]))
            }
            _ => None,
        }
    })
}
