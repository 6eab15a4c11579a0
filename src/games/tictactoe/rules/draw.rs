//! Full-board detection and the derived board status.

use super::super::{Board, Player, Square};
use super::win::{Verdict, evaluate};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Status of a single snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    /// Moves remain (or draws are not being detected).
    InProgress {
        /// The player to move.
        next: Player,
    },
    /// A line is complete.
    Won(Verdict),
    /// Full board, no winner. Only reported with draw detection on.
    Draw,
}

impl std::fmt::Display for BoardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardStatus::InProgress { next } => write!(f, "Next player: {}", next),
            BoardStatus::Won(verdict) => write!(f, "Winner: {}", verdict.winner()),
            BoardStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Derives the status of `board` with `next` to move.
///
/// A full board without a winner stays `InProgress` unless
/// `detect_draw` is set.
#[instrument(level = "trace")]
pub fn status(board: &Board, next: Player, detect_draw: bool) -> BoardStatus {
    match evaluate(board) {
        Some(verdict) => BoardStatus::Won(verdict),
        None if detect_draw && is_full(board) => BoardStatus::Draw,
        None => BoardStatus::InProgress { next },
    }
}
