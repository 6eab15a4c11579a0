//! Move history and the game controller.
//!
//! The controller owns every piece of game state: the list of board
//! snapshots, the index of the snapshot being viewed, and the display
//! order of the move list. Whose turn it is follows from the index
//! parity and is never stored.

use super::rules::{self, BoardStatus, Verdict};
use super::{Board, MoveLocation, Player, Position};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// One recorded snapshot and the cell played to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, derive_new::new)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Cell played; `None` for the initial empty board.
    location: Option<MoveLocation>,
}

/// Outcome of clicking a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ClickOutcome {
    /// The move was recorded as history entry `move_number`.
    #[display("Played move #{}", move_number)]
    Played {
        /// Index of the new history entry.
        move_number: usize,
    },
    /// The cell already holds a mark; nothing changed.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
    /// The viewed snapshot already has a winner; nothing changed.
    #[display("Game is already over")]
    GameOver,
}

impl ClickOutcome {
    /// Returns true if the click produced a new snapshot.
    pub fn is_played(&self) -> bool {
        matches!(self, ClickOutcome::Played { .. })
    }
}

/// Error raised by history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// The requested entry does not exist.
    #[display("Move #{} is out of range (history has {} entries)", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Current history length.
        len: usize,
    },
}

/// Owns the move history and the viewed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    history: Vec<HistoryEntry>,
    current_move: usize,
    reversed: bool,
}

impl GameController {
    /// Creates a controller seeded with the empty board, listed chronologically.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(false)
    }

    /// Creates a controller with the given move-list order.
    #[instrument]
    pub fn with_order(reversed: bool) -> Self {
        Self {
            history: vec![HistoryEntry::new(Board::new(), None)],
            current_move: 0,
            reversed,
        }
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of recorded snapshots (never zero).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the initial snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Index of the snapshot being viewed.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Whether the move list is shown newest first.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// The snapshot being viewed.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.current_move]
    }

    /// The board being viewed.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Player to move on the viewed board.
    pub fn derived_turn(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Winner of the viewed board, if any.
    pub fn verdict(&self) -> Option<Verdict> {
        rules::evaluate(self.current_board())
    }

    /// Status of the viewed board.
    pub fn status(&self, detect_draw: bool) -> BoardStatus {
        rules::status(self.current_board(), self.derived_turn(), detect_draw)
    }

    /// Records `next_board` as the move after the viewed one.
    ///
    /// Entries after the viewed move are discarded first, so playing
    /// from an earlier move starts a new branch. Callers only pass legal
    /// successors of the current board; see [`Self::click_square`].
    #[instrument(skip(self, next_board), fields(current_move = self.current_move))]
    pub fn play_move(&mut self, next_board: Board, location: MoveLocation) {
        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Branching: dropping later moves");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(HistoryEntry::new(next_board, Some(location)));
        self.current_move = self.history.len() - 1;
        debug!(move_number = self.current_move, %location, "Move recorded");
    }

    /// Handles a click on `pos` of the viewed board.
    ///
    /// Clicks on an occupied cell, or on a board that already has a
    /// winner, are ignored.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn click_square(&mut self, pos: Position) -> ClickOutcome {
        let board = self.current_board();
        if self.verdict().is_some() {
            debug!("Click ignored: game is over");
            return ClickOutcome::GameOver;
        }
        if !board.is_empty(pos) {
            debug!("Click ignored: square occupied");
            return ClickOutcome::Occupied(pos);
        }

        let player = self.derived_turn();
        let next_board = board.with_mark(pos, player);
        self.play_move(next_board, MoveLocation::from(pos));
        info!(%player, position = %pos, move_number = self.current_move, "Move played");
        ClickOutcome::Played {
            move_number: self.current_move,
        }
    }

    /// Views the snapshot at `index`. History is left unchanged.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.history.len() {
            return Err(HistoryError::OutOfRange {
                index,
                len: self.history.len(),
            });
        }
        self.current_move = index;
        debug!("Jumped");
        Ok(())
    }

    /// Flips the move-list display order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.reversed = !self.reversed;
        debug!(reversed = self.reversed, "Move order toggled");
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
