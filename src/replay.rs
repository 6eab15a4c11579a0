//! Headless replay of a move sequence.
//!
//! Feeds cell clicks through the same [`GameController`] the TUI uses
//! and reports what the screen would show.

use derive_getters::Getters;
use derive_more::{Display, Error, From};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::games::tictactoe::{
    Board, ClickOutcome, GameController, HistoryError, Position, Verdict,
};
use crate::tui::view::{self, MoveListItem};

/// Error raised while building a replay.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ReplayError {
    /// A token is not a cell index 0-8 or a cell label.
    #[display("Invalid position '{}'", _0)]
    #[from(skip)]
    InvalidPosition(#[error(not(source))] String),
    /// The requested jump target does not exist.
    #[display("{}", _0)]
    History(HistoryError),
}

/// Parses a comma-separated list of cell indices (0-8) or labels.
#[instrument]
pub fn parse_positions(input: &str) -> Result<Vec<Position>, ReplayError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token)
                .ok_or_else(|| ReplayError::InvalidPosition(token.to_string()))
        })
        .collect()
}

/// Snapshot of a replayed game, as the TUI would present it.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct ReplaySummary {
    /// Board at the viewed move.
    board: Board,
    /// Status line.
    status: String,
    /// Winning line, if any.
    verdict: Option<Verdict>,
    /// Viewed history index.
    current_move: usize,
    /// Move list in display order.
    moves: Vec<MoveListItem>,
    /// Clicks that were ignored, with the reason.
    ignored: Vec<String>,
}

impl ReplaySummary {
    /// Renders the summary as plain text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.status);
        out.push_str("\n\n");
        out.push_str(&view::render_board_text(&self.board));
        out.push_str("\n\n");
        for (row, item) in self.moves.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", row + 1, item.label()));
        }
        for reason in &self.ignored {
            out.push_str(&format!("ignored: {}\n", reason));
        }
        out
    }
}

/// Plays `positions` in order, then optionally jumps to `jump`.
#[instrument(skip(positions), fields(moves = positions.len()))]
pub fn replay(
    positions: &[Position],
    jump: Option<usize>,
    reversed: bool,
    detect_draw: bool,
) -> Result<ReplaySummary, ReplayError> {
    let mut controller = GameController::with_order(reversed);
    let mut ignored = Vec::new();

    for &pos in positions {
        match controller.click_square(pos) {
            ClickOutcome::Played { .. } => {}
            outcome => {
                warn!(%outcome, "Click ignored");
                ignored.push(outcome.to_string());
            }
        }
    }

    if let Some(index) = jump {
        controller.jump_to(index)?;
    }

    info!(
        history = controller.len(),
        current_move = controller.current_move(),
        "Replay finished"
    );

    Ok(ReplaySummary {
        board: controller.current_board().clone(),
        status: view::status_line(&controller, detect_draw),
        verdict: controller.verdict(),
        current_move: controller.current_move(),
        moves: view::move_list(&controller),
        ignored,
    })
}
