//! Strictly History - tic-tac-toe with a navigable move history.
//!
//! # Architecture
//!
//! - **Games**: board types, the win evaluator, and the [`GameController`]
//!   that owns the snapshot history
//! - **TUI**: ratatui front end; a pure view model plus rendering and
//!   input dispatch
//! - **Replay**: headless playback through the same controller
//!
//! # Example
//!
//! ```
//! use strictly_history::{GameController, Position};
//!
//! let mut game = GameController::new();
//! game.click_square(Position::TopLeft);
//! game.click_square(Position::Center);
//! game.jump_to(1).unwrap();
//! game.click_square(Position::BottomRight);
//! assert_eq!(game.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardStatus, ClickOutcome, GameController, HistoryEntry, HistoryError, MoveLocation,
    Player, Position, Square, Verdict, evaluate, rules,
};

// Crate-level exports - Replay
pub use replay::{ReplayError, ReplaySummary, parse_positions, replay};

// Crate-level exports - TUI
pub use tui::run_tui;
