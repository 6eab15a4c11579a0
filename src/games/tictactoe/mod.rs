//! Tic-tac-toe with a navigable move history.

mod history;
mod position;
pub mod rules;
mod types;

pub use history::{ClickOutcome, GameController, HistoryEntry, HistoryError};
pub use position::{MoveLocation, Position};
pub use rules::{BoardStatus, Verdict, evaluate};
pub use types::{Board, Player, Square};
