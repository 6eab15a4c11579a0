//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board) snapshot. The
//! controller and the renderer both re-derive the verdict from whichever
//! snapshot is selected instead of storing it.

pub mod draw;
pub mod win;

pub use draw::{BoardStatus, is_full, status};
pub use win::{LINES, Verdict, evaluate};
