//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a single board snapshot. Nothing here
//! mutates its input; highlighting the winning line produces a new board.

pub mod draw;
pub mod win;

pub use draw::{has_moves_left, is_draw, is_full};
pub use win::{LINES, WinResult, check_winner, evaluate};
