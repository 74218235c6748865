//! Pure tic-tac-toe game logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Types**: immutable board snapshots built from [`Cell`] values
//! - **Rules**: win and draw evaluation over a single snapshot
//! - **History**: [`GameHistoryStore`], the ordered list of snapshots plus
//!   the position currently on display
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistoryStore, GameStatus, Player};
//!
//! let mut game = GameHistoryStore::new();
//! for cell in [4, 0, 2, 8, 6] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Player::X));
//!
//! // Rewind to the first move and branch off.
//! game.jump_to(1);
//! game.apply_move(8);
//! assert_eq!(game.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{Move, MoveOutcome};
pub use history::{GameHistoryStore, HistoryEntry, MoveDescription};
pub use position::Position;
pub use rules::{WinResult, evaluate, has_moves_left};
pub use status::GameStatus;
pub use types::{Board, Cell, Player, Square};

/// Alias used where the board's vocabulary reads better than the player's.
pub type Mark = Player;
