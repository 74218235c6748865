//! Rewind Games - tic-tac-toe with move history and time travel.
//!
//! The game rules and the history store live in [`rewind_tictactoe`]; this
//! crate is the presentation layer around them.
//!
//! # Architecture
//!
//! - **TUI**: interactive board, status line and jump list
//! - **Replay**: prints the result of a scripted move list
//! - **Config**: TOML preferences and command-line arguments
//!
//! # Example
//!
//! ```
//! use rewind_games::{AppConfig, run_replay};
//!
//! let out = run_replay("4,0,2,8,6", None, false, &AppConfig::default()).unwrap();
//! assert!(out.contains("Winner: X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod move_list;
mod replay;
mod settings;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use logging::{init_file as init_file_logging, init_stderr as init_stderr_logging};
pub use settings::MoveOrder;

// Crate-level exports - Presentation
pub use move_list::{MoveRow, rows as move_rows};
pub use replay::{ReplayError, ReplayReport, parse_moves, run as run_replay};
pub use tui::{App, Control, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use rewind_tictactoe::{
    Board, Cell, GameHistoryStore, GameStatus, HistoryEntry, Move, MoveDescription, MoveOutcome,
    Player, Position, Square, WinResult, evaluate, has_moves_left,
};
