//! Non-interactive replay of a scripted move list.

use crate::config::AppConfig;
use crate::move_list::{self, MoveRow};
use anyhow::{Result, bail};
use derive_more::{Display, Error};
use rewind_tictactoe::{GameHistoryStore, GameStatus, Player, Position, evaluate};
use serde::Serialize;
use tracing::{info, instrument};

/// A move list entry that names no cell.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error: {} at {}:{}", message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses a comma or space separated list of cells (indices 0-8 or labels).
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<usize>, ReplayError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token)
                .map(Position::to_index)
                .ok_or_else(|| ReplayError::new(format!("Unrecognized cell: {}", token)))
        })
        .collect()
}

/// Snapshot of a replayed game, ready for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Position on display.
    pub position: usize,
    /// Number of snapshots.
    pub length: usize,
    /// Status text.
    pub status: String,
    /// Winning mark, if any.
    pub winner: Option<Player>,
    /// Winning cell indices, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Cells in row-major order.
    pub board: [Option<Player>; 9],
    /// Move list rows.
    pub history: Vec<MoveRow>,
    #[serde(skip)]
    board_text: String,
}

impl ReplayReport {
    /// Builds a report of the position `store` currently displays.
    #[instrument(skip(store))]
    pub fn build(store: &GameHistoryStore, order: crate::settings::MoveOrder) -> Self {
        let board = store.current_board();
        let result = evaluate(board);
        let status = store.status();
        Self {
            position: store.current_position(),
            length: store.len(),
            status: status.to_string(),
            winner: match status {
                GameStatus::Winner(player) => Some(player),
                _ => None,
            },
            winning_line: result.map(|r| r.indices()),
            board: board.cells().map(|cell| cell.mark()),
            history: move_list::rows(store, order),
            board_text: board.display(),
        }
    }

    /// Plain-text rendering: board, status, then the move list.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.board_text, self.status);
        for row in &self.history {
            let marker = if row.current { '>' } else { ' ' };
            out.push_str(&format!("\n{} {}", marker, row.text));
        }
        out.push('\n');
        out
    }
}

/// Runs the `replay` command and returns what to print.
#[instrument(skip(config))]
pub fn run(moves: &str, at: Option<usize>, json: bool, config: &AppConfig) -> Result<String> {
    let cells = parse_moves(moves)?;
    let mut store = GameHistoryStore::replay(&cells);
    info!(moves = cells.len(), length = store.len(), "Replayed move list");

    if let Some(position) = at
        && !store.jump_to(position)
    {
        bail!(
            "Position {} is outside the history (length {})",
            position,
            store.len()
        );
    }

    let report = ReplayReport::build(&store, *config.move_order());
    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators_and_labels() {
        assert_eq!(parse_moves("4, 0 8,center").unwrap(), vec![4, 0, 8, 4]);
        assert_eq!(parse_moves("").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = parse_moves("4,nowhere").unwrap_err();
        assert!(err.message.contains("nowhere"));
        assert!(parse_moves("9").is_err());
    }

    #[test]
    fn test_text_report() {
        let text = run("4,0,2,8,6", None, false, &AppConfig::default()).unwrap();
        assert!(text.contains("Winner: X"));
        assert!(text.contains("> You are at move #5"));
        assert!(text.starts_with("O|2|X\n-+-+-\n4|X|6\n-+-+-\nX|8|O"));
    }

    #[test]
    fn test_json_report() {
        let json = run("4,0,2,8,6", Some(1), true, &AppConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["position"], 1);
        assert_eq!(value["length"], 6);
        assert_eq!(value["status"], "Next player: O");
        assert_eq!(value["board"][4], "X");
        assert!(value["winning_line"].is_null());
    }

    #[test]
    fn test_jump_past_end_fails() {
        assert!(run("4", Some(5), false, &AppConfig::default()).is_err());
    }
}
