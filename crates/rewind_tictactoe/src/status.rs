//! Display status derived from a board snapshot.

use crate::rules::{evaluate, has_moves_left};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the snapshot on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Someone completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Board full, no line completed.
    #[display("It's a draw")]
    Draw,
    /// Game continues with this player to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl GameStatus {
    /// Derives the status of `board` shown at history `position`.
    #[instrument(skip(board))]
    pub fn of(board: &Board, position: usize) -> Self {
        if let Some(result) = evaluate(board) {
            GameStatus::Winner(result.winner())
        } else if !has_moves_left(board) {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(Player::for_turn(position))
        }
    }

    /// Returns true once no further move is accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}
