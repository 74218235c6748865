//! Move records for tic-tac-toe.
//!
//! A [`Move`] is the intent that produced a snapshot. A [`MoveOutcome`]
//! reports what the history store did with a request; rejected requests
//! are silent no-ops, never errors.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome {
    /// The move was appended to the history.
    #[display("Played {}", _0)]
    Applied(Move),
    /// The square is already occupied; nothing changed.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The current snapshot already has a winner; nothing changed.
    #[display("Game is already over")]
    GameOver,
    /// The index is not a board cell; nothing changed.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),
}

impl MoveOutcome {
    /// Returns true if the history changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}
