//! Time-travel move history for tic-tac-toe.
//!
//! [`GameHistoryStore`] keeps every board snapshot produced so far together
//! with the position currently on display. Jumping only moves the pointer;
//! playing from a rewound position discards the abandoned branch.

use crate::rules::evaluate;
use crate::{Board, GameStatus, Move, MoveOutcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Label for one entry in the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveDescription {
    /// The empty opening board.
    #[display("Go to game start")]
    Start,
    /// The board after move `n`.
    #[display("Go to move #{}", _0)]
    Move(usize),
}

impl MoveDescription {
    /// Describes the snapshot at `position`.
    pub fn for_position(position: usize) -> Self {
        if position == 0 {
            MoveDescription::Start
        } else {
            MoveDescription::Move(position)
        }
    }

    /// Short label: "start" or "move #n".
    pub fn label(&self) -> String {
        match self {
            MoveDescription::Start => "start".to_string(),
            MoveDescription::Move(n) => format!("move #{}", n),
        }
    }
}

/// One row of the history list offered to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Index into the history.
    pub position: usize,
    /// What the entry is called.
    pub description: MoveDescription,
}

/// Ordered board snapshots plus the position on display.
///
/// Snapshot 0 is always the empty board and snapshot `n` differs from
/// snapshot `n - 1` by exactly one newly placed mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistoryStore {
    snapshots: Vec<Board>,
    current: usize,
}

impl GameHistoryStore {
    /// Creates a store holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Builds a store by applying `cells` in order from the empty board.
    ///
    /// Illegal entries are skipped exactly as [`apply_move`](Self::apply_move)
    /// skips them.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Self {
        let mut store = Self::new();
        for &cell in cells {
            store.apply_move(cell);
        }
        store
    }

    /// Plays the mark of the player to move at `cell_index` (0-8).
    ///
    /// Occupied cells, finished games and off-board indices leave the
    /// store unchanged.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn apply_move(&mut self, cell_index: usize) -> MoveOutcome {
        match Position::from_index(cell_index) {
            Some(pos) => self.apply_position(pos),
            None => {
                debug!(cell_index, "Ignoring move off the board");
                MoveOutcome::OutOfBounds(cell_index)
            }
        }
    }

    /// Plays the mark of the player to move at `pos`.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn apply_position(&mut self, pos: Position) -> MoveOutcome {
        let board = self.current_board();

        if !board.is_empty(pos) {
            debug!(?pos, "Ignoring move on occupied square");
            return MoveOutcome::SquareOccupied(pos);
        }
        if evaluate(board).is_some() {
            debug!(?pos, "Ignoring move after game end");
            return MoveOutcome::GameOver;
        }

        let player = self.to_move();
        let next = board.with_mark(pos, player);

        let discarded = self.snapshots.len() - 1 - self.current;
        if discarded > 0 {
            info!(discarded, from = self.current, "Discarding abandoned branch");
        }
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;

        let action = Move::new(player, pos);
        info!(%action, position = self.current, "Move applied");
        MoveOutcome::Applied(action)
    }

    /// Moves the display pointer to `position` without touching the history.
    ///
    /// Returns `false` (and changes nothing) if `position` is past the end.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, position: usize) -> bool {
        if position >= self.snapshots.len() {
            warn!(position, "Jump target outside history, ignoring");
            return false;
        }
        debug!(from = self.current, to = position, "Jumping");
        self.current = position;
        true
    }

    /// Status of the snapshot on display.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current_board(), self.current)
    }

    /// The raw snapshot on display.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// The snapshot on display, with the winning line flagged if there is one.
    pub fn display_board(&self) -> Board {
        let board = self.current_board();
        evaluate(board).map_or_else(|| board.clone(), |result| result.into_board())
    }

    /// Index of the snapshot on display.
    pub fn current_position(&self) -> usize {
        self.current
    }

    /// Number of snapshots, including the empty opening board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the opening board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        Player::for_turn(self.current)
    }

    /// The move that produced snapshot `n`, if `n` names one.
    pub fn move_at(&self, n: usize) -> Option<Move> {
        if n == 0 || n >= self.snapshots.len() {
            return None;
        }
        let before = &self.snapshots[n - 1];
        let after = &self.snapshots[n];
        Position::ALL.iter().find_map(|&pos| {
            match (before.get(pos).mark(), after.get(pos).mark()) {
                (None, Some(player)) => Some(Move::new(player, pos)),
                _ => None,
            }
        })
    }

    /// One entry per snapshot, oldest first.
    pub fn history_descriptions(&self) -> Vec<HistoryEntry> {
        (0..self.snapshots.len())
            .map(|position| HistoryEntry {
                position,
                description: MoveDescription::for_position(position),
            })
            .collect()
    }
}

impl Default for GameHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
