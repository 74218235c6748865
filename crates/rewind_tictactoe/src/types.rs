//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player to move at a history position.
    ///
    /// X always opens, so X owns the even positions and O the odd ones.
    pub fn for_turn(position: usize) -> Self {
        if position % 2 == 0 { Player::X } else { Player::O }
    }
}

/// Contents of a square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// One cell of a board snapshot.
///
/// Cells are plain values: a new snapshot gets fresh copies, so flagging a
/// cell as part of the winning line never touches an earlier snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Cell {
    square: Square,
    winning: bool,
}

impl Cell {
    /// An empty, unhighlighted cell.
    pub const EMPTY: Cell = Cell {
        square: Square::Empty,
        winning: false,
    };

    /// Creates a cell holding `mark`.
    pub fn marked(mark: Player) -> Self {
        Self {
            square: Square::Occupied(mark),
            winning: false,
        }
    }

    /// Returns a copy of this cell flagged as part of the winning line.
    pub fn highlighted(self) -> Self {
        Self {
            winning: true,
            ..self
        }
    }

    /// Returns the mark in the cell, if any.
    pub fn mark(&self) -> Option<Player> {
        self.square.mark()
    }

    /// Returns true if the cell is on the winning line.
    pub fn is_winning(&self) -> bool {
        self.winning
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(&self) -> bool {
        self.square == Square::Empty
    }
}

/// 3x3 tic-tac-toe board snapshot.
///
/// Boards are never edited in place once built: [`Board::with_mark`]
/// returns a new snapshot and leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a raw index (0-8).
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    #[instrument(skip(self))]
    pub fn with_mark(&self, pos: Position, mark: Player) -> Self {
        let mut cells = self.cells;
        cells[pos.to_index()] = Cell::marked(mark);
        Self { cells }
    }

    /// Returns a copy of this board with the given cells highlighted.
    pub fn with_highlight(&self, line: &[Position]) -> Self {
        let mut cells = self.cells;
        for pos in line {
            cells[pos.to_index()] = cells[pos.to_index()].highlighted();
        }
        Self { cells }
    }

    /// Counts the occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos].mark() {
                    None => (pos + 1).to_string(),
                    Some(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
