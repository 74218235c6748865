//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Returns true if any cell is still empty.
#[instrument(skip(board))]
pub fn has_moves_left(board: &Board) -> bool {
    board.cells().iter().any(|c| c.is_empty())
}

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    !has_moves_left(board)
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
