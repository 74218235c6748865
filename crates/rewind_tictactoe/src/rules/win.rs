//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// The eight winning lines, in the order they are checked.
///
/// Rows top to bottom, then columns left to right, then the
/// top-left diagonal before the top-right one.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line found on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    winner: Mark,
    line: [Position; 3],
    board: Board,
}

impl WinResult {
    /// Returns the winning mark.
    pub fn winner(&self) -> Mark {
        self.winner
    }

    /// Returns the three winning positions.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// Returns the winning cell indices (0-8).
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Returns a copy of the evaluated board with the winning cells flagged.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the result, returning the annotated board.
    pub fn into_board(self) -> Board {
        self.board
    }
}

/// Evaluates a board for a completed line.
///
/// Returns the first line (in [`LINES`] order) whose three cells hold the
/// same mark, together with an annotated copy of `board`. The input is
/// left untouched.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    for line in LINES {
        let [a, b, c] = line;
        let Some(mark) = board.get(a).mark() else {
            continue;
        };
        if board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark) {
            trace!(?mark, ?line, "Found winning line");
            return Some(WinResult {
                winner: mark,
                line,
                board: board.with_highlight(&line),
            });
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    evaluate(board).map(|result| result.winner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, (pos, player)| board.with_mark(*pos, *player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        let result = evaluate(&board).expect("top row should win");
        assert_eq!(result.winner(), Player::X);
        assert_eq!(result.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (Position::TopLeft, Player::O),
            (Position::Center, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_annotation_marks_only_the_line() {
        let board = board_with(&[
            (Position::TopRight, Player::X),
            (Position::Center, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::TopLeft, Player::O),
        ]);
        let result = evaluate(&board).expect("anti-diagonal should win");
        let lit: Vec<usize> = result
            .board()
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_winning())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(lit, vec![2, 4, 6]);
        assert!(board.cells().iter().all(|c| !c.is_winning()));
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = line
                    .iter()
                    .fold(Board::new(), |b, pos| b.with_mark(*pos, player));
                let result = evaluate(&board).expect("line should win");
                assert_eq!(result.winner(), player);
                assert_eq!(result.line(), line);
            }
        }
    }

    #[test]
    fn test_rows_checked_before_columns() {
        // Top row and left column both complete; the row wins the tie-break.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(evaluate(&board).map(|r| r.indices()), Some([0, 1, 2]));
    }
}
