//! Tests for the time-travel history store.

use rewind_games::{GameHistoryStore, GameStatus, MoveOutcome, Player, Position};

/// X takes the anti-diagonal: X4, O0, X2, O8, X6.
const X_WINS: [usize; 5] = [4, 0, 2, 8, 6];

/// X O X / X O O / O X X, no line for anyone.
const DRAW: [usize; 9] = [0, 1, 2, 4, 3, 5, 7, 6, 8];

#[test]
fn test_x_wins_on_anti_diagonal() {
    let store = GameHistoryStore::replay(&X_WINS);
    assert_eq!(store.len(), 6);
    let result = rewind_games::evaluate(store.current_board()).expect("X should have won");
    assert_eq!(result.winner(), Player::X);
    assert_eq!(result.indices(), [2, 4, 6]);
    assert_eq!(store.status(), GameStatus::Winner(Player::X));
    assert_eq!(store.status().to_string(), "Winner: X");
}

#[test]
fn test_listed_sequence_without_line_keeps_playing() {
    // X4, O0, X8, O2, X6 leaves O on cell 2, so the anti-diagonal is not X's.
    let store = GameHistoryStore::replay(&[4, 0, 8, 2, 6]);
    assert_eq!(store.status(), GameStatus::NextPlayer(Player::O));
}

#[test]
fn test_draw_then_noop() {
    let mut store = GameHistoryStore::replay(&DRAW);
    assert_eq!(store.len(), 10);
    assert_eq!(store.status(), GameStatus::Draw);
    assert_eq!(store.status().to_string(), "It's a draw");

    let before = store.clone();
    for cell in 0..9 {
        assert!(!store.apply_move(cell).is_applied());
    }
    assert_eq!(store, before);
}

#[test]
fn test_jump_to_current_is_idempotent() {
    let mut store = GameHistoryStore::replay(&[4, 0, 2]);
    let before = store.clone();
    assert!(store.jump_to(store.current_position()));
    assert_eq!(store, before);
}

#[test]
fn test_truncation_law() {
    for k in 0..5 {
        let mut store = GameHistoryStore::replay(&X_WINS);
        let kept: Vec<_> = store.snapshots()[..=k].to_vec();
        store.jump_to(k);
        let free = Position::valid_moves(store.current_board())[0];
        assert!(store.apply_position(free).is_applied());
        assert_eq!(store.len(), k + 2);
        assert_eq!(&store.snapshots()[..=k], kept.as_slice());
        assert_eq!(store.current_position(), k + 1);
    }
}

#[test]
fn test_branch_from_move_one() {
    let mut store = GameHistoryStore::replay(&X_WINS);
    assert!(store.jump_to(1));
    assert_eq!(store.len(), 6);
    assert!(store.apply_move(8).is_applied());
    assert_eq!(store.len(), 3);
    assert_eq!(
        store.current_board().get(Position::BottomRight).mark(),
        Some(Player::O)
    );
    assert_eq!(store.status(), GameStatus::NextPlayer(Player::X));
}

#[test]
fn test_noop_on_occupied_and_after_win() {
    let mut store = GameHistoryStore::replay(&[4]);
    let before = store.clone();
    assert_eq!(
        store.apply_move(4),
        MoveOutcome::SquareOccupied(Position::Center)
    );
    assert_eq!(store, before);

    let mut won = GameHistoryStore::replay(&X_WINS);
    let before = won.clone();
    assert_eq!(won.apply_move(1), MoveOutcome::GameOver);
    assert_eq!(won, before);
}

#[test]
fn test_jump_back_reopens_finished_game() {
    let mut store = GameHistoryStore::replay(&X_WINS);
    store.jump_to(4);
    assert_eq!(store.status(), GameStatus::NextPlayer(Player::X));
    assert!(store.apply_move(1).is_applied());
    assert_eq!(store.len(), 6);
    assert_eq!(store.status(), GameStatus::NextPlayer(Player::O));
}

#[test]
fn test_history_descriptions() {
    let store = GameHistoryStore::replay(&[4, 0]);
    let labels: Vec<_> = store
        .history_descriptions()
        .iter()
        .map(|e| e.description.label())
        .collect();
    assert_eq!(labels, vec!["start", "move #1", "move #2"]);
}
