//! Rows of the jump list shown beside the board.

use crate::settings::MoveOrder;
use rewind_tictactoe::{GameHistoryStore, MoveDescription};
use serde::Serialize;

/// One rendered row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRow {
    /// History position the row refers to.
    pub position: usize,
    /// Row text.
    pub text: String,
    /// The row is the snapshot on display.
    pub current: bool,
    /// The row can be jumped to. The newest snapshot is a label, not a control.
    pub jumpable: bool,
}

/// Builds the move list for `store` in the requested order.
pub fn rows(store: &GameHistoryStore, order: MoveOrder) -> Vec<MoveRow> {
    let newest = store.len() - 1;
    let rows = store
        .history_descriptions()
        .into_iter()
        .map(|entry| {
            let jumpable = entry.position < newest;
            let text = match (jumpable, entry.description) {
                (true, description) => description.to_string(),
                (false, MoveDescription::Start) => "You are at game start".to_string(),
                (false, MoveDescription::Move(n)) => format!("You are at move #{}", n),
            };
            MoveRow {
                position: entry.position,
                text,
                current: entry.position == store.current_position(),
                jumpable,
            }
        })
        .collect();
    order.arrange(rows)
}
