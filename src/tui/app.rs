//! Application state and key handling.

use super::input::{digit_cell, move_cursor};
use crate::move_list::{self, MoveRow};
use crate::settings::MoveOrder;
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameHistoryStore, MoveOutcome, Position};
use tracing::{debug, info, instrument};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    store: GameHistoryStore,
    cursor: Position,
    order: MoveOrder,
    /// History position highlighted in the move list.
    selected: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application with an empty game.
    #[instrument]
    pub fn new(order: MoveOrder) -> Self {
        Self {
            store: GameHistoryStore::new(),
            cursor: Position::Center,
            order,
            selected: 0,
            message: None,
        }
    }

    /// The game being played.
    pub fn store(&self) -> &GameHistoryStore {
        &self.store
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current move list order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// History position selected in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Move list rows in display order.
    pub fn rows(&self) -> Vec<MoveRow> {
        move_list::rows(&self.store, self.order)
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char('[') | KeyCode::PageUp => self.shift_selection(-1),
            KeyCode::Char(']') | KeyCode::PageDown => self.shift_selection(1),
            KeyCode::Char('g') | KeyCode::Tab => self.jump(self.selected),
            KeyCode::Char('s') => {
                self.order = self.order.toggle();
                debug!(order = ?self.order, "Move list order toggled");
            }
            KeyCode::Char('r') => self.restart(),
            other => {
                if let Some(pos) = digit_cell(other) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
        }
        Control::Continue
    }

    /// Plays at `pos` for whoever is to move.
    pub fn play(&mut self, pos: Position) {
        let outcome = self.store.apply_position(pos);
        self.message = match outcome {
            MoveOutcome::Applied(_) => None,
            other => Some(other.to_string()),
        };
        self.selected = self.store.current_position();
    }

    /// Jumps to a history position.
    ///
    /// The newest snapshot is a label in the move list, not a jump target.
    pub fn jump(&mut self, position: usize) {
        if position + 1 >= self.store.len() {
            debug!(position, "Newest snapshot is not a jump target");
            return;
        }
        if self.store.jump_to(position) {
            self.selected = position;
            self.message = None;
        }
    }

    /// Moves the list selection by `delta` rows in display order, skipping
    /// rows that cannot be jumped to.
    fn shift_selection(&mut self, delta: isize) {
        let rows = self.rows();
        let mut index = rows
            .iter()
            .position(|row| row.position == self.selected)
            .unwrap_or(0);
        while let Some(next) = index.checked_add_signed(delta).filter(|i| *i < rows.len()) {
            index = next;
            if rows[next].jumpable {
                self.selected = rows[next].position;
                return;
            }
        }
    }

    /// Starts over with an empty game, keeping the list order.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.store = GameHistoryStore::new();
        self.selected = 0;
        self.message = None;
    }
}
