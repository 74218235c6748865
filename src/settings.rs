//! Display preferences for the move list.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is shown.
///
/// Only the rendered list is reordered; the history itself never is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Label for the toggle control: the action it performs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort descending",
            Self::Descending => "Sort ascending",
        }
    }

    /// Flips the order.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns `items` arranged in this order, assuming they arrive oldest first.
    pub fn arrange<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self == Self::Descending {
            items.reverse();
        }
        items
    }
}
