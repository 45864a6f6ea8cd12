//! Per-card runtime state.

use serde::{Deserialize, Serialize};

/// Visible state of one card on the board.
///
/// `Matched` is absorbing: once set it only changes when the whole deck is
/// replaced on reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Showing its back label.
    #[default]
    Down,
    /// Flipped and awaiting resolution.
    Up,
    /// Permanently revealed as part of a found pair.
    Matched,
}

impl CardFace {
    /// Whether the card's content is visible.
    #[must_use]
    pub fn is_revealed(self) -> bool {
        matches!(self, CardFace::Up | CardFace::Matched)
    }
}
