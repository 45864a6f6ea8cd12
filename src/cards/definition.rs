//! Card definitions - static card data.
//!
//! Each pair in the configuration yields two `CardDefinition`s: the
//! expression card and the value card. Each card names its partner's
//! content as its `match_value`.

use serde::{Deserialize, Serialize};

use crate::core::PairSpec;

/// Static card data.
///
/// ## Example
///
/// ```
/// use memory_match::cards::CardDefinition;
/// use memory_match::core::PairSpec;
///
/// let (expr, value) = CardDefinition::pair(&PairSpec::new("25% of 40", "10"));
/// assert!(expr.is_partner_of(&value));
/// assert!(value.is_partner_of(&expr));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Text shown when the card is face-up.
    pub content: String,

    /// Content of the one card this card matches.
    pub match_value: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(content: impl Into<String>, match_value: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            match_value: match_value.into(),
        }
    }

    /// Build the (expression, value) cards for a pair.
    #[must_use]
    pub fn pair(spec: &PairSpec) -> (Self, Self) {
        (
            Self::new(spec.expression.clone(), spec.value.clone()),
            Self::new(spec.value.clone(), spec.expression.clone()),
        )
    }

    /// Symmetric partner check.
    ///
    /// Two value cards showing the same number are not partners unless
    /// each names the other's content.
    #[must_use]
    pub fn is_partner_of(&self, other: &CardDefinition) -> bool {
        self.content == other.match_value && other.content == self.match_value
    }
}
