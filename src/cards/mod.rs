//! Card system: definitions, face state, and the deck builder.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Immutable content plus the content of its partner
//! - `CardFace`: Down / Up / Matched
//! - `Deck`: The shuffled board, indexed by position

pub mod deck;
pub mod definition;
pub mod instance;

pub use deck::Deck;
pub use definition::CardDefinition;
pub use instance::CardFace;
