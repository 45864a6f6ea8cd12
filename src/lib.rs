//! # memory-match
//!
//! A turn-based, multi-team memory game engine. Cards come in pairs (an
//! expression and its result); teams take turns flipping two cards, keep
//! the turn while they find pairs, and pass it on a miss.
//!
//! ## Design Principles
//!
//! 1. **Rendering-Agnostic**: The engine takes `pick_card(index)` and hands
//!    back a `Snapshot`. No UI types leak in.
//!
//! 2. **No Ambient State**: Everything lives in one `GameSession` owned by
//!    `MatchEngine`.
//!
//! 3. **Explicit Time**: Delayed transitions are generation-tagged tickets
//!    the adapter fires later. A reset makes old tickets harmless.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{MatchConfig, MatchEngine, PickOutcome};
//!
//! let config = MatchConfig::new(4).with_pair(("A", "B")).with_seed(7);
//! let mut engine = MatchEngine::new(config).unwrap();
//!
//! engine.pick_card(0);
//! let outcome = engine.pick_card(1);
//! assert!(matches!(outcome, PickOutcome::Matched { .. }));
//! assert!(engine.is_terminal());
//!
//! engine.advance(Duration::from_millis(600));
//! assert_eq!(engine.snapshot().message, "Game over! Team 1 wins with 1 pair!");
//! ```
//!
//! ## Modules
//!
//! - `core`: Team ids, RNG, configuration, inputs, session state
//! - `cards`: Card definitions, face state, deck builder
//! - `rules`: The turn/match state machine and winner selection
//! - `timing`: Generation-tagged timer tickets
//! - `view`: Status messages and render snapshots
//! - `games`: Built-in card sets

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod timing;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameRng, GameSession, Input, InputRecord, MatchConfig, PairSpec, Phase, Team,
    TeamId, TeamMap,
};

pub use crate::cards::{CardDefinition, CardFace, Deck};

pub use crate::rules::{winner, GameResult, IgnoreReason, MatchEngine, PickOutcome};

pub use crate::timing::{PendingTimer, Ticket, TimerKind};

pub use crate::view::{CardView, Snapshot, StatusMessage, TeamView, WinnerView};

pub use crate::games::percent::percent_config;
