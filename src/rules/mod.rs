//! Game rules: the turn/match state machine and winner selection.
//!
//! `MatchEngine` is the only writer of `GameSession`. Every input either
//! applies a transition or is ignored; none of them fail.

pub mod engine;
pub mod scoring;

pub use engine::{IgnoreReason, MatchEngine, PickOutcome};
pub use scoring::{winner, GameResult};
