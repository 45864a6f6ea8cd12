//! Configuration errors.
//!
//! Gameplay itself never fails: stale or illegal picks are ignored.
//! The only fatal condition is a malformed configuration, rejected
//! before any board is built.

use thiserror::Error;

/// Rejected game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("pair table is empty")]
    EmptyPairTable,

    #[error("flat pair list has odd length {0}")]
    OddPairList(usize),

    #[error("pair {pair} has an empty label")]
    EmptyLabel { pair: usize },

    #[error("expression {0:?} is paired with itself")]
    SelfPair(String),

    #[error("expression {0:?} appears more than once")]
    DuplicateExpression(String),

    #[error("at least one team is required")]
    NoTeams,

    #[error("{0} teams requested, at most 255 supported")]
    TooManyTeams(usize),

    #[error("expected {expected} team names, got {got}")]
    TeamNameCount { expected: usize, got: usize },
}
