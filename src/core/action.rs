//! Inputs accepted by the engine, and the journal that records them.
//!
//! Every input that changes state is appended to the session journal as an
//! `InputRecord`. Ignored picks leave no trace.
//!
//! Used for:
//! - Replay/debugging
//! - Asserting on the exact sequence a session went through in tests

use serde::{Deserialize, Serialize};

use super::team::TeamId;
use crate::timing::TimerKind;

/// An accepted input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// A card was flipped face-up.
    PickCard(usize),
    /// A new game was started.
    Reset,
    /// A team was renamed (stored name after fallback).
    SetTeamName { team: TeamId, name: String },
    /// A delayed transition ran.
    TimerFired(TimerKind),
}

/// A recorded input with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// The input applied.
    pub input: Input,

    /// Team holding the turn when the input was applied.
    pub team: TeamId,

    /// Game generation the input belongs to.
    pub generation: u64,

    /// Position within the generation (for ordering).
    pub sequence: u32,
}

impl InputRecord {
    /// Create a new input record.
    #[must_use]
    pub fn new(input: Input, team: TeamId, generation: u64, sequence: u32) -> Self {
        Self {
            input,
            team,
            generation,
            sequence,
        }
    }
}
