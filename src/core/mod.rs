//! Core engine types: teams, RNG, configuration, inputs, session state.
//!
//! This module contains the building blocks the state machine in `rules`
//! operates on. Nothing here knows about the percentage card set.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod team;

pub use action::{Input, InputRecord};
pub use config::{MatchConfig, PairSpec, MATCH_DISPLAY_DELAY, MISMATCH_COOLDOWN};
pub use error::ConfigError;
pub use rng::GameRng;
pub use state::{FlipSelection, GameSession, Phase};
pub use team::{fallback_team_name, Team, TeamId, TeamMap};
