//! Delayed transitions.
//!
//! The engine has two timed transitions: the winner announcement after the
//! final match and the cooldown after a mismatch. Neither blocks. Each is
//! represented by a `Ticket` tagged with the game generation; the adapter
//! hands the ticket back when its timer expires, or drives virtual time with
//! `MatchEngine::advance`. A reset bumps the generation, so tickets from an
//! earlier game are ignored.

mod timer;

pub use timer::{PendingTimer, Ticket, TimerKind};
