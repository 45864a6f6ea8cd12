//! Generation-tagged timer tickets.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which delayed transition a ticket triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Replace the last match message with the terminal summary.
    AnnounceWinner,
    /// Turn a mismatched pair face-down and pass the turn.
    EndCooldown,
}

/// Handle for one scheduled delayed transition.
///
/// A ticket is only honoured while its `generation` is the engine's current
/// one and it is the ticket the engine is waiting on. `serial` is unique per
/// engine, so two cooldowns in the same game never share a ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    /// Game generation the ticket was issued in.
    pub generation: u64,
    /// Issue order across the engine's lifetime.
    pub serial: u64,
    /// Transition to run.
    pub kind: TimerKind,
}

impl Ticket {
    /// Create a new ticket.
    #[must_use]
    pub const fn new(generation: u64, serial: u64, kind: TimerKind) -> Self {
        Self {
            generation,
            serial,
            kind,
        }
    }
}

/// The single outstanding timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTimer {
    /// Ticket to fire on expiry.
    pub ticket: Ticket,
    /// Full delay as scheduled.
    pub delay: Duration,
    /// Time left before expiry in virtual time.
    pub remaining: Duration,
}

impl PendingTimer {
    /// Schedule `ticket` to fire after `delay`.
    #[must_use]
    pub fn new(ticket: Ticket, delay: Duration) -> Self {
        Self {
            ticket,
            delay,
            remaining: delay,
        }
    }

    /// Let `delta` pass. Returns true once the timer has expired.
    pub fn elapse(&mut self, delta: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(delta);
        self.is_expired()
    }

    /// Whether no time remains.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }
}
