//! Presentation contract: status messages and render snapshots.
//!
//! The engine never draws anything. Adapters call `MatchEngine::snapshot`
//! after each input and redraw from the returned `Snapshot`.

pub mod message;
pub mod snapshot;

pub use message::StatusMessage;
pub use snapshot::{CardView, Snapshot, TeamView, WinnerView};
