//! Card sets shipped with the engine.

pub mod percent;
