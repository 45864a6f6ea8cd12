//! "Percent pairs": match each percentage expression with its result.
//!
//! Fifteen pairs, four teams. Several results repeat ("10", "60", "9",
//! "30"), so a value card only matches the expression it was dealt with.

mod table;

pub use table::{percent_config, DEFAULT_TEAM_NAMES, PERCENT_PAIRS};
