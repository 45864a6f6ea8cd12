//! Percent pairs card table and default configuration.

use crate::core::{MatchConfig, PairSpec};

/// Expression → value pairs, in deal order.
pub const PERCENT_PAIRS: [(&str, &str); 15] = [
    ("25% of 40", "10"),
    ("50% of 120", "60"),
    ("10% of 90", "9"),
    ("20% of 50", "10"),
    ("75% of 80", "60"),
    ("1% of 300", "3"),
    ("40% of 150", "60"),
    ("30% of 70", "21"),
    ("15% of 200", "30"),
    ("60% of 50", "30"),
    ("25% of 36", "9"),
    ("200% of 5", "10"),
    ("0.5% of 1000", "5"),
    ("90% of 10", "9"),
    ("12.5% of 80", "10"),
];

/// Names the four teams start with.
pub const DEFAULT_TEAM_NAMES: [&str; 4] = ["Team Alpha", "Team Beta", "Team Gamma", "Team Delta"];

/// Four teams, the fifteen percent pairs, 600 ms / 1200 ms delays.
#[must_use]
pub fn percent_config() -> MatchConfig {
    MatchConfig::new(DEFAULT_TEAM_NAMES.len())
        .with_pairs(PERCENT_PAIRS.iter().map(|&pair| PairSpec::from(pair)).collect())
        .with_team_names(DEFAULT_TEAM_NAMES)
}
