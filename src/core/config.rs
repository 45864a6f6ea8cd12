//! Game configuration.
//!
//! A game is configured at startup by providing:
//! - `PairSpec`s: the expression/value pairs that become the deck
//! - Team count and initial team names
//! - The two display delays driving delayed transitions
//!
//! `MatchConfig::validate` rejects tables that cannot produce a playable
//! board.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::team::{fallback_team_name, TeamId};

/// Delay before the winner is announced after the final match.
pub const MATCH_DISPLAY_DELAY: Duration = Duration::from_millis(600);

/// Delay during which a mismatched pair stays face-up.
pub const MISMATCH_COOLDOWN: Duration = Duration::from_millis(1200);

/// One logical pair: an expression and the value it evaluates to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairSpec {
    /// Expression half, e.g. `"25% of 40"`.
    pub expression: String,
    /// Result half, e.g. `"10"`.
    pub value: String,
}

impl PairSpec {
    /// Create a new pair.
    pub fn new(expression: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            value: value.into(),
        }
    }
}

impl<E: Into<String>, V: Into<String>> From<(E, V)> for PairSpec {
    fn from((expression, value): (E, V)) -> Self {
        Self::new(expression, value)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Pairs making up the deck (two cards per pair).
    pub pairs: Vec<PairSpec>,

    /// Number of rotating teams.
    pub team_count: usize,

    /// Initial team names, one per team.
    pub team_names: Vec<String>,

    /// Delay before the terminal summary replaces the last match message.
    pub match_display_delay: Duration,

    /// How long a mismatched pair stays visible before the turn passes.
    pub mismatch_cooldown: Duration,

    /// Shuffle seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl MatchConfig {
    /// Create a configuration for `team_count` teams with no pairs yet.
    ///
    /// Team names default to `"Team <n>"`.
    pub fn new(team_count: usize) -> Self {
        Self {
            pairs: Vec::new(),
            team_count,
            team_names: TeamId::all(team_count.min(255))
                .map(fallback_team_name)
                .collect(),
            match_display_delay: MATCH_DISPLAY_DELAY,
            mismatch_cooldown: MISMATCH_COOLDOWN,
            seed: None,
        }
    }

    /// Build pairs from an alternating `[expr, value, expr, value, ..]` list.
    pub fn from_flat<S: AsRef<str>>(team_count: usize, items: &[S]) -> Result<Self, ConfigError> {
        if items.len() % 2 != 0 {
            return Err(ConfigError::OddPairList(items.len()));
        }
        let pairs = items
            .chunks_exact(2)
            .map(|chunk| PairSpec::new(chunk[0].as_ref(), chunk[1].as_ref()))
            .collect();
        let config = Self::new(team_count).with_pairs(pairs);
        config.validate()?;
        Ok(config)
    }

    /// Add a pair.
    #[must_use]
    pub fn with_pair(mut self, pair: impl Into<PairSpec>) -> Self {
        self.pairs.push(pair.into());
        self
    }

    /// Replace all pairs.
    #[must_use]
    pub fn with_pairs(mut self, pairs: Vec<PairSpec>) -> Self {
        self.pairs = pairs;
        self
    }

    /// Replace the initial team names.
    #[must_use]
    pub fn with_team_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.team_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set both display delays.
    #[must_use]
    pub fn with_delays(mut self, match_display: Duration, mismatch_cooldown: Duration) -> Self {
        self.match_display_delay = match_display;
        self.mismatch_cooldown = mismatch_cooldown;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of pairs, i.e. matches needed to finish a game.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// Check that the configuration yields a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.team_count == 0 {
            return Err(ConfigError::NoTeams);
        }
        if self.team_count > 255 {
            return Err(ConfigError::TooManyTeams(self.team_count));
        }
        if self.team_names.len() != self.team_count {
            return Err(ConfigError::TeamNameCount {
                expected: self.team_count,
                got: self.team_names.len(),
            });
        }
        if self.pairs.is_empty() {
            return Err(ConfigError::EmptyPairTable);
        }

        let mut seen = FxHashSet::default();
        for (i, pair) in self.pairs.iter().enumerate() {
            if pair.expression.is_empty() || pair.value.is_empty() {
                return Err(ConfigError::EmptyLabel { pair: i });
            }
            if pair.expression == pair.value {
                return Err(ConfigError::SelfPair(pair.expression.clone()));
            }
            if !seen.insert(pair.expression.as_str()) {
                return Err(ConfigError::DuplicateExpression(pair.expression.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_pair() -> MatchConfig {
        MatchConfig::new(4).with_pair(("A", "B"))
    }

    #[test]
    fn test_defaults() {
        let config = MatchConfig::new(4);
        assert_eq!(config.team_names, vec!["Team 1", "Team 2", "Team 3", "Team 4"]);
        assert_eq!(config.match_display_delay, Duration::from_millis(600));
        assert_eq!(config.mismatch_cooldown, Duration::from_millis(1200));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = one_pair()
            .with_pair(PairSpec::new("C", "D"))
            .with_seed(9)
            .with_delays(Duration::ZERO, Duration::from_millis(5));

        assert_eq!(config.total_pairs(), 2);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.mismatch_cooldown, Duration::from_millis(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(MatchConfig::new(4).validate(), Err(ConfigError::EmptyPairTable));
    }

    #[test]
    fn test_odd_flat_list_rejected() {
        let err = MatchConfig::from_flat(4, &["A", "B", "C"]).unwrap_err();
        assert_eq!(err, ConfigError::OddPairList(3));
    }

    #[test]
    fn test_flat_list() {
        let config = MatchConfig::from_flat(2, &["A", "B", "C", "D"]).unwrap();
        assert_eq!(config.pairs, vec![PairSpec::new("A", "B"), PairSpec::new("C", "D")]);
    }

    #[test]
    fn test_empty_flat_list_rejected() {
        let items: [&str; 0] = [];
        assert_eq!(MatchConfig::from_flat(2, &items).unwrap_err(), ConfigError::EmptyPairTable);
    }

    #[test]
    fn test_duplicate_expression_rejected() {
        let config = one_pair().with_pair(("A", "C"));
        assert_eq!(config.validate(), Err(ConfigError::DuplicateExpression("A".into())));
    }

    #[test]
    fn test_shared_values_allowed() {
        let config = MatchConfig::new(4)
            .with_pair(("25% of 40", "10"))
            .with_pair(("20% of 50", "10"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_self_pair_rejected() {
        let config = MatchConfig::new(4).with_pair(("A", "A"));
        assert_eq!(config.validate(), Err(ConfigError::SelfPair("A".into())));
    }

    #[test]
    fn test_empty_label_rejected() {
        let config = one_pair().with_pair(("", "x"));
        assert_eq!(config.validate(), Err(ConfigError::EmptyLabel { pair: 1 }));
    }

    #[test]
    fn test_team_count_checks() {
        assert_eq!(MatchConfig::new(0).with_pair(("A", "B")).validate(), Err(ConfigError::NoTeams));
        assert_eq!(
            MatchConfig::new(300).with_pair(("A", "B")).validate(),
            Err(ConfigError::TooManyTeams(300))
        );
        assert_eq!(
            one_pair().with_team_names(["Solo"]).validate(),
            Err(ConfigError::TeamNameCount { expected: 4, got: 1 })
        );
    }
}
