//! Team identification and per-team data storage.
//!
//! ## TeamId
//!
//! Type-safe team identifier supporting 1-255 teams.
//!
//! ## TeamMap
//!
//! Per-team storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `TeamId`.
//!
//! ## Team
//!
//! Scoreboard entry: display name, pairs found, and moves taken.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Team identifier supporting 1-255 teams.
///
/// Team indices are 0-based: the first team is `TeamId(0)`.
/// The adapter-facing team *number* is 1-based (see [`TeamId::from_number`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the 1-based team number shown to players.
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 as usize + 1
    }

    /// Convert a 1-based team number into an ID.
    ///
    /// Returns `None` when `number` is 0 or exceeds `team_count`.
    #[must_use]
    pub fn from_number(number: usize, team_count: usize) -> Option<Self> {
        if number == 0 || number > team_count {
            return None;
        }
        Some(Self((number - 1) as u8))
    }

    /// The team that plays after this one, wrapping around.
    #[must_use]
    pub fn next(self, team_count: usize) -> Self {
        Self(((self.index() + 1) % team_count) as u8)
    }

    /// Iterate over all team IDs for a game with `team_count` teams.
    ///
    /// ```
    /// use memory_match::core::TeamId;
    ///
    /// let teams: Vec<_> = TeamId::all(4).collect();
    /// assert_eq!(teams.len(), 4);
    /// assert_eq!(teams[0], TeamId::new(0));
    /// assert_eq!(teams[3], TeamId::new(3));
    /// ```
    pub fn all(team_count: usize) -> impl Iterator<Item = TeamId> {
        (0..team_count as u8).map(TeamId)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.number())
    }
}

/// A team on the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Display name.
    pub name: String,
    /// Pairs found this game.
    pub score: u32,
    /// Resolutions (pairs of flips) taken this game.
    pub moves: u32,
}

impl Team {
    /// Create a team with a zeroed scoreboard.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            moves: 0,
        }
    }

    /// Zero score and moves. The name is kept.
    pub fn clear_scores(&mut self) {
        self.score = 0;
        self.moves = 0;
    }
}

/// Fallback label for a team whose name was cleared.
#[must_use]
pub fn fallback_team_name(team: TeamId) -> String {
    team.to_string()
}

/// Per-team data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per team.
///
/// ## Example
///
/// ```
/// use memory_match::core::{TeamId, TeamMap};
///
/// let mut pairs: TeamMap<u32> = TeamMap::new(4, |_| 0);
/// pairs[TeamId::new(1)] += 2;
/// assert_eq!(pairs[TeamId::new(1)], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: Vec<T>,
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    pub fn new(team_count: usize, factory: impl Fn(TeamId) -> T) -> Self {
        assert!(team_count > 0, "Must have at least 1 team");
        assert!(team_count <= 255, "At most 255 teams supported");

        let data = (0..team_count as u8).map(|i| factory(TeamId(i))).collect();

        Self { data }
    }

    /// Get the number of teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: TeamId) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: TeamId) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (TeamId, &T) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (TeamId(i as u8), v))
    }

    /// Iterate over (TeamId, &mut T) pairs in canonical order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TeamId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (TeamId(i as u8), v))
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        self.get_mut(team)
    }
}
