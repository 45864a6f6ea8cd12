//! Winner selection.

use serde::{Deserialize, Serialize};

use crate::core::{Team, TeamId, TeamMap};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Winning team.
    pub winner: TeamId,
    /// Pairs the winner found.
    pub score: u32,
}

impl GameResult {
    /// Check if a team won.
    #[must_use]
    pub fn is_winner(&self, team: TeamId) -> bool {
        self.winner == team
    }
}

/// First team in canonical order holding the highest score.
///
/// A later team only takes the lead with a strictly greater score, so ties
/// go to the earliest team.
#[must_use]
pub fn winner(teams: &TeamMap<Team>) -> GameResult {
    let mut best = GameResult {
        winner: TeamId::new(0),
        score: teams[TeamId::new(0)].score,
    };

    for (id, team) in teams.iter().skip(1) {
        if team.score > best.score {
            best = GameResult {
                winner: id,
                score: team.score,
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams_with(scores: &[u32]) -> TeamMap<Team> {
        TeamMap::new(scores.len(), |t| {
            let mut team = Team::new(t.to_string());
            team.score = scores[t.index()];
            team
        })
    }

    #[test]
    fn test_clear_winner() {
        let result = winner(&teams_with(&[1, 4, 2, 0]));
        assert_eq!(result, GameResult { winner: TeamId::new(1), score: 4 });
        assert!(result.is_winner(TeamId::new(1)));
        assert!(!result.is_winner(TeamId::new(0)));
    }

    #[test]
    fn test_tie_goes_to_first_team() {
        let result = winner(&teams_with(&[2, 2, 1, 0]));
        assert_eq!(result.winner, TeamId::new(0));
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_tie_later_in_order() {
        let result = winner(&teams_with(&[0, 3, 1, 3]));
        assert_eq!(result.winner, TeamId::new(1));
    }

    #[test]
    fn test_all_zero() {
        assert_eq!(winner(&teams_with(&[0, 0, 0, 0])).winner, TeamId::new(0));
    }

    #[test]
    fn test_single_team() {
        assert_eq!(winner(&teams_with(&[5])), GameResult { winner: TeamId::new(0), score: 5 });
    }
}
