//! Status line shown under the board.

use serde::{Deserialize, Serialize};

/// Free-text status derived from the last transition.
///
/// Team names are captured when the message is produced, so renaming a team
/// later does not rewrite history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusMessage {
    /// A new game started.
    TurnStart { team: String },
    /// The current team found a pair and keeps the turn.
    Matched { team: String },
    /// The current team missed; cards stay up during the cooldown.
    NoMatch { team: String },
    /// The cooldown ended and the turn moved on.
    TurnPassed { next: String },
    /// All pairs found.
    GameOver { winner: String, score: u32 },
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusMessage::TurnStart { team } => {
                write!(f, "It's {}'s turn! Pick a card to start.", team)
            }
            StatusMessage::Matched { team } => write!(f, "{} matched, plays again.", team),
            StatusMessage::NoMatch { team } => write!(f, "No match! {}'s turn is over.", team),
            StatusMessage::TurnPassed { next } => write!(f, "No match, turn passes to {}.", next),
            StatusMessage::GameOver { winner, score } => {
                let unit = if *score == 1 { "pair" } else { "pairs" };
                write!(f, "Game over! {} wins with {} {}!", winner, score, unit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let alpha = || "Team Alpha".to_string();

        assert_eq!(
            StatusMessage::TurnStart { team: alpha() }.to_string(),
            "It's Team Alpha's turn! Pick a card to start."
        );
        assert_eq!(
            StatusMessage::Matched { team: alpha() }.to_string(),
            "Team Alpha matched, plays again."
        );
        assert_eq!(
            StatusMessage::NoMatch { team: alpha() }.to_string(),
            "No match! Team Alpha's turn is over."
        );
        assert_eq!(
            StatusMessage::TurnPassed { next: "Team Beta".into() }.to_string(),
            "No match, turn passes to Team Beta."
        );
    }

    #[test]
    fn test_game_over_pluralization() {
        let one = StatusMessage::GameOver { winner: "Team Beta".into(), score: 1 };
        let many = StatusMessage::GameOver { winner: "Team Beta".into(), score: 6 };
        assert_eq!(one.to_string(), "Game over! Team Beta wins with 1 pair!");
        assert_eq!(many.to_string(), "Game over! Team Beta wins with 6 pairs!");
    }
}
