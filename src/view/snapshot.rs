//! Render snapshot handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::cards::CardFace;
use crate::core::{GameSession, Phase, TeamId};

/// One card as it should be drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Board position.
    pub index: usize,
    /// Face state.
    pub face: CardFace,
    /// Content when revealed, otherwise the 1-based card number.
    pub label: String,
}

/// One scoreboard entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamView {
    pub id: TeamId,
    pub name: String,
    pub score: u32,
    pub moves: u32,
    /// Holds the turn. Never set once the game is over.
    pub active: bool,
}

/// Winner banner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerView {
    pub team: TeamId,
    pub name: String,
    pub score: u32,
}

/// Everything needed to redraw the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: u64,
    pub phase: Phase,
    pub cards: Vec<CardView>,
    pub teams: Vec<TeamView>,
    pub message: String,
    pub matched_count: usize,
    pub total_pairs: usize,
    /// Set once every pair is found.
    pub terminal: Option<WinnerView>,
}

impl Snapshot {
    /// Capture the current state of `session`.
    #[must_use]
    pub fn capture(session: &GameSession) -> Self {
        let terminal = session.is_terminal();

        let cards = session
            .deck()
            .iter()
            .zip(session.faces())
            .enumerate()
            .map(|(index, (card, &face))| CardView {
                index,
                face,
                label: if face.is_revealed() {
                    card.content.clone()
                } else {
                    (index + 1).to_string()
                },
            })
            .collect();

        let teams = session
            .teams()
            .iter()
            .map(|(id, team)| TeamView {
                id,
                name: team.name.clone(),
                score: team.score,
                moves: team.moves,
                active: !terminal && id == session.current_team(),
            })
            .collect();

        let winner = session.result().map(|result| WinnerView {
            team: result.winner,
            name: session.team(result.winner).name.clone(),
            score: result.score,
        });

        Self {
            generation: session.generation(),
            phase: session.phase(),
            cards,
            teams,
            message: session.message().to_string(),
            matched_count: session.matched_count(),
            total_pairs: session.total_pairs(),
            terminal: winner,
        }
    }

    /// Whether the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    /// The team holding the turn, if the game is still running.
    #[must_use]
    pub fn active_team(&self) -> Option<&TeamView> {
        self.teams.iter().find(|t| t.active)
    }
}
