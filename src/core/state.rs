//! Session state: everything one game consists of.
//!
//! ## GameSession
//!
//! - Deck and per-card faces
//! - Current flip selection and the re-entrancy lock
//! - Teams, active team, matched pair count
//! - Phase, status message, final result
//! - Input journal
//!
//! The session is owned by `MatchEngine`, which is the only writer.
//! Everything here is read-only from outside the crate.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Input, InputRecord};
use super::team::{Team, TeamId, TeamMap};
use crate::cards::{CardDefinition, CardFace, Deck};
use crate::rules::GameResult;
use crate::view::StatusMessage;

/// Indices of the cards flipped in the current turn (at most 2).
pub type FlipSelection = SmallVec<[usize; 2]>;

/// Turn/match state machine phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Zero or one card face-up; picks accepted.
    #[default]
    Idle,
    /// Two cards face-up and being evaluated.
    Resolving,
    /// Mismatch cooldown; both cards stay up, input locked.
    RoundTransition,
    /// All pairs found.
    Complete,
}

/// State of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) generation: u64,
    pub(crate) deck: Deck,
    pub(crate) faces: Vec<CardFace>,
    pub(crate) selection: FlipSelection,
    pub(crate) teams: TeamMap<Team>,
    pub(crate) current_team: TeamId,
    pub(crate) matched_count: usize,
    pub(crate) checking: bool,
    pub(crate) phase: Phase,
    pub(crate) message: StatusMessage,
    pub(crate) result: Option<GameResult>,
    pub(crate) journal: Vector<InputRecord>,
    pub(crate) sequence: u32,
}

impl GameSession {
    /// Start a game on `deck` with the given teams.
    ///
    /// Teams are taken as-is; callers zero the scores. The first team
    /// holds the turn.
    #[must_use]
    pub fn new(
        generation: u64,
        deck: Deck,
        teams: TeamMap<Team>,
        journal: Vector<InputRecord>,
    ) -> Self {
        let first = TeamId::new(0);
        let message = StatusMessage::TurnStart {
            team: teams[first].name.clone(),
        };

        Self {
            generation,
            faces: vec![CardFace::Down; deck.len()],
            deck,
            selection: FlipSelection::new(),
            teams,
            current_team: first,
            matched_count: 0,
            checking: false,
            phase: Phase::Idle,
            message,
            result: None,
            journal,
            sequence: 0,
        }
    }

    /// Game generation (bumped on every reset).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The board.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Card at a board position.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&CardDefinition> {
        self.deck.get(index)
    }

    /// Face state of a card.
    #[must_use]
    pub fn face(&self, index: usize) -> Option<CardFace> {
        self.faces.get(index).copied()
    }

    /// Face state of every card in board order.
    #[must_use]
    pub fn faces(&self) -> &[CardFace] {
        &self.faces
    }

    /// Cards flipped in the current turn.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// All teams.
    #[must_use]
    pub fn teams(&self) -> &TeamMap<Team> {
        &self.teams
    }

    /// One team.
    #[must_use]
    pub fn team(&self, team: TeamId) -> &Team {
        &self.teams[team]
    }

    /// Team holding the turn.
    #[must_use]
    pub fn current_team(&self) -> TeamId {
        self.current_team
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    /// Pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.deck.pair_count()
    }

    /// Re-entrancy lock: two cards flipped and unresolved.
    #[must_use]
    pub fn is_checking(&self) -> bool {
        self.checking
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Status message.
    #[must_use]
    pub fn message(&self) -> &StatusMessage {
        &self.message
    }

    /// Final result, once every pair is found.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Whether every pair has been found.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.matched_count == self.total_pairs()
    }

    /// Accepted inputs across all generations, oldest first.
    #[must_use]
    pub fn journal(&self) -> &Vector<InputRecord> {
        &self.journal
    }

    /// Append an input to the journal.
    pub(crate) fn record(&mut self, input: Input) {
        let record = InputRecord::new(input, self.current_team, self.generation, self.sequence);
        self.sequence += 1;
        self.journal.push_back(record);
    }
}
