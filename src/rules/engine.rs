//! The turn/match state machine.
//!
//! `MatchEngine` owns the configuration, the shuffle RNG, the current
//! `GameSession` and the single pending timer. Adapters drive it with
//! `pick_card`, `reset`, `set_team_name`, and either `fire` (real timers)
//! or `advance` (virtual time), and render `snapshot()`.
//!
//! ## Transitions
//!
//! ```text
//! Idle --pick--> Idle (1 card up)
//! Idle --pick--> Resolving --match--> Idle | Complete
//!                          --mismatch--> RoundTransition --EndCooldown--> Idle
//! any  --reset--> Idle
//! ```

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::scoring::{winner, GameResult};
use crate::cards::{CardFace, Deck};
use crate::core::{
    fallback_team_name, ConfigError, GameRng, GameSession, Input, MatchConfig, Phase, Team, TeamId,
    TeamMap,
};
use crate::timing::{PendingTimer, Ticket, TimerKind};
use crate::view::{Snapshot, StatusMessage};

/// Why a pick was ignored.
///
/// Ignored picks are not errors: the board is tolerant of stale or
/// repeated clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card at that position.
    OutOfRange,
    /// The card is already face-up this turn.
    AlreadyFaceUp,
    /// The card belongs to a found pair.
    AlreadyMatched,
    /// Two cards are selected and awaiting resolution.
    Locked,
    /// Every pair has been found.
    GameOver,
}

/// Effect of a pick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of the turn flipped.
    Flipped { index: usize },
    /// Second card completed a pair. The team keeps the turn.
    ///
    /// `announce` is set when this was the last pair.
    Matched {
        team: TeamId,
        cards: [usize; 2],
        announce: Option<Ticket>,
    },
    /// Second card did not match. Input stays locked until `cooldown` fires.
    Mismatched {
        team: TeamId,
        cards: [usize; 2],
        cooldown: Ticket,
    },
}

impl PickOutcome {
    /// Whether the pick changed state.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, PickOutcome::Ignored(_))
    }
}

/// Memory-match game engine.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    rng: GameRng,
    session: GameSession,
    pending: Option<PendingTimer>,
    next_serial: u64,
}

impl MatchEngine {
    /// Validate `config` and deal the first game.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let teams = TeamMap::new(config.team_count, |t| {
            let name = &config.team_names[t.index()];
            if name.is_empty() {
                Team::new(fallback_team_name(t))
            } else {
                Team::new(name.clone())
            }
        });
        let deck = Deck::build(&config.pairs, &mut rng.fork());
        let session = GameSession::new(1, deck, teams, Vector::new());

        Ok(Self {
            config,
            rng,
            session,
            pending: None,
            next_serial: 0,
        })
    }

    /// The validated configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current game state.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Final result, once every pair is found.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.session.result()
    }

    /// Whether the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.session.is_terminal()
    }

    /// The timer the engine is waiting on, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<PendingTimer> {
        self.pending
    }

    /// Render state for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session)
    }

    // === Inputs ===

    /// Flip the card at `index`.
    ///
    /// On the second flip of a turn the pair is evaluated immediately.
    pub fn pick_card(&mut self, index: usize) -> PickOutcome {
        if let Some(reason) = self.reject_reason(index) {
            return PickOutcome::Ignored(reason);
        }

        let session = &mut self.session;
        session.faces[index] = CardFace::Up;
        session.selection.push(index);
        session.record(Input::PickCard(index));

        if session.selection.len() < 2 {
            return PickOutcome::Flipped { index };
        }

        session.checking = true;
        session.phase = Phase::Resolving;
        self.resolve()
    }

    /// Start a new game: fresh deck, zeroed scoreboard, first team to play.
    ///
    /// Team names are kept. Any pending timer is dropped and tickets from
    /// the previous game become stale.
    pub fn reset(&mut self) {
        self.pending = None;

        let mut teams = self.session.teams.clone();
        for (_, team) in teams.iter_mut() {
            team.clear_scores();
        }
        let deck = Deck::build(&self.config.pairs, &mut self.rng.fork());
        let generation = self.session.generation + 1;
        let journal = self.session.journal.clone();

        self.session = GameSession::new(generation, deck, teams, journal);
        self.session.record(Input::Reset);
    }

    /// Rename team `team_number` (1-based). An empty name falls back to
    /// `"Team <n>"`.
    ///
    /// Returns false if there is no such team.
    pub fn set_team_name(&mut self, team_number: usize, name: &str) -> bool {
        let Some(team) = TeamId::from_number(team_number, self.config.team_count) else {
            return false;
        };

        let name = if name.is_empty() {
            fallback_team_name(team)
        } else {
            name.to_string()
        };

        self.session.teams[team].name = name.clone();
        self.session.record(Input::SetTeamName { team, name });
        true
    }

    /// Run the delayed transition for `ticket`.
    ///
    /// Returns false, changing nothing, unless `ticket` is the one currently
    /// pending in this generation. A ticket that already fired never fires
    /// again, even during a later cooldown of the same game.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        match self.pending {
            Some(pending)
                if pending.ticket == ticket && ticket.generation == self.session.generation => {}
            _ => return false,
        }
        self.pending = None;

        let session = &mut self.session;
        session.record(Input::TimerFired(ticket.kind));

        match ticket.kind {
            TimerKind::AnnounceWinner => {
                if let Some(result) = &session.result {
                    session.message = StatusMessage::GameOver {
                        winner: session.teams[result.winner].name.clone(),
                        score: result.score,
                    };
                }
            }
            TimerKind::EndCooldown => {
                for &index in &session.selection {
                    session.faces[index] = CardFace::Down;
                }
                session.selection.clear();
                session.current_team = session.current_team.next(session.teams.team_count());
                session.checking = false;
                session.phase = Phase::Idle;
                session.message = StatusMessage::TurnPassed {
                    next: session.teams[session.current_team].name.clone(),
                };
            }
        }

        true
    }

    /// Let `delta` of virtual time pass, firing the pending timer if it
    /// expires.
    ///
    /// Returns the fired ticket.
    pub fn advance(&mut self, delta: Duration) -> Option<Ticket> {
        let pending = self.pending.as_mut()?;
        if !pending.elapse(delta) {
            return None;
        }
        let ticket = pending.ticket;
        self.fire(ticket).then_some(ticket)
    }

    // === Internals ===

    fn reject_reason(&self, index: usize) -> Option<IgnoreReason> {
        let session = &self.session;

        if session.phase == Phase::Complete {
            return Some(IgnoreReason::GameOver);
        }
        if session.checking || session.phase != Phase::Idle || session.selection.len() >= 2 {
            return Some(IgnoreReason::Locked);
        }

        match session.face(index) {
            None => Some(IgnoreReason::OutOfRange),
            Some(CardFace::Matched) => Some(IgnoreReason::AlreadyMatched),
            Some(CardFace::Up) => Some(IgnoreReason::AlreadyFaceUp),
            Some(CardFace::Down) => None,
        }
    }

    fn resolve(&mut self) -> PickOutcome {
        let session = &mut self.session;
        let cards = [session.selection[0], session.selection[1]];
        let team = session.current_team;

        let is_match = match (session.deck.get(cards[0]), session.deck.get(cards[1])) {
            (Some(a), Some(b)) => a.is_partner_of(b),
            _ => false,
        };

        session.teams[team].moves += 1;
        let team_name = session.teams[team].name.clone();

        if !is_match {
            session.phase = Phase::RoundTransition;
            session.message = StatusMessage::NoMatch { team: team_name };
            let cooldown = self.schedule(TimerKind::EndCooldown, self.config.mismatch_cooldown);
            return PickOutcome::Mismatched {
                team,
                cards,
                cooldown,
            };
        }

        for &index in &cards {
            session.faces[index] = CardFace::Matched;
        }
        session.teams[team].score += 1;
        session.matched_count += 1;
        session.selection.clear();
        session.checking = false;
        session.phase = Phase::Idle;
        session.message = StatusMessage::Matched { team: team_name };

        let announce = if session.is_terminal() {
            session.phase = Phase::Complete;
            session.result = Some(winner(&session.teams));
            Some(self.schedule(TimerKind::AnnounceWinner, self.config.match_display_delay))
        } else {
            None
        };

        PickOutcome::Matched {
            team,
            cards,
            announce,
        }
    }

    fn schedule(&mut self, kind: TimerKind, delay: Duration) -> Ticket {
        debug_assert!(self.pending.is_none(), "only one delayed transition may be pending");
        self.next_serial += 1;
        let ticket = Ticket::new(self.session.generation, self.next_serial, kind);
        self.pending = Some(PendingTimer::new(ticket, delay));
        ticket
    }
}
