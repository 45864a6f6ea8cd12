//! Full games on the built-in percent card set.

use std::time::Duration;

use memory_match::games::percent::{percent_config, DEFAULT_TEAM_NAMES, PERCENT_PAIRS};
use memory_match::{CardFace, MatchEngine, Phase, PickOutcome, Snapshot, TeamId};

/// Plays until done: each team finds `streak` pairs, then misses once.
fn play_out(engine: &mut MatchEngine, streak: usize) -> usize {
    let mut turns = 0;

    while !engine.is_terminal() {
        turns += 1;
        for _ in 0..streak {
            if engine.is_terminal() {
                break;
            }
            let session = engine.session();
            let first = session.faces().iter().position(|&f| f == CardFace::Down).unwrap();
            let card = session.card(first).unwrap().clone();
            let second = (0..session.deck().len())
                .find(|&j| j != first && session.card(j).unwrap().is_partner_of(&card))
                .unwrap();

            engine.pick_card(first);
            assert!(matches!(engine.pick_card(second), PickOutcome::Matched { .. }));
        }

        if engine.is_terminal() {
            break;
        }

        let session = engine.session();
        let down: Vec<_> = (0..session.deck().len())
            .filter(|&i| session.face(i) == Some(CardFace::Down))
            .collect();
        let first = down[0];
        let card = session.card(first).unwrap().clone();
        let Some(&second) = down
            .iter()
            .find(|&&j| j != first && !session.card(j).unwrap().is_partner_of(&card))
        else {
            continue;
        };

        engine.pick_card(first);
        assert!(matches!(engine.pick_card(second), PickOutcome::Mismatched { .. }));
        assert!(engine.advance(Duration::from_millis(1200)).is_some());
    }

    turns
}

#[test]
fn test_percent_deck_layout() {
    let engine = MatchEngine::new(percent_config().with_seed(1)).unwrap();
    let snap = engine.snapshot();

    assert_eq!(snap.cards.len(), PERCENT_PAIRS.len() * 2);
    assert_eq!(snap.total_pairs, 15);
    assert_eq!(snap.teams.len(), 4);
    for (team, name) in snap.teams.iter().zip(DEFAULT_TEAM_NAMES) {
        assert_eq!(team.name, name);
    }
    assert_eq!(snap.cards[29].label, "30");
}

#[test]
fn test_full_game_with_misses() {
    let mut engine = MatchEngine::new(percent_config().with_seed(2024)).unwrap();

    play_out(&mut engine, 2);

    let session = engine.session();
    assert_eq!(session.phase(), Phase::Complete);
    assert_eq!(session.matched_count(), 15);
    assert!(session.faces().iter().all(|&f| f == CardFace::Matched));

    let scores: Vec<_> = session.teams().iter().map(|(_, t)| t.score).collect();
    assert_eq!(scores.iter().sum::<u32>(), 15);

    let best = *scores.iter().max().unwrap();
    let first_best = scores.iter().position(|&s| s == best).unwrap();
    assert_eq!(engine.result().unwrap().winner, TeamId::new(first_best as u8));

    assert!(engine.advance(Duration::from_millis(600)).is_some());
    let snap = engine.snapshot();
    assert!(snap.message.starts_with("Game over! "));
    assert!(snap.active_team().is_none());

    let json = serde_json::to_string(&snap).unwrap();
    let back: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snap, back);
}

#[test]
fn test_perfect_memory_first_team_sweeps() {
    let mut engine = MatchEngine::new(percent_config().with_seed(5)).unwrap();

    play_out(&mut engine, usize::MAX);

    let alpha = engine.session().team(TeamId::new(0));
    assert_eq!(alpha.score, 15);
    assert_eq!(alpha.moves, 15);
    assert_eq!(engine.result().unwrap().winner, TeamId::new(0));
}

#[test]
fn test_play_reset_play() {
    let mut engine = MatchEngine::new(percent_config().with_seed(77)).unwrap();
    let first_deck = engine.session().deck().clone();

    play_out(&mut engine, 1);
    engine.reset();

    assert_ne!(engine.session().deck(), &first_deck);
    assert!(!engine.is_terminal());
    assert_eq!(engine.snapshot().message, "It's Team Alpha's turn! Pick a card to start.");

    play_out(&mut engine, 3);
    assert!(engine.is_terminal());
    assert_eq!(engine.session().generation(), 2);
}

#[test]
fn test_same_seed_same_game() {
    let a = MatchEngine::new(percent_config().with_seed(9)).unwrap();
    let b = MatchEngine::new(percent_config().with_seed(9)).unwrap();
    assert_eq!(a.session().deck(), b.session().deck());
}
