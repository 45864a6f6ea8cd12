//! Deck construction.
//!
//! The deck is the ordered sequence of cards on the board. A card's index
//! in the deck is its identity for the whole game.

use serde::{Deserialize, Serialize};

use super::definition::CardDefinition;
use crate::core::{GameRng, PairSpec};

/// Shuffled board of `2 * pairs` cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<CardDefinition>,
}

impl Deck {
    /// Build both cards of every pair and shuffle them uniformly.
    #[must_use]
    pub fn build(pairs: &[PairSpec], rng: &mut GameRng) -> Self {
        let mut deck = Self::ordered(pairs);
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build the unshuffled deck: expression then value, pair by pair.
    #[must_use]
    pub fn ordered(pairs: &[PairSpec]) -> Self {
        let mut cards = Vec::with_capacity(pairs.len() * 2);
        for pair in pairs {
            let (expr, value) = CardDefinition::pair(pair);
            cards.push(expr);
            cards.push(value);
        }
        Self { cards }
    }

    /// Get the card at a board position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardDefinition> {
        self.cards.get(index)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs() -> Vec<PairSpec> {
        vec![
            PairSpec::new("25% of 40", "10"),
            PairSpec::new("20% of 50", "10"),
            PairSpec::new("1% of 300", "3"),
        ]
    }

    #[test]
    fn test_ordered_layout() {
        let deck = Deck::ordered(&pairs());
        assert_eq!(deck.len(), 6);
        assert_eq!(deck.pair_count(), 3);
        assert_eq!(deck.get(0), Some(&CardDefinition::new("25% of 40", "10")));
        assert_eq!(deck.get(1), Some(&CardDefinition::new("10", "25% of 40")));
        assert_eq!(deck.get(6), None);
    }

    #[test]
    fn test_build_is_permutation() {
        let mut rng = GameRng::new(42);
        let deck = Deck::build(&pairs(), &mut rng);

        let mut shuffled: Vec<_> = deck.iter().cloned().collect();
        let mut ordered: Vec<_> = Deck::ordered(&pairs()).iter().cloned().collect();
        shuffled.sort_by(|a, b| (&a.content, &a.match_value).cmp(&(&b.content, &b.match_value)));
        ordered.sort_by(|a, b| (&a.content, &a.match_value).cmp(&(&b.content, &b.match_value)));

        assert_eq!(shuffled, ordered);
    }

    #[test]
    fn test_every_card_has_exactly_one_partner() {
        let mut rng = GameRng::new(3);
        let deck = Deck::build(&pairs(), &mut rng);

        for (i, card) in deck.iter().enumerate() {
            let partners = deck
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && card.is_partner_of(other))
                .count();
            assert_eq!(partners, 1, "card {} has {} partners", i, partners);
        }
    }

    #[test]
    fn test_same_seed_same_deck() {
        let a = Deck::build(&pairs(), &mut GameRng::new(11));
        let b = Deck::build(&pairs(), &mut GameRng::new(11));
        assert_eq!(a, b);
    }
}
