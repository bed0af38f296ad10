use crate::core::card::{Card, Suit, Value};
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::Deref;

/// The standard 52 card deck, one card per (value, suit) pair.
/// Hands are assumed to be dealt from a deck like this one, which
/// is where the no-duplicate-cards precondition comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    /// Every suit and every value, 52 cards.
    fn default() -> Self {
        let mut cards: Vec<Card> = Vec::with_capacity(52);
        for suit in Suit::suits() {
            for value in Value::values() {
                cards.push(Card::new(value, suit));
            }
        }
        Self(cards)
    }
}

impl Deck {
    /// Shuffle the deck in place.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    /// Deal the top `num_cards` off the deck. Asking for more cards
    /// than remain deals out everything that's left.
    ///
    /// # Examples
    ///
    /// ```
    /// use wild_poker::core::Deck;
    ///
    /// let mut deck = Deck::default();
    /// deck.shuffle(&mut rand::thread_rng());
    /// let hand = deck.deal(7);
    /// assert_eq!(7, hand.len());
    /// assert_eq!(45, deck.len());
    /// ```
    pub fn deal(&mut self, num_cards: usize) -> Vec<Card> {
        let num_cards = num_cards.min(self.0.len());
        self.0.split_off(self.0.len() - num_cards)
    }

    /// How many cards are left.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the deck empty?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for Deck {
    type Target = [Card];
    fn deref(&self) -> &[Card] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_deck_has_every_card_once() {
        let deck = Deck::default();
        assert_eq!(52, deck.len());
        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(52, unique.len());
    }

    #[test]
    fn test_shuffle_keeps_all_cards() {
        let mut deck = Deck::default();
        deck.shuffle(&mut rand::thread_rng());
        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(52, unique.len());
    }

    #[test]
    fn test_deal_more_than_remaining() {
        let mut deck = Deck::default();
        let all = deck.deal(60);
        assert_eq!(52, all.len());
        assert!(deck.is_empty());
        // A drained deck deals nothing.
        assert!(deck.deal(1).is_empty());
    }

    #[test]
    fn test_deal() {
        let mut deck = Deck::default();
        let hand = deck.deal(7);
        assert_eq!(7, hand.len());
        assert_eq!(45, deck.len());
        for card in &hand {
            assert!(!deck.contains(card));
        }
    }
}
