use crate::core::card::Card;
use crate::core::errors::HandError;
use std::ops::Index;
use std::ops::{Deref, DerefMut};
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};
use std::slice::Iter;

/// A hand of real cards kept in a contiguous vec.
/// This is the input for five card classification and
/// seven card best hand selection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Hash, PartialEq, Eq, Default)]
pub struct FlatHand(Vec<Card>);

impl FlatHand {
    /// Create the hand with specific cards.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    /// From a str create a new hand.
    /// Tokens are two characters, value then suit; whitespace between
    /// tokens is ignored so `"TC 9C"` and `"TC9C"` parse the same.
    ///
    /// # Examples
    ///
    /// ```
    /// use wild_poker::core::FlatHand;
    ///
    /// let hand = FlatHand::new_from_str("AD KD").unwrap();
    /// assert_eq!(2, hand.len());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, HandError> {
        let mut cards: Vec<Card> = Vec::with_capacity(hand_string.len() / 2);
        let mut chars = hand_string.chars().filter(|c| !c.is_whitespace());
        while let Some(vchar) = chars.next() {
            let schar = chars
                .next()
                .ok_or_else(|| HandError::InvalidCard(vchar.to_string()))?;
            let token: String = [vchar, schar].iter().collect();
            cards.push(Card::try_from_token(&token)?);
        }
        Ok(Self(cards))
    }

    /// Add a card to this hand.
    pub fn push(&mut self, c: Card) {
        self.0.push(c);
    }

    /// How many cards are in this hand.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Are there no cards?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An iterator over the cards.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.0.iter()
    }
}

/// Allow indexing into the hand.
impl Index<usize> for FlatHand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

/// Allow the index to get a slice of a hand.
impl Index<Range<usize>> for FlatHand {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.0[index]
    }
}

/// Allow getting a slice from the start of a hand.
impl Index<RangeTo<usize>> for FlatHand {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.0[index]
    }
}

/// Allow getting a slice to the end of a hand.
impl Index<RangeFrom<usize>> for FlatHand {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.0[index]
    }
}

/// Allow getting the whole hand as a slice.
impl Index<RangeFull> for FlatHand {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.0[index]
    }
}

/// Allow the hand to be viewed as a card slice.
impl Deref for FlatHand {
    type Target = [Card];
    fn deref(&self) -> &[Card] {
        &self.0
    }
}

impl DerefMut for FlatHand {
    fn deref_mut(&mut self) -> &mut [Card] {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Suit, Value};

    #[test]
    fn test_parse_spaced_tokens() {
        let hand = FlatHand::new_from_str("6C 7C 8C 9C TC 5C JS").unwrap();
        assert_eq!(7, hand.len());
        assert_eq!(Card::new(Value::Jack, Suit::Spade), hand[6]);
    }

    #[test]
    fn test_parse_packed_tokens() {
        let hand = FlatHand::new_from_str("Ad8h9cTc5c").unwrap();
        assert_eq!(5, hand.len());
        assert_eq!(Card::new(Value::Ace, Suit::Diamond), hand[0]);
    }

    #[test]
    fn test_parse_bad_token() {
        assert_eq!(
            Err(HandError::InvalidCard("1C".to_string())),
            FlatHand::new_from_str("1C 2C")
        );
    }

    #[test]
    fn test_parse_dangling_char() {
        assert!(FlatHand::new_from_str("TC 9").is_err());
    }

    #[test]
    fn test_new_with_cards() {
        let cards = vec![
            Card::new(Value::Ace, Suit::Spade),
            Card::new(Value::King, Suit::Spade),
        ];
        let hand = FlatHand::new_with_cards(cards.clone());
        assert_eq!(cards[..], hand[..]);
    }

    #[test]
    fn test_push_and_iter() {
        let mut hand = FlatHand::default();
        hand.push(Card::new(Value::Two, Suit::Spade));
        hand.push(Card::new(Value::Three, Suit::Spade));
        assert_eq!(2, hand.iter().count());
        assert!(!hand.is_empty());
    }

    #[test]
    fn test_deref_to_slice() {
        let hand = FlatHand::new_from_str("AdKd").unwrap();
        let slice: &[Card] = &hand;
        assert_eq!(2, slice.len());
    }

    #[test]
    fn test_range_indexing() {
        let hand = FlatHand::new_from_str("Ad Kd Qd Jd Td").unwrap();
        // Every range form works alongside single card indexing.
        assert_eq!(Card::new(Value::Ace, Suit::Diamond), hand[0]);
        assert_eq!(5, hand[..].len());
        assert_eq!(2, hand[0..2].len());
        assert_eq!(3, hand[..3].len());
        assert_eq!(2, hand[3..].len());
        assert_eq!(hand[..][1], hand[1]);
    }
}
