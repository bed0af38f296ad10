use crate::core::best::{best_hand, RankedHand, POOL_SIZE};
use crate::core::card::{Card, JokerColor, Value, WildCard};
use crate::core::errors::HandError;
use std::ops::Deref;
use std::slice::Iter;

/// The most jokers a hand may hold, one black and one red.
pub const MAX_JOKERS: usize = 2;

/// A hand that may contain jokers alongside real cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Hash, PartialEq, Eq, Default)]
pub struct WildHand(Vec<WildCard>);

impl WildHand {
    /// Create the hand with specific cards.
    pub fn new_with_cards(cards: Vec<WildCard>) -> Self {
        Self(cards)
    }

    /// From a str create a new wild hand. Same token format as
    /// `FlatHand::new_from_str` plus `?B` and `?R` for the jokers.
    ///
    /// # Examples
    ///
    /// ```
    /// use wild_poker::core::WildHand;
    ///
    /// let hand = WildHand::new_from_str("TD TC 5H 5C 7C ?R ?B").unwrap();
    /// assert_eq!(7, hand.len());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, HandError> {
        let mut cards: Vec<WildCard> = Vec::with_capacity(hand_string.len() / 2);
        let mut chars = hand_string.chars().filter(|c| !c.is_whitespace());
        while let Some(first) = chars.next() {
            let second = chars
                .next()
                .ok_or_else(|| HandError::InvalidCard(first.to_string()))?;
            let token: String = [first, second].iter().collect();
            cards.push(WildCard::try_from_token(&token)?);
        }
        Ok(Self(cards))
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
    pub fn iter(&self) -> Iter<'_, WildCard> {
        self.0.iter()
    }
}

impl Deref for WildHand {
    type Target = [WildCard];
    fn deref(&self) -> &[WildCard] {
        &self.0
    }
}

/// Every card a joker of this color may resolve to: its two suits
/// crossed with all thirteen values, minus cards already taken.
/// The order is fixed (suits in color order, values ascending) so
/// the substitution fold is reproducible.
fn substitutes(color: JokerColor, taken: &[Card]) -> Vec<Card> {
    let mut cards: Vec<Card> = Vec::with_capacity(26);
    for suit in color.suits() {
        for value in Value::values() {
            let card = Card::new(value, suit);
            if !taken.contains(&card) {
                cards.push(card);
            }
        }
    }
    cards
}

/// From seven cards, up to two of which are jokers, select the best
/// five card hand over every legal joker substitution.
///
/// A joker may stand in for any value of either suit of its color,
/// as long as the resulting card isn't already in the hand. There is
/// no shortcut here: which substitute is best depends on the rest of
/// the hand, so every assignment goes through `best_hand` and the
/// global maximum wins, first seen on ties.
///
/// # Examples
///
/// ```
/// use wild_poker::core::{best_wild_hand, WildHand};
///
/// let hand = WildHand::new_from_str("6C 7C 8C 9C TC 5C ?B").unwrap();
/// let best = best_wild_hand(&hand).unwrap();
/// assert_eq!(vec!["7C", "8C", "9C", "JC", "TC"], best.sorted_tokens());
/// ```
pub fn best_wild_hand(cards: &[WildCard]) -> Result<RankedHand, HandError> {
    if cards.len() != POOL_SIZE {
        return Err(HandError::InvalidHandSize {
            expected: POOL_SIZE,
            got: cards.len(),
        });
    }

    let mut reals: Vec<Card> = Vec::with_capacity(POOL_SIZE);
    let mut jokers: Vec<JokerColor> = Vec::new();
    for card in cards {
        match card {
            WildCard::Real(c) => reals.push(*c),
            WildCard::Joker(color) => jokers.push(*color),
        }
    }
    if jokers.len() > MAX_JOKERS {
        return Err(HandError::TooManyJokers(jokers.len()));
    }

    let mut best: Option<RankedHand> = None;
    match jokers[..] {
        [] => return best_hand(&reals),
        [color] => {
            let mut pool = reals.clone();
            for sub in substitutes(color, &reals) {
                pool.push(sub);
                fold_best(&mut best, best_hand(&pool)?);
                pool.pop();
            }
        }
        [first, second] => {
            let mut pool = reals.clone();
            for sub_one in substitutes(first, &reals) {
                for sub_two in substitutes(second, &reals) {
                    // The two jokers can't resolve to the same card.
                    if sub_one == sub_two {
                        continue;
                    }
                    pool.push(sub_one);
                    pool.push(sub_two);
                    fold_best(&mut best, best_hand(&pool)?);
                    pool.pop();
                    pool.pop();
                }
            }
        }
        _ => unreachable!("joker count checked above"),
    }

    best.ok_or(HandError::NoLegalSubstitution)
}

/// Keep the running maximum; only a strictly better rank replaces
/// the leader so that the first assignment seen wins ties.
fn fold_best(best: &mut Option<RankedHand>, candidate: RankedHand) {
    match best {
        Some(leader) if candidate.rank <= leader.rank => {}
        _ => *best = Some(candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;
    use crate::core::deck::Deck;
    use crate::core::flat_hand::FlatHand;
    use crate::core::rank::HandClass;

    #[test]
    fn test_joker_extends_straight_flush() {
        // The black joker plays as the jack of clubs, making a higher
        // straight flush than the five of clubs already in hand.
        let hand = WildHand::new_from_str("6C 7C 8C 9C TC 5C ?B").unwrap();
        let best = best_wild_hand(&hand).unwrap();
        assert_eq!(
            vec!["7C", "8C", "9C", "JC", "TC"],
            best.sorted_tokens()
        );
        assert_eq!(HandClass::StraightFlush, HandClass::from(best.rank));
    }

    #[test]
    fn test_two_jokers_make_four_of_a_kind() {
        let hand = WildHand::new_from_str("TD TC 5H 5C 7C ?R ?B").unwrap();
        let best = best_wild_hand(&hand).unwrap();
        assert_eq!(
            vec!["7C", "TC", "TD", "TH", "TS"],
            best.sorted_tokens()
        );
        assert_eq!(HandClass::FourOfAKind, HandClass::from(best.rank));
    }

    #[test]
    fn test_no_jokers_delegates() {
        let wild = WildHand::new_from_str("JD TC TH 7C 7D 7S 7H").unwrap();
        let plain = FlatHand::new_from_str("JD TC TH 7C 7D 7S 7H").unwrap();
        let from_wild = best_wild_hand(&wild).unwrap();
        let from_plain = best_hand(&plain).unwrap();
        assert_eq!(from_plain, from_wild);
        assert_eq!(
            vec!["7C", "7D", "7H", "7S", "JD"],
            from_wild.sorted_tokens()
        );
    }

    #[test]
    fn test_new_with_cards() {
        let cards = vec![
            WildCard::Real(Card::new(Value::Ace, Suit::Spade)),
            WildCard::Joker(JokerColor::Red),
        ];
        let hand = WildHand::new_with_cards(cards.clone());
        assert_eq!(cards[..], hand[..]);
        assert!(hand.iter().any(|c| c.is_joker()));
    }

    #[test]
    fn test_wrong_size() {
        let hand = WildHand::new_from_str("TD TC 5H 5C 7C ?R").unwrap();
        assert_eq!(
            Err(HandError::InvalidHandSize {
                expected: 7,
                got: 6
            }),
            best_wild_hand(&hand)
        );
    }

    #[test]
    fn test_too_many_jokers() {
        let hand = WildHand::new_from_str("TD TC 5H 5C ?B ?R ?B").unwrap();
        assert_eq!(Err(HandError::TooManyJokers(3)), best_wild_hand(&hand));
    }

    #[test]
    fn test_substitutes_skip_taken_cards() {
        let taken = FlatHand::new_from_str("TC TD").unwrap();
        let subs = substitutes(JokerColor::Black, &taken);
        // 26 candidates minus the ten of clubs already in hand.
        assert_eq!(25, subs.len());
        assert!(!subs.contains(&Card::new(Value::Ten, Suit::Club)));
        assert!(subs.contains(&Card::new(Value::Ten, Suit::Spade)));
    }

    #[test]
    fn test_substitutes_exhausted() {
        // A joker with every one of its cards already taken has no
        // legal resolution.
        let mut taken: Vec<Card> = Vec::new();
        for suit in JokerColor::Black.suits() {
            for value in Value::values() {
                taken.push(Card::new(value, suit));
            }
        }
        assert!(substitutes(JokerColor::Black, &taken).is_empty());
    }

    /// With no jokers present the wild path and the plain path agree
    /// on random hands.
    #[test]
    fn test_zero_joker_equivalence_random() {
        let mut deck = Deck::default();
        deck.shuffle(&mut rand::thread_rng());
        for _ in 0..4 {
            let cards = deck.deal(POOL_SIZE);
            let wild: Vec<WildCard> = cards.iter().copied().map(WildCard::from).collect();
            assert_eq!(best_hand(&cards).unwrap(), best_wild_hand(&wild).unwrap());
        }
    }

    /// A joker never makes the hand worse than playing without it
    /// would: the resolved rank is at least the rank of every five
    /// card subset of the real cards.
    #[test]
    fn test_joker_is_monotone() {
        let hand = WildHand::new_from_str("2C 5D 9H JS QD KC ?R").unwrap();
        let best = best_wild_hand(&hand).unwrap();

        let reals = FlatHand::new_from_str("2C 5D 9H JS QD KC 2H").unwrap();
        let without = best_hand(&reals).unwrap();
        assert!(best.rank >= without.rank);
        // A red joker next to this board pairs the king at minimum.
        assert!(HandClass::from(best.rank) >= HandClass::OnePair);
    }
}
