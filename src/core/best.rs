use crate::core::card::Card;
use crate::core::card_iter::CardIter;
use crate::core::errors::HandError;
use crate::core::rank::{Rank, Rankable};

/// How many cards make a playable hand.
pub const HAND_SIZE: usize = 5;
/// How many cards the caller supplies for best hand selection.
pub const POOL_SIZE: usize = 7;

/// A five card hand together with the rank it was classified as.
/// Built once per winning candidate and never mutated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct RankedHand {
    /// The classification, category plus tie-break.
    pub rank: Rank,
    /// The five cards that produced the rank.
    pub cards: [Card; HAND_SIZE],
}

impl RankedHand {
    /// The winning cards as display tokens, sorted. Handy for
    /// showing a result in the wire format.
    pub fn sorted_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        tokens.sort();
        tokens
    }
}

/// Classify exactly five cards into a `RankedHand`.
///
/// This is a pure function of the card multiset; the order the
/// cards arrive in doesn't change the rank.
///
/// # Examples
///
/// ```
/// use wild_poker::core::{classify, FlatHand, HandClass};
///
/// let hand = FlatHand::new_from_str("TD TC TH 8C 8S").unwrap();
/// let ranked = classify(&hand).unwrap();
/// assert_eq!(HandClass::FullHouse, HandClass::from(ranked.rank));
/// ```
pub fn classify(cards: &[Card]) -> Result<RankedHand, HandError> {
    let five: [Card; HAND_SIZE] =
        cards
            .try_into()
            .map_err(|_| HandError::InvalidHandSize {
                expected: HAND_SIZE,
                got: cards.len(),
            })?;
    Ok(RankedHand {
        rank: five.rank_five(),
        cards: five,
    })
}

/// From seven cards select the five card subset with the best rank.
///
/// All C(7,5) = 21 subsets are classified and folded left, keeping
/// the running maximum. Ties keep the first subset seen, and the
/// subsets come out of `CardIter` in a stable order, so the result
/// is reproducible.
///
/// # Examples
///
/// ```
/// use wild_poker::core::{best_hand, FlatHand, Rank};
///
/// let hand = FlatHand::new_from_str("6C 7C 8C 9C TC 5C JS").unwrap();
/// let best = best_hand(&hand).unwrap();
/// assert_eq!(Rank::StraightFlush(5), best.rank);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<RankedHand, HandError> {
    if cards.len() != POOL_SIZE {
        return Err(HandError::InvalidHandSize {
            expected: POOL_SIZE,
            got: cards.len(),
        });
    }
    let mut best: Option<RankedHand> = None;
    for five in CardIter::new(cards, HAND_SIZE) {
        let candidate = classify(&five)?;
        match &best {
            // First seen wins; only a strictly better rank replaces.
            Some(leader) if candidate.rank <= leader.rank => {}
            _ => best = Some(candidate),
        }
    }
    best.ok_or(HandError::InvalidHandSize {
        expected: POOL_SIZE,
        got: cards.len(),
    })
}
