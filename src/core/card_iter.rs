use crate::core::Card;

/// Given some cards create sets of possible groups of cards.
///
/// Subsets come out in lexicographic index order over the source
/// slice, so the enumeration is stable. Best hand selection relies
/// on that for reproducible first-seen-wins tie handling.
#[derive(Debug)]
pub struct CardIter<'a> {
    /// All the possible cards that can be dealt
    possible_cards: &'a [Card],

    /// Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    /// size of card sets requested.
    num_cards: usize,
}

/// `CardIter` is a container for cards and current state.
impl CardIter<'_> {
    /// Create a new `CardIter` from a slice of cards.
    /// `num_cards` represents how many cards should be in the resulting vector.
    pub fn new(possible_cards: &[Card], num_cards: usize) -> CardIter<'_> {
        let mut idx: Vec<usize> = (0..num_cards).collect();
        if num_cards > 1 {
            idx[num_cards - 1] -= 1;
        }
        CardIter {
            possible_cards,
            idx,
            num_cards,
        }
    }
}

/// The actual `Iterator` for `Card`'s.
impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;
    fn next(&mut self) -> Option<Vec<Card>> {
        // This is a complete hack.
        //
        // Basically if num_cards == 1 then CardIter::new couldn't
        // set the last index to one less than the starting index,
        // because doing so would cause the unsigned usize to roll over.
        // That means that we need this hack here.
        if self.num_cards == 1 {
            if self.idx[0] < self.possible_cards.len() {
                let c = self.possible_cards[self.idx[0]];
                self.idx[0] += 1;
                return Some(vec![c]);
            } else {
                return None;
            }
        }
        // Keep track of where we are mutating
        let mut current_level: usize = self.num_cards - 1;

        while current_level < self.num_cards {
            // Move the current level forward one.
            self.idx[current_level] += 1;

            // Now check if moving this level forward means that
            // We will need more cards to fill out the rest of the hand
            // then are there.
            let cards_needed_after = self.num_cards - (current_level + 1);
            if self.idx[current_level] + cards_needed_after >= self.possible_cards.len() {
                if current_level == 0 {
                    return None;
                }
                current_level -= 1;
            } else {
                // If we aren't at the end then
                if current_level < self.num_cards - 1 {
                    self.idx[current_level + 1] = self.idx[current_level];
                }
                // Move forward one level
                current_level += 1;
            }
        }

        Some(self.idx.iter().map(|i| self.possible_cards[*i]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FlatHand, Suit, Value};

    #[test]
    fn test_iter_one() {
        let mut h = FlatHand::default();
        h.push(Card {
            value: Value::Two,
            suit: Suit::Spade,
        });

        for cards in CardIter::new(&h[..], 1) {
            assert_eq!(1, cards.len());
        }
        assert_eq!(1, CardIter::new(&h[..], 1).count());
    }

    #[test]
    fn test_iter_two() {
        let mut h = FlatHand::default();
        h.push(Card {
            value: Value::Two,
            suit: Suit::Spade,
        });
        h.push(Card {
            value: Value::Three,
            suit: Suit::Spade,
        });
        h.push(Card {
            value: Value::Four,
            suit: Suit::Spade,
        });

        // Make sure that we get the correct number back.
        assert_eq!(3, CardIter::new(&h[..], 2).count());

        // Make sure that everything has two cards and they are different.
        for cards in CardIter::new(&h[..], 2) {
            assert_eq!(2, cards.len());
            assert!(cards[0] != cards[1]);
        }
    }

    #[test]
    fn test_iter_five_of_seven() {
        let h = FlatHand::new_from_str("6C 7C 8C 9C TC 5C JS").unwrap();
        // C(7, 5) = 21 subsets, none skipped.
        assert_eq!(21, CardIter::new(&h[..], 5).count());
    }

    #[test]
    fn test_iter_is_lexicographic() {
        let h = FlatHand::new_from_str("2S 3S 4S").unwrap();
        let combos: Vec<Vec<Card>> = CardIter::new(&h[..], 2).collect();
        assert_eq!(
            vec![vec![h[0], h[1]], vec![h[0], h[2]], vec![h[1], h[2]]],
            combos
        );
    }

    #[test]
    fn test_iter_contains_correct_cards() {
        let mut h = FlatHand::default();
        let card1 = Card {
            value: Value::Ace,
            suit: Suit::Heart,
        };
        let card2 = Card {
            value: Value::King,
            suit: Suit::Heart,
        };
        h.push(card1);
        h.push(card2);

        let combos: Vec<_> = CardIter::new(&h[..], 2).collect();
        assert_eq!(1, combos.len());

        assert!(combos[0].contains(&card1));
        assert!(combos[0].contains(&card2));
    }
}
