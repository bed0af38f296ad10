//! This is the core module. It holds the card model, hand
//! parsing, hand ranking, and the best hand searches.

/// card.rs has value, suit, and the joker variants.
mod card;
/// Re-export Card, Value, Suit, and the wildcard types.
pub use self::card::{Card, JokerColor, Suit, Value, WildCard};

/// Everything that can go wrong with hand input.
mod errors;
/// Export the error enum.
pub use self::errors::HandError;

/// Code related to cards in hands.
mod flat_hand;
/// Everything in there should be public.
pub use self::flat_hand::FlatHand;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// 5 Card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{HandClass, Rank, Rankable};

/// Best five card hand selection from seven cards.
mod best;
/// Export the selection entry points.
pub use self::best::{best_hand, classify, RankedHand, HAND_SIZE, POOL_SIZE};

/// Joker substitution search.
mod wild;
/// Export the wildcard entry points.
pub use self::wild::{best_wild_hand, WildHand, MAX_JOKERS};
