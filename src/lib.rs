//! A library for ranking poker hands that may contain joker
//! wildcards.
//!
//! The three entry points are:
//!
//! * [`core::classify`] ranks exactly five cards.
//! * [`core::best_hand`] finds the best five card hand in seven cards.
//! * [`core::best_wild_hand`] does the same for hands holding up to
//!   two jokers, searching every legal substitution.
//!
//! A joker carries a color rather than a suit: the black joker may
//! stand in for any club or spade, the red joker for any heart or
//! diamond. One quirk carried over from the rules this library
//! implements: the ace only ever plays high, so A-2-3-4-5 is not a
//! straight.
//!
//! ```
//! use wild_poker::core::{best_wild_hand, HandClass, WildHand};
//!
//! let hand = WildHand::new_from_str("TD TC 5H 5C 7C ?R ?B").unwrap();
//! let best = best_wild_hand(&hand).unwrap();
//!
//! // Both jokers resolve to tens.
//! assert_eq!(HandClass::FourOfAKind, HandClass::from(best.rank));
//! assert_eq!(vec!["7C", "TC", "TD", "TH", "TS"], best.sorted_tokens());
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core is exported.
pub mod core;
