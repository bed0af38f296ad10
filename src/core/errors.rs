use thiserror::Error;

/// Everything that can go wrong while parsing or evaluating a hand.
/// These are all terminal input validation failures; the evaluation
/// itself is total over well formed input.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum HandError {
    /// The token is not a recognized card or joker.
    #[error("Unable to parse {0} as a card token")]
    InvalidCard(String),

    /// The hand has the wrong number of cards for the requested operation.
    #[error("Expected a hand of {expected} cards, got {got}")]
    InvalidHandSize {
        /// How many cards the operation needs.
        expected: usize,
        /// How many cards were supplied.
        got: usize,
    },

    /// A hand can hold the black joker and the red joker, nothing more.
    #[error("A hand may hold at most two jokers, got {0}")]
    TooManyJokers(usize),

    /// Every candidate substitution would duplicate a card already in the
    /// hand, so the jokers cannot resolve.
    #[error("No legal joker substitution exists for this hand")]
    NoLegalSubstitution,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            "Unable to parse Zz as a card token",
            HandError::InvalidCard("Zz".to_string()).to_string()
        );
        assert_eq!(
            "Expected a hand of 7 cards, got 6",
            HandError::InvalidHandSize {
                expected: 7,
                got: 6
            }
            .to_string()
        );
    }
}
