use crate::core::errors::HandError;
use std::fmt;

/// Card value or value of a card.
/// Values are ordered from two (the lowest) to ace (the highest).
/// There is no ace-low; the ace never plays as a one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s in order from lowest to highest.
    ///
    /// # Examples
    ///
    /// ```
    /// use wild_poker::core::Value;
    ///
    /// assert_eq!(13, Value::values().len());
    /// assert_eq!(Value::Two, Value::values()[0]);
    /// ```
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Given a character parse that to a value.
    /// Valid chars are 2-9, T,J,Q,K,A in either case.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' | 'a' => Some(Self::Ace),
            'K' | 'k' => Some(Self::King),
            'Q' | 'q' => Some(Self::Queen),
            'J' | 'j' => Some(Self::Jack),
            'T' | 't' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }

}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensible to say that one suit is better than another.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Spades
    Spade = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Spade, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the suits.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Translate a char into a `Suit`. Returns None if the char is unknown.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' | 'c' => Some(Self::Club),
            'S' | 's' => Some(Self::Spade),
            'H' | 'h' => Some(Self::Heart),
            'D' | 'd' => Some(Self::Diamond),
            _ => None,
        }
    }

    /// This `Suit` to a char. The uppercase char is the wire format.
    pub fn to_char(self) -> char {
        match self {
            Self::Club => 'C',
            Self::Spade => 'S',
            Self::Heart => 'H',
            Self::Diamond => 'D',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from value and suit.
    ///
    /// # Examples
    ///
    /// ```
    /// use wild_poker::core::{Card, Suit, Value};
    ///
    /// let c = Card::new(Value::Ten, Suit::Club);
    /// assert_eq!("TC", c.to_string());
    /// ```
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parse a two character token like `TC` into a card.
    pub fn try_from_token(token: &str) -> Result<Self, HandError> {
        let mut chars = token.chars();
        let value = chars
            .next()
            .and_then(Value::from_char)
            .ok_or_else(|| HandError::InvalidCard(token.to_string()))?;
        let suit = chars
            .next()
            .and_then(Suit::from_char)
            .ok_or_else(|| HandError::InvalidCard(token.to_string()))?;
        if chars.next().is_some() {
            return Err(HandError::InvalidCard(token.to_string()));
        }
        Ok(Self { value, suit })
    }
}

/// Display the card as a two character token, value then suit.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.value.to_char(), self.suit.to_char())
    }
}

/// The two colors a joker can come in.
/// The color constrains which suits the joker may stand in for.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum JokerColor {
    /// The black joker plays as a club or a spade.
    Black,
    /// The red joker plays as a heart or a diamond.
    Red,
}

impl JokerColor {
    /// The two suits this joker color may resolve to.
    pub const fn suits(self) -> [Suit; 2] {
        match self {
            Self::Black => [Suit::Club, Suit::Spade],
            Self::Red => [Suit::Heart, Suit::Diamond],
        }
    }

    /// Translate a char into a `JokerColor`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'B' | 'b' => Some(Self::Black),
            'R' | 'r' => Some(Self::Red),
            _ => None,
        }
    }

    /// This color to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Red => 'R',
        }
    }
}

/// A card as dealt into a wild hand. Either a real card
/// or a joker carrying only a color. A joker is not a `Card`
/// with a sentinel value; it has no value or suit until the
/// substitution search assigns one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum WildCard {
    /// A normal card from the 52 card deck.
    Real(Card),
    /// A joker of the given color.
    Joker(JokerColor),
}

impl WildCard {
    /// Parse a two character token. `?B`/`?R` for the jokers, otherwise
    /// the normal card token format.
    pub fn try_from_token(token: &str) -> Result<Self, HandError> {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some('?'), Some(c), None) => JokerColor::from_char(c)
                .map(Self::Joker)
                .ok_or_else(|| HandError::InvalidCard(token.to_string())),
            _ => Card::try_from_token(token).map(Self::Real),
        }
    }

    /// Is this a joker?
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::Joker(_))
    }
}

impl From<Card> for WildCard {
    fn from(card: Card) -> Self {
        Self::Real(card)
    }
}

impl fmt::Display for WildCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(card) => card.fmt(f),
            Self::Joker(color) => write!(f, "?{}", color.to_char()),
        }
    }
}
