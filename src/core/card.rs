use std::fmt;

use super::HoldemEvalError;

/// Card rank or value.
/// The discriminant is the poker rank, so `Two` is 2 and `Ace` is 14.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
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
    /// Convert a poker rank in `2..=14` into a value.
    ///
    /// ```
    /// use holdem_eval::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_rank(10));
    /// assert_eq!(None, Value::from_rank(15));
    /// ```
    pub fn from_rank(rank: u8) -> Option<Value> {
        match rank {
            2..=14 => Some(VALUES[usize::from(rank - 2)]),
            _ => None,
        }
    }

    /// Get all of the `Value`'s that are possible, lowest first.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// The poker rank, 2 through 14.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// A 13 bit mask with only bit `rank - 2` set.
    pub fn rank_mask(self) -> u16 {
        1 << (self as u8 - 2)
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Suit {
    /// Spades
    Spade = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
    /// Clubs
    Club = 4,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Convert a suit index in `1..=4` into a suit.
    pub fn from_index(index: u8) -> Option<Suit> {
        match index {
            1..=4 => Some(SUITS[usize::from(index - 1)]),
            _ => None,
        }
    }

    /// The suit index, 1 (spades) through 4 (clubs).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// A 4 bit mask with only bit `index - 1` set.
    pub fn suit_mask(self) -> u8 {
        1 << (self as u8 - 1)
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'd' => Some(Suit::Diamond),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A single playing card. Immutable once built.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Build a card from raw numbers, checking that the rank is in
    /// `2..=14` and the suit in `1..=4`.
    ///
    /// ```
    /// use holdem_eval::core::{Card, Suit, Value};
    ///
    /// let card = Card::try_new(14, 1).unwrap();
    /// assert_eq!(Card::new(Value::Ace, Suit::Spade), card);
    /// assert!(Card::try_new(1, 1).is_err());
    /// ```
    pub fn try_new(rank: u8, suit: u8) -> Result<Self, HoldemEvalError> {
        let value = Value::from_rank(rank).ok_or(HoldemEvalError::InvalidRank(rank))?;
        let suit = Suit::from_index(suit).ok_or(HoldemEvalError::InvalidSuit(suit))?;
        Ok(Self { value, suit })
    }

    pub fn rank(&self) -> u8 {
        self.value.rank()
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank_mask(&self) -> u16 {
        self.value.rank_mask()
    }

    pub fn suit_mask(&self) -> u8 {
        self.suit.suit_mask()
    }

    /// Stable integer id for this card: `rank + suit * 14`.
    /// Distinct cards always get distinct ids.
    pub fn index(&self) -> u8 {
        self.rank() + self.suit.index() * 14
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}
