use std::fmt;

use crate::core::{Suit, Value};

/// All the different possible hand categories, weakest first.
///
/// The derived ordering is the primary key when comparing two
/// evaluated holdings.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// The lowest category.
    /// No matches
    HighCard,
    /// One Card matches another.
    Pair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten through Ace all of the same suit.
    RoyalFlush,
}

/// Every category. This is what `HandCategory::all()` returns.
const CATEGORIES: [HandCategory; 10] = [
    HandCategory::HighCard,
    HandCategory::Pair,
    HandCategory::TwoPair,
    HandCategory::ThreeOfAKind,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::FullHouse,
    HandCategory::FourOfAKind,
    HandCategory::StraightFlush,
    HandCategory::RoyalFlush,
];

impl HandCategory {
    /// All categories ordered from weakest to strongest.
    pub fn all() -> [HandCategory; 10] {
        CATEGORIES
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

/// 0 for high card up to 9 for a royal flush.
impl From<HandCategory> for u8 {
    fn from(category: HandCategory) -> Self {
        category as u8
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The secondary key that orders holdings inside one category.
///
/// Fields are declared most significant first so the derived ordering
/// is the lexicographic poker ordering. Tiebreaks of different
/// categories are never meant to be compared with each other.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tiebreak {
    /// Royal flush: the suit it was made in.
    Suit(Suit),
    /// Straight flush and straight: the top rank. A wheel tops out at five.
    TopRank(Value),
    FourOfAKind {
        quads: Value,
        kicker: Value,
    },
    FullHouse {
        trips: Value,
        pair: Value,
    },
    /// The five flush ranks packed by [`flush_score`].
    FlushScore(u32),
    ThreeOfAKind {
        trips: Value,
        kickers: [Value; 2],
    },
    TwoPair {
        high: Value,
        low: Value,
        kicker: Value,
    },
    Pair {
        pair: Value,
        kickers: [Value; 3],
    },
    /// The five highest ranks, descending.
    HighCard([Value; 5]),
}

impl Tiebreak {
    /// Flatten into the numeric tuple this key stands for.
    ///
    /// ```
    /// use holdem_eval::core::Value;
    /// use holdem_eval::holdem::Tiebreak;
    ///
    /// let tb = Tiebreak::TwoPair {
    ///     high: Value::Seven,
    ///     low: Value::Five,
    ///     kicker: Value::King,
    /// };
    /// assert_eq!(vec![7, 5, 13], tb.components());
    /// ```
    pub fn components(&self) -> Vec<u32> {
        let r = |v: &Value| u32::from(v.rank());
        match self {
            Tiebreak::Suit(suit) => vec![u32::from(suit.index())],
            Tiebreak::TopRank(top) => vec![r(top)],
            Tiebreak::FourOfAKind { quads, kicker } => vec![r(quads), r(kicker)],
            Tiebreak::FullHouse { trips, pair } => vec![r(trips), r(pair)],
            Tiebreak::FlushScore(score) => vec![*score],
            Tiebreak::ThreeOfAKind { trips, kickers } => {
                std::iter::once(trips).chain(kickers).map(r).collect()
            }
            Tiebreak::TwoPair { high, low, kicker } => vec![r(high), r(low), r(kicker)],
            Tiebreak::Pair { pair, kickers } => {
                std::iter::once(pair).chain(kickers).map(r).collect()
            }
            Tiebreak::HighCard(ranks) => ranks.iter().map(r).collect(),
        }
    }
}

impl fmt::Display for Tiebreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tiebreak::Suit(suit) => write!(f, "{suit}"),
            Tiebreak::TopRank(top) => write!(f, "{top} high"),
            Tiebreak::FourOfAKind { quads, kicker } => write!(f, "{quads}s, {kicker} kicker"),
            Tiebreak::FullHouse { trips, pair } => write!(f, "{trips} over {pair}"),
            Tiebreak::FlushScore(score) => {
                // Unpack from the most significant nibble down.
                let ranks: Vec<String> = (0..5)
                    .rev()
                    .filter_map(|i| Value::from_rank(((score >> (4 * i)) & 0xF) as u8))
                    .map(|v| v.to_string())
                    .collect();
                write!(f, "{}", ranks.join(""))
            }
            Tiebreak::ThreeOfAKind { trips, kickers } => {
                write!(f, "{trips}s, {}{} kickers", kickers[0], kickers[1])
            }
            Tiebreak::TwoPair { high, low, kicker } => {
                write!(f, "{high}s and {low}s, {kicker} kicker")
            }
            Tiebreak::Pair { pair, kickers } => write!(
                f,
                "{pair}s, {}{}{} kickers",
                kickers[0], kickers[1], kickers[2]
            ),
            Tiebreak::HighCard(ranks) => {
                for v in ranks {
                    write!(f, "{v}")?;
                }
                Ok(())
            }
        }
    }
}

/// Pack five ranks, highest first, into one integer four bits per rank.
///
/// Comparing two scores as integers is the same as comparing the rank
/// sequences lexicographically, since every rank fits in a nibble.
///
/// ```
/// use holdem_eval::core::Value;
/// use holdem_eval::holdem::flush_score;
///
/// let ace_high = flush_score([Value::Ace, Value::Nine, Value::Seven, Value::Four, Value::Two]);
/// let king_high = flush_score([Value::King, Value::Queen, Value::Jack, Value::Nine, Value::Eight]);
/// assert!(ace_high > king_high);
/// ```
pub fn flush_score(ranks: [Value; 5]) -> u32 {
    ranks
        .iter()
        .fold(0, |score, v| (score << 4) | u32::from(v.rank()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp() {
        assert!(HandCategory::HighCard < HandCategory::RoyalFlush);
        assert!(HandCategory::HighCard < HandCategory::FourOfAKind);
        assert!(HandCategory::Flush < HandCategory::FourOfAKind);
        assert!(HandCategory::StraightFlush < HandCategory::RoyalFlush);
    }

    #[test]
    fn test_all_is_sorted() {
        let all = HandCategory::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        for (i, c) in all.iter().enumerate() {
            assert_eq!(i, usize::from(u8::from(*c)));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!("Full House", HandCategory::FullHouse.to_string());
        let tb = Tiebreak::FullHouse {
            trips: Value::Ace,
            pair: Value::King,
        };
        assert_eq!("A over K", tb.to_string());
        let flush = Tiebreak::FlushScore(flush_score([
            Value::Ace,
            Value::Jack,
            Value::Nine,
            Value::Seven,
            Value::Two,
        ]));
        assert_eq!("AJ972", flush.to_string());
    }

    #[test]
    fn test_flush_score_layout() {
        let score = flush_score([
            Value::Ace,
            Value::King,
            Value::Queen,
            Value::Jack,
            Value::Nine,
        ]);
        assert_eq!(0xEDCB9, score);
    }

    #[test]
    fn test_flush_score_agrees_with_lexicographic() {
        let desc = |start: u8| -> Vec<[Value; 5]> {
            // Every strictly descending five rank sequence starting at `start`.
            let mut out = vec![];
            for b in 2..start {
                for c in 2..b {
                    for d in 2..c {
                        for e in 2..d {
                            let ranks = [start, b, c, d, e].map(|r| Value::from_rank(r).unwrap());
                            out.push(ranks);
                        }
                    }
                }
            }
            out
        };
        let seqs: Vec<[Value; 5]> = [14, 12, 9, 7].into_iter().flat_map(desc).collect();
        for a in &seqs {
            for b in &seqs {
                assert_eq!(a.cmp(b), flush_score(*a).cmp(&flush_score(*b)));
            }
        }
    }

    #[test]
    fn test_tiebreak_cmp_is_lexicographic() {
        let a = Tiebreak::Pair {
            pair: Value::Ten,
            kickers: [Value::Ace, Value::Four, Value::Three],
        };
        let b = Tiebreak::Pair {
            pair: Value::Ten,
            kickers: [Value::King, Value::Queen, Value::Jack],
        };
        assert!(a > b);
        assert!(a.components() > b.components());

        let c = Tiebreak::HighCard([Value::Ace, Value::King, Value::Nine, Value::Four, Value::Three]);
        let d = Tiebreak::HighCard([Value::Ace, Value::King, Value::Nine, Value::Four, Value::Two]);
        assert!(c > d);
    }

    #[test]
    fn test_components() {
        assert_eq!(vec![1], Tiebreak::Suit(Suit::Spade).components());
        assert_eq!(vec![5], Tiebreak::TopRank(Value::Five).components());
        assert_eq!(
            vec![14, 9],
            Tiebreak::FourOfAKind {
                quads: Value::Ace,
                kicker: Value::Nine
            }
            .components()
        );
        assert_eq!(
            vec![8, 13, 12],
            Tiebreak::ThreeOfAKind {
                trips: Value::Eight,
                kickers: [Value::King, Value::Queen]
            }
            .components()
        );
    }
}
