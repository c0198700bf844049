//! Category detectors.
//!
//! Each detector looks at the shared [`HandStats`] and either claims the
//! holding, producing its tiebreak, or passes. They are tried strongest
//! first, so every detector may assume that all stronger categories have
//! already been ruled out.

use super::category::{HandCategory, Tiebreak, flush_score};
use super::stats::HandStats;
use crate::core::{Suit, Value};

/// A detector: claims the holding or passes.
pub(crate) type Detector = fn(&HandStats) -> Option<Tiebreak>;

/// Every detector, strongest first. High card matches any five or more
/// cards.
pub(crate) const DETECTORS: [(HandCategory, Detector); 10] = [
    (HandCategory::RoyalFlush, royal_flush),
    (HandCategory::StraightFlush, straight_flush),
    (HandCategory::FourOfAKind, four_of_a_kind),
    (HandCategory::FullHouse, full_house),
    (HandCategory::Flush, flush),
    (HandCategory::Straight, straight),
    (HandCategory::ThreeOfAKind, three_of_a_kind),
    (HandCategory::TwoPair, two_pair),
    (HandCategory::Pair, pair),
    (HandCategory::HighCard, high_card),
];

/// Ten, Jack, Queen, King, Ace.
const ROYAL: u16 = 0b1_1111_0000_0000;
/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u16 = 0b1_0000_0000_1111;
/// One bit per rank, two through ace.
const ALL_RANKS: u16 = 0x1FFF;

/// Given a 13 bit set of ranks find the highest straight in it.
/// The wheel is the lowest and tops out at five; it only counts when
/// nothing higher is there.
///
/// Bits above the ace are ignored.
///
/// Returns None if the ranks don't hold a straight.
pub fn best_straight(rank_mask: u16) -> Option<Value> {
    let rank_mask = rank_mask & ALL_RANKS;
    let m = u32::from(rank_mask);
    // Bit i survives only when bits i, i-1, .., i-4 are all set:
    //
    //       0000111111100
    //       0001111111000
    //       0011111110000
    //       0111111100000
    //       1111111000000
    //       -------------
    //       0000111000000
    let runs = m & (m << 1) & (m << 2) & (m << 3) & (m << 4);
    if runs != 0 {
        // Highest surviving bit is the top card of the best straight.
        let top_bit = 31 - runs.leading_zeros();
        Value::from_rank(top_bit as u8 + 2)
    } else if rank_mask & WHEEL == WHEEL {
        Some(Value::Five)
    } else {
        None
    }
}

/// The five highest ranks set in a mask, descending.
fn top_five(rank_mask: u16) -> Option<[Value; 5]> {
    let mut out = [Value::Two; 5];
    let mut found = Value::values()
        .into_iter()
        .rev()
        .filter(|v| rank_mask & v.rank_mask() != 0);
    for slot in out.iter_mut() {
        *slot = found.next()?;
    }
    Some(out)
}

fn royal_flush(stats: &HandStats) -> Option<Tiebreak> {
    Suit::suits()
        .into_iter()
        .find(|s| stats.suit_mask(*s) & ROYAL == ROYAL)
        .map(Tiebreak::Suit)
}

// Two suits can't both hold five cards out of seven, so taking the max
// never has to pick between suits.
fn straight_flush(stats: &HandStats) -> Option<Tiebreak> {
    Suit::suits()
        .into_iter()
        .filter_map(|s| best_straight(stats.suit_mask(s)))
        .max()
        .map(Tiebreak::TopRank)
}

fn four_of_a_kind(stats: &HandStats) -> Option<Tiebreak> {
    let quads = stats.values_with_count(4).next()?;
    let [kicker] = stats.kickers::<1>(&[quads])?;
    Some(Tiebreak::FourOfAKind { quads, kicker })
}

fn full_house(stats: &HandStats) -> Option<Tiebreak> {
    let trips = stats.values_with_count(3).next()?;
    // A second set counts as the pair.
    let pair = stats.values_with_count(2).find(|v| *v != trips)?;
    Some(Tiebreak::FullHouse { trips, pair })
}

fn flush(stats: &HandStats) -> Option<Tiebreak> {
    Suit::suits()
        .into_iter()
        .map(|s| stats.suit_mask(s))
        .filter(|m| m.count_ones() >= 5)
        .filter_map(top_five)
        .map(flush_score)
        .max()
        .map(Tiebreak::FlushScore)
}

fn straight(stats: &HandStats) -> Option<Tiebreak> {
    best_straight(stats.rank_mask()).map(Tiebreak::TopRank)
}

fn three_of_a_kind(stats: &HandStats) -> Option<Tiebreak> {
    let trips = stats.values_with_count(3).next()?;
    Some(Tiebreak::ThreeOfAKind {
        trips,
        kickers: stats.kickers(&[trips])?,
    })
}

fn two_pair(stats: &HandStats) -> Option<Tiebreak> {
    let mut pairs = stats.values_with_count(2);
    let high = pairs.next()?;
    let low = pairs.next()?;
    // A third pair plays as the kicker.
    let [kicker] = stats.kickers::<1>(&[high, low])?;
    Some(Tiebreak::TwoPair { high, low, kicker })
}

fn pair(stats: &HandStats) -> Option<Tiebreak> {
    let pair = stats.values_with_count(2).next()?;
    Some(Tiebreak::Pair {
        pair,
        kickers: stats.kickers(&[pair])?,
    })
}

fn high_card(stats: &HandStats) -> Option<Tiebreak> {
    stats.kickers(&[]).map(Tiebreak::HighCard)
}
