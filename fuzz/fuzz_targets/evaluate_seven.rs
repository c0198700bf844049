#![no_main]

extern crate arbitrary;
extern crate holdem_eval;
extern crate libfuzzer_sys;

use std::collections::HashSet;

use holdem_eval::core::{Card, HoldemEvalError};
use holdem_eval::holdem::{HandCategory, Tiebreak, evaluate};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub hole: [Card; 2],
    pub board: [Card; 5],
    /// A second player's hole cards for the showdown check.
    pub other: [Card; 2],
}

/// Five card ranking by the book: category number and the ranks that
/// decide ties, most important first.
fn rank_five(cards: &[Card]) -> (u8, Vec<u8>) {
    let mut counts = [0u8; 15];
    for c in cards {
        counts[usize::from(c.rank())] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|r| counts[usize::from(*r)] > 0)
        .map(|r| (counts[usize::from(r)], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    let shape: Vec<u8> = groups.iter().map(|g| g.0).collect();
    let key: Vec<u8> = groups.iter().map(|g| g.1).collect();

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_top = match key.as_slice() {
        [14, 5, 4, 3, 2] => Some(5),
        [hi, _, _, _, lo] if hi - lo == 4 => Some(*hi),
        _ => None,
    };

    match (straight_top, is_flush) {
        (Some(14), true) => (9, vec![]),
        (Some(top), true) => (8, vec![top]),
        _ if shape == [4, 1] => (7, key),
        _ if shape == [3, 2] => (6, key),
        (None, true) => (5, key),
        (Some(top), false) => (4, vec![top]),
        _ if shape == [3, 1, 1] => (3, key),
        _ if shape == [2, 2, 1] => (2, key),
        _ if shape == [2, 1, 1, 1] => (1, key),
        _ => (0, key),
    }
}

/// Best of all 21 five card subsets.
fn rank_seven_exhaustive(cards: &[Card]) -> (u8, Vec<u8>) {
    let mut best = (0, vec![]);
    for skip_a in 0..7 {
        for skip_b in (skip_a + 1)..7 {
            let five: Vec<Card> = cards
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip_a && *i != skip_b)
                .map(|(_, c)| *c)
                .collect();
            best = best.max(rank_five(&five));
        }
    }
    best
}

fn distinct(cards: &[Card]) -> bool {
    cards.iter().collect::<HashSet<_>>().len() == cards.len()
}

fn shape_matches(category: HandCategory, tiebreak: Tiebreak) -> bool {
    matches!(
        (category, tiebreak),
        (HandCategory::RoyalFlush, Tiebreak::Suit(_))
            | (HandCategory::StraightFlush, Tiebreak::TopRank(_))
            | (HandCategory::FourOfAKind, Tiebreak::FourOfAKind { .. })
            | (HandCategory::FullHouse, Tiebreak::FullHouse { .. })
            | (HandCategory::Flush, Tiebreak::FlushScore(_))
            | (HandCategory::Straight, Tiebreak::TopRank(_))
            | (HandCategory::ThreeOfAKind, Tiebreak::ThreeOfAKind { .. })
            | (HandCategory::TwoPair, Tiebreak::TwoPair { .. })
            | (HandCategory::Pair, Tiebreak::Pair { .. })
            | (HandCategory::HighCard, Tiebreak::HighCard(_))
    )
}

fuzz_target!(|input: Input| {
    let all: Vec<Card> = input.hole.iter().chain(&input.board).copied().collect();

    let result = match evaluate(&input.hole, &input.board) {
        Err(HoldemEvalError::DuplicateCard(c)) => {
            assert!(!distinct(&all));
            assert!(all.iter().filter(|x| **x == c).count() > 1);
            return;
        }
        Err(e) => panic!("unexpected error {e}"),
        Ok(result) => result,
    };
    assert!(distinct(&all));
    assert!(shape_matches(result.category(), result.tiebreak()), "{result:?}");

    // Same seven cards split differently.
    let mut rotated = all.clone();
    rotated.rotate_left(3);
    let again = evaluate(&rotated[..2], &rotated[2..]).unwrap();
    assert_eq!(result, again);

    let (expected, _) = rank_seven_exhaustive(&all);
    assert_eq!(expected, u8::from(result.category()), "{all:?}");

    // Showdown against a second holding on the same board.
    let other: Vec<Card> = input.other.iter().chain(&input.board).copied().collect();
    let everyone: Vec<Card> = all.iter().chain(&input.other).copied().collect();
    if !distinct(&everyone) {
        return;
    }
    let other_result = evaluate(&input.other, &input.board).unwrap();
    assert_eq!(
        rank_seven_exhaustive(&all).cmp(&rank_seven_exhaustive(&other)),
        result.cmp(&other_result),
        "{all:?} vs {other:?}"
    );
});
