use crate::core::{Card, Suit, Value};

/// Rank/suit statistics of a holding, built once per evaluation and
/// shared read only by every detector.
///
/// - `suit_masks[suit - 1]` has bit `rank - 2` set for every card held in
///   that suit.
/// - `rank_counts[rank - 2]` is how many cards of that rank are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct HandStats {
    suit_masks: [u16; 4],
    rank_counts: [u8; 13],
}

impl HandStats {
    /// Bucket the given cards.
    pub(crate) fn from_cards<'a, I>(cards: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut stats = Self::default();
        for c in cards {
            stats.suit_masks[usize::from(c.suit.index() - 1)] |= c.rank_mask();
            stats.rank_counts[usize::from(c.rank() - 2)] += 1;
        }
        stats
    }

    /// The 13 bit rank occupancy of one suit.
    pub(crate) fn suit_mask(&self, suit: Suit) -> u16 {
        self.suit_masks[usize::from(suit.index() - 1)]
    }

    /// Rank occupancy across all suits.
    pub(crate) fn rank_mask(&self) -> u16 {
        self.suit_masks.iter().fold(0, |acc, m| acc | m)
    }

    /// How many cards of this value are held.
    pub(crate) fn count(&self, value: Value) -> u8 {
        self.rank_counts[usize::from(value.rank() - 2)]
    }

    /// Values held at least `min` times, highest first.
    pub(crate) fn values_with_count(&self, min: u8) -> impl Iterator<Item = Value> + '_ {
        Value::values()
            .into_iter()
            .rev()
            .filter(move |v| self.count(*v) >= min)
    }

    /// The `N` highest cards left after dropping every card of the
    /// `excluded` values, as ranks in descending order.
    ///
    /// Works on a private copy of the counts. Returns None when fewer
    /// than `N` cards remain.
    pub(crate) fn kickers<const N: usize>(&self, excluded: &[Value]) -> Option<[Value; N]> {
        let mut scratch = self.rank_counts;
        for v in excluded {
            scratch[usize::from(v.rank() - 2)] = 0;
        }

        let mut remaining = Value::values().into_iter().rev().flat_map(|v| {
            let count = scratch[usize::from(v.rank() - 2)];
            std::iter::repeat_n(v, usize::from(count))
        });
        let mut out = [Value::Two; N];
        for slot in out.iter_mut() {
            *slot = remaining.next()?;
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(s: &str) -> HandStats {
        HandStats::from_cards(&Card::parse_many(s).unwrap())
    }

    #[test]
    fn test_buckets() {
        let s = stats("7s7d5h5s2dKh9s");
        assert_eq!(2, s.count(Value::Seven));
        assert_eq!(2, s.count(Value::Five));
        assert_eq!(1, s.count(Value::King));
        assert_eq!(0, s.count(Value::Ace));

        assert_eq!(
            Value::Seven.rank_mask() | Value::Five.rank_mask() | Value::Nine.rank_mask(),
            s.suit_mask(Suit::Spade)
        );
        assert_eq!(
            Value::Five.rank_mask() | Value::King.rank_mask(),
            s.suit_mask(Suit::Heart)
        );
        assert_eq!(0, s.suit_mask(Suit::Club));
    }

    #[test]
    fn test_rank_mask_is_union() {
        let s = stats("AsAhAd2c3c");
        assert_eq!(
            Value::Ace.rank_mask() | Value::Two.rank_mask() | Value::Three.rank_mask(),
            s.rank_mask()
        );
    }

    #[test]
    fn test_values_with_count() {
        let s = stats("KsKdKh9s9d2c2h");
        let trips: Vec<Value> = s.values_with_count(3).collect();
        assert_eq!(vec![Value::King], trips);
        let pairs: Vec<Value> = s.values_with_count(2).collect();
        assert_eq!(vec![Value::King, Value::Nine, Value::Two], pairs);
    }

    #[test]
    fn test_kickers_leave_stats_alone() {
        let s = stats("8s8d8hKcQs4d2c");
        let before = s;
        let k: Option<[Value; 2]> = s.kickers(&[Value::Eight]);
        assert_eq!(Some([Value::King, Value::Queen]), k);
        assert_eq!(before, s);
        assert_eq!(3, s.count(Value::Eight));
    }

    #[test]
    fn test_kickers_count_duplicates() {
        let s = stats("AsAdKsKdQsQd2c");
        let k: Option<[Value; 3]> = s.kickers(&[Value::Ace]);
        assert_eq!(Some([Value::King, Value::King, Value::Queen]), k);
    }

    #[test]
    fn test_kickers_run_out_of_cards() {
        let s = stats("AsKd");
        assert_eq!(None, s.kickers::<5>(&[]));
        assert_eq!(Some([Value::Ace, Value::King]), s.kickers::<2>(&[]));
        assert_eq!(None, s.kickers::<2>(&[Value::Ace]));
        assert_eq!(None, HandStats::default().kickers::<1>(&[]));
    }
}
