use std::cmp::Ordering;
use std::fmt;

use tracing::event;

use super::category::{HandCategory, Tiebreak};
use super::detect::DETECTORS;
use super::stats::HandStats;
use crate::core::{Card, HoldemEvalError};

/// Number of private cards a holdem player holds.
pub const HOLE_CARDS: usize = 2;
/// Number of community cards on a complete board.
pub const BOARD_CARDS: usize = 5;

/// The two private cards of one player.
pub type Holding = [Card; HOLE_CARDS];
/// The five community cards.
pub type Board = [Card; BOARD_CARDS];

/// The category a seven card holding falls in and the key that orders
/// it against other holdings of that category.
///
/// Ordering compares the category first and then the tiebreak, so the
/// result can be used directly as a sort key. Equal results are a split.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationResult {
    category: HandCategory,
    tiebreak: Tiebreak,
}

impl EvaluationResult {
    pub(crate) fn new(category: HandCategory, tiebreak: Tiebreak) -> Self {
        Self { category, tiebreak }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    pub fn tiebreak(&self) -> Tiebreak {
        self.tiebreak
    }

    /// Showdown comparison. `Greater` means `self` wins, `Equal` is a
    /// split. Same ordering as `Ord::cmp`.
    pub fn compare(&self, other: &EvaluationResult) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.tiebreak)
    }
}

/// Classify the best five card hand out of two hole cards and five
/// board cards.
///
/// Fails with `InvalidArity` when there aren't exactly 2 hole cards and 5
/// board cards, and with `DuplicateCard` when a card shows up twice
/// among the seven. Any other input gets exactly one category.
///
/// # Examples
///
/// ```
/// use holdem_eval::core::Card;
/// use holdem_eval::holdem::{HandCategory, Tiebreak, evaluate};
/// use holdem_eval::core::Value;
///
/// let hole = Card::parse_many("AsAd").unwrap();
/// let board = Card::parse_many("AhKcKd7s6s").unwrap();
/// let result = evaluate(&hole, &board).unwrap();
///
/// assert_eq!(HandCategory::FullHouse, result.category());
/// assert_eq!(
///     Tiebreak::FullHouse {
///         trips: Value::Ace,
///         pair: Value::King
///     },
///     result.tiebreak()
/// );
/// ```
pub fn evaluate(hole: &[Card], board: &[Card]) -> Result<EvaluationResult, HoldemEvalError> {
    if hole.len() != HOLE_CARDS || board.len() != BOARD_CARDS {
        event!(
            tracing::Level::DEBUG,
            hole = hole.len(),
            board = board.len(),
            "Rejecting holding with wrong number of cards"
        );
        return Err(HoldemEvalError::InvalidArity {
            hole: hole.len(),
            board: board.len(),
        });
    }

    check_distinct(hole.iter().chain(board))?;

    let stats = HandStats::from_cards(hole.iter().chain(board));
    // Every detector passing needs fewer than five cards, which the arity
    // check has already ruled out.
    let result = classify(&stats).ok_or(HoldemEvalError::InvalidArity {
        hole: hole.len(),
        board: board.len(),
    })?;
    event!(
        tracing::Level::TRACE,
        category = ?result.category,
        tiebreak = ?result.tiebreak,
        "Classified holding"
    );
    Ok(result)
}

/// Run the detectors strongest first; the first one to match wins.
/// High card is the last step and matches any five cards.
fn classify(stats: &HandStats) -> Option<EvaluationResult> {
    DETECTORS.iter().find_map(|(category, detect)| {
        detect(stats).map(|tiebreak| EvaluationResult::new(*category, tiebreak))
    })
}

/// Reject a card that appears more than once.
fn check_distinct<'a, I>(cards: I) -> Result<(), HoldemEvalError>
where
    I: IntoIterator<Item = &'a Card>,
{
    // Card ids are below 128.
    let mut seen: u128 = 0;
    for c in cards {
        let bit = 1u128 << c.index();
        if seen & bit != 0 {
            event!(tracing::Level::DEBUG, card = %c, "Rejecting duplicate card");
            return Err(HoldemEvalError::DuplicateCard(*c));
        }
        seen |= bit;
    }
    Ok(())
}

/// Heads up showdown: evaluate two holdings over the same board and say
/// which one wins. `Greater` means the first holding wins, `Equal` is a
/// split pot.
///
/// Both holdings are checked together with the board for duplicate cards.
///
/// ```
/// use std::cmp::Ordering;
/// use holdem_eval::core::Card;
/// use holdem_eval::holdem::compare_holdings;
///
/// let board = Card::parse_many("5h5s2dKh9s").unwrap();
/// let sevens = Card::parse_many("7s7d").unwrap();
/// let ace_king = Card::parse_many("AcKd").unwrap();
///
/// assert_eq!(
///     Ordering::Less,
///     compare_holdings(&sevens, &ace_king, &board).unwrap()
/// );
/// ```
pub fn compare_holdings(
    first: &[Card],
    second: &[Card],
    board: &[Card],
) -> Result<Ordering, HoldemEvalError> {
    let a = evaluate(first, board)?;
    let b = evaluate(second, board)?;
    check_distinct(first.iter().chain(second))?;

    let ordering = a.compare(&b);
    event!(
        tracing::Level::TRACE,
        first = %a,
        second = %b,
        ?ordering,
        "Compared holdings"
    );
    Ok(ordering)
}
