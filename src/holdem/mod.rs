//! Seven card Texas Hold'em hand evaluation.
//!
//! [`evaluate`] takes 2 hole cards and 5 board cards and returns an
//! [`EvaluationResult`]: the [`HandCategory`] of the best five card hand
//! and a [`Tiebreak`] ordering it within that category. Results compare
//! with the usual poker rules, so a showdown is just a comparison.

/// Hand categories and tiebreak keys.
mod category;
/// Export the category, tiebreak and flush packing.
pub use self::category::{HandCategory, Tiebreak, flush_score};

/// Rank and suit bucketing shared by every detector.
mod stats;

/// The category detectors, strongest first.
mod detect;
pub use self::detect::best_straight;

/// Entry point and comparison.
mod eval;
/// Export `evaluate` and friends.
pub use self::eval::{
    BOARD_CARDS, Board, EvaluationResult, HOLE_CARDS, Holding, compare_holdings, evaluate,
};
