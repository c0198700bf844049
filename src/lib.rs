//! Texas Hold'em hand evaluation.
//!
//! Given two hole cards and five community cards this library puts the
//! holding in one of ten hand categories and produces a tiebreak key, so
//! any two holdings can be compared for a showdown. It works directly on
//! rank and suit bitmasks instead of trying all 21 five card subsets.
//!
//! ```
//! use holdem_eval::core::Card;
//! use holdem_eval::holdem::{HandCategory, evaluate};
//!
//! let hole = Card::parse_many("8s9s").unwrap();
//! let board = Card::parse_many("TsJsQs2h4d").unwrap();
//! let result = evaluate(&hole, &board).unwrap();
//! assert_eq!(HandCategory::StraightFlush, result.category());
//! ```

/// Cards, values, suits and the crate error type.
pub mod core;
/// Allow all the holdem evaluation code to be used externally.
pub mod holdem;
