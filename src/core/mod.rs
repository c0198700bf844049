//! This is the core module. It exports the card model the
//! evaluator is built on.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Turning strings like `"TsAs"` into cards.
mod parse;

/// Crate wide error type.
mod error;
/// Export the error
pub use self::error::HoldemEvalError;
