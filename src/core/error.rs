use thiserror::Error;

use super::Card;

/// This is the error type for the whole crate.
/// It uses `thiserror` to provide readable error messages.
#[derive(Error, Debug, Hash, PartialEq, Eq, Clone)]
pub enum HoldemEvalError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Rank {0} is outside of 2..=14")]
    InvalidRank(u8),
    #[error("Suit {0} is outside of 1..=4")]
    InvalidSuit(u8),
    #[error("Holdem needs exactly 2 hole cards and 5 board cards, got {hole} and {board}")]
    InvalidArity { hole: usize, board: usize },
    #[error("Card {0} appears more than once in the holding")]
    DuplicateCard(Card),
}
