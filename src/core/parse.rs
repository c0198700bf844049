use std::str::FromStr;

use super::{Card, HoldemEvalError, Suit, Value};

/// Parse exactly one two character card such as `"As"` or `"Td"`.
impl FromStr for Card {
    type Err = HoldemEvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let card = next_card(&mut chars)?.ok_or(HoldemEvalError::TooFewChars)?;
        if chars.next().is_some() {
            return Err(HoldemEvalError::UnexpectedValueChar);
        }
        Ok(card)
    }
}

impl Card {
    /// Parse a run of concatenated cards.
    ///
    /// No de-duplication is done here; repeated cards are returned as
    /// given and left for the evaluator to reject.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_eval::core::{Card, Suit, Value};
    ///
    /// let cards = Card::parse_many("TsAs").unwrap();
    /// assert_eq!(
    ///     vec![
    ///         Card::new(Value::Ten, Suit::Spade),
    ///         Card::new(Value::Ace, Suit::Spade)
    ///     ],
    ///     cards
    /// );
    /// ```
    pub fn parse_many(cards_str: &str) -> Result<Vec<Card>, HoldemEvalError> {
        let mut chars = cards_str.chars();
        let mut cards = Vec::with_capacity(cards_str.len() / 2);

        // Keep looping until the input runs dry
        while let Some(card) = next_card(&mut chars)? {
            cards.push(card);
        }
        Ok(cards)
    }
}

/// Pull the next value/suit pair from the iterator.
/// Returns `Ok(None)` only when the input is exhausted cleanly.
fn next_card<I: Iterator<Item = char>>(chars: &mut I) -> Result<Option<Card>, HoldemEvalError> {
    let vc = match chars.next() {
        Some(c) => c,
        None => return Ok(None),
    };
    let value = Value::from_char(vc).ok_or(HoldemEvalError::UnexpectedValueChar)?;
    let suit = chars
        .next()
        .ok_or(HoldemEvalError::TooFewChars)
        .and_then(|sc| Suit::from_char(sc).ok_or(HoldemEvalError::UnexpectedSuitChar))?;
    Ok(Some(Card::new(value, suit)))
}
