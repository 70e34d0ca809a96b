//! The 8-card deck produced by the encoder.

use serde::{Deserialize, Serialize};

use crate::bits::BIT_LEN;
use crate::error::{DeckError, DeckResult};

/// Ordered sequence of exactly [`BIT_LEN`] identifiers; element `i` is one of
/// slot `i`'s two candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckSequence([String; BIT_LEN]);

impl DeckSequence {
    pub fn new(cards: [String; BIT_LEN]) -> Self {
        Self(cards)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> [String; BIT_LEN] {
        self.0
    }
}

impl TryFrom<Vec<String>> for DeckSequence {
    type Error = DeckError;

    fn try_from(cards: Vec<String>) -> DeckResult<Self> {
        let len = cards.len();
        <[String; BIT_LEN]>::try_from(cards)
            .map(Self)
            .map_err(|_| DeckError::MalformedInput(format!("deck must hold {BIT_LEN} cards, got {len}")))
    }
}

impl AsRef<[String]> for DeckSequence {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a DeckSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("2600000{i}")).collect()
    }

    #[test]
    fn try_from_exact_len() {
        let deck = DeckSequence::try_from(ids(8)).unwrap();
        assert_eq!(deck.as_slice().len(), 8);
        assert_eq!(deck.as_slice()[7], "26000007");
    }

    #[test]
    fn try_from_wrong_len() {
        assert!(matches!(DeckSequence::try_from(ids(7)), Err(DeckError::MalformedInput(_))));
        assert!(matches!(DeckSequence::try_from(ids(9)), Err(DeckError::MalformedInput(_))));
    }

    #[test]
    fn serializes_as_plain_list() {
        let deck = DeckSequence::try_from(ids(8)).unwrap();
        let v = serde_json::to_value(&deck).unwrap();
        assert_eq!(v.as_array().map(|a| a.len()), Some(8));
    }
}
