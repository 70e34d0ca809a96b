//! Typed error definitions for the deckcode system.
//!
//! Every encode or decode failure is reported as a [`DeckError`]. Nothing in
//! the codec recovers from these internally: a caller either gets the exact
//! answer or one of these variants.

use thiserror::Error;

/// Domain-specific errors for the deckcode system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Ticker is not a member of the symbol table (encode-time).
    #[error("unknown ticker: {0:?}")]
    UnknownTicker(String),

    /// Identifier matches neither candidate of the slot at `position`.
    #[error("unrecognized identifier {identifier:?} at position {position}")]
    UnrecognizedIdentifier { position: usize, identifier: String },

    /// Bitstring of the wrong length or charset, or a deck of the wrong size.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Two cards of an unordered deck claim the same slot.
    #[error("slot {slot} filled twice: {first:?} and {second:?}")]
    DuplicateSlot {
        slot: usize,
        first: String,
        second: String,
    },

    /// The symbol table failed validation.
    #[error("invalid symbol table: {0}")]
    InvalidTable(String),
}

impl DeckError {
    /// Short machine-readable name of the error kind, used by adapters.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTicker(_) => "unknown_ticker",
            Self::UnrecognizedIdentifier { .. } => "unrecognized_identifier",
            Self::MalformedInput(_) => "malformed_input",
            Self::DuplicateSlot { .. } => "duplicate_slot",
            Self::InvalidTable(_) => "invalid_table",
        }
    }
}

pub type DeckResult<T> = Result<T, DeckError>;
