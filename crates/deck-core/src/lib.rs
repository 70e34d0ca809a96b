//! # deck-core
//!
//! Core crate for the deckcode system, providing:
//!
//! - **Types** (`types`): direction, ticker, order and deck structs
//! - **Symbol table** (`table`): the one authoritative ticker/slot table
//! - **Bit helpers** (`bits`): fixed-width binary fields and [`BitString`]
//! - **Configuration** (`config`): JSON config deserialization
//! - **Error types** (`error`): domain-specific `DeckError` via thiserror
//! - **Logging** (`logging`): tracing-based structured logging

pub mod bits;
pub mod config;
pub mod error;
pub mod logging;
pub mod table;
pub mod types;

pub use bits::BitString;
pub use error::{DeckError, DeckResult};
pub use table::{Card, CardIndex, SYMBOL_TABLE, Slot, SymbolTable};

// Re-export types at crate root for convenience.
pub use types::*;
