//! Core data types: direction and ticker enums, orders, and decks.
//!
//! Everything here is transient and constructed per request.

pub mod deck;
pub mod enums;
pub mod trading;

pub use deck::*;
pub use enums::*;
pub use trading::*;
