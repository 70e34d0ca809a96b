//! Fixed-width binary fields and the 8-bit [`BitString`].
//!
//! Layout, leftmost character first:
//!
//! ```text
//!  pos:  0 | 1 2    | 3 4 5 6 7
//!        D | ticker | shares - 1
//! ```
//!
//! Position 0 is the most significant bit of the underlying `u8`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// Number of positions in a bitstring (and slots in a deck).
pub const BIT_LEN: usize = 8;

/// Position of the direction bit.
pub const DIRECTION_POS: usize = 0;
/// First position of the ticker code.
pub const TICKER_POS: usize = 1;
/// Width of the ticker code.
pub const TICKER_WIDTH: usize = 2;
/// First position of the shares field.
pub const SHARES_POS: usize = 3;
/// Width of the shares field.
pub const SHARES_WIDTH: usize = 5;

/// Format `value` as `width` binary digits, MSB first, zero-padded.
///
/// Bits above `width` are discarded.
#[inline]
pub fn format_field(value: u8, width: usize) -> String {
    let masked = u32::from(value) & ((1u32 << width) - 1);
    format!("{masked:0width$b}")
}

/// Parse a run of `'0'`/`'1'` characters as an unsigned binary number.
pub fn parse_field(s: &str) -> DeckResult<u8> {
    if s.is_empty() || s.len() > BIT_LEN {
        return Err(DeckError::MalformedInput(format!(
            "binary field must be 1..={BIT_LEN} digits, got {:?}",
            s
        )));
    }
    s.bytes().try_fold(0u8, |acc, b| match b {
        b'0' => Ok(acc << 1),
        b'1' => Ok((acc << 1) | 1),
        _ => Err(DeckError::MalformedInput(format!(
            "non-binary character {:?} in {:?}",
            b as char, s
        ))),
    })
}

/// An exactly-8-position binary string.
///
/// Always valid once constructed; parsing from text is the only fallible
/// entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitString(u8);

impl BitString {
    /// Build from the raw byte; position 0 is bit 7.
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        Self(value)
    }

    /// Assemble the three fields of an order encoding.
    pub fn from_fields(direction: u8, ticker_code: u8, shares_field: u8) -> Self {
        let value = ((direction & 0b1) << 7) | ((ticker_code & 0b11) << 5) | (shares_field & 0b1_1111);
        Self(value)
    }

    /// Bit value (0 or 1) at `pos`; `pos` must be below [`BIT_LEN`].
    #[inline]
    pub fn bit(self, pos: usize) -> u8 {
        debug_assert!(pos < BIT_LEN);
        (self.0 >> (BIT_LEN - 1 - pos)) & 1
    }

    /// Unsigned value of `width` positions starting at `pos`.
    pub fn field(self, pos: usize, width: usize) -> u8 {
        debug_assert!(pos + width <= BIT_LEN);
        let shift = BIT_LEN - pos - width;
        ((u32::from(self.0) >> shift) & ((1u32 << width) - 1)) as u8
    }
}

impl FromStr for BitString {
    type Err = DeckError;

    fn from_str(s: &str) -> DeckResult<Self> {
        if s.len() != BIT_LEN {
            return Err(DeckError::MalformedInput(format!(
                "bitstring must be {BIT_LEN} characters, got {} ({:?})",
                s.chars().count(),
                s
            )));
        }
        parse_field(s).map(Self)
    }
}

impl TryFrom<String> for BitString {
    type Error = DeckError;

    fn try_from(s: String) -> DeckResult<Self> {
        s.parse()
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> Self {
        bits.to_string()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.0)
    }
}
