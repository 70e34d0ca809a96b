//! Enumerations used throughout the deckcode system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Buy or sell direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    /// Anything that is not an explicit buy.
    #[default]
    Sell,
}

impl Direction {
    /// `true` maps to [`Direction::Buy`], anything else to [`Direction::Sell`].
    #[inline]
    pub fn from_buy_flag(buy: bool) -> Self {
        if buy { Self::Buy } else { Self::Sell }
    }

    #[inline]
    pub fn is_buy(self) -> bool {
        self == Self::Buy
    }

    /// Side string accepted by the trading service.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Ticker
// ---------------------------------------------------------------------------

/// The fixed set of tradable tickers.
///
/// The 2-bit code for each ticker lives in the symbol table, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Ticker {
    Aapl,
    Msft,
    Nvda,
    Googl,
}

impl Ticker {
    pub const ALL: [Ticker; 4] = [Self::Aapl, Self::Msft, Self::Nvda, Self::Googl];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aapl => "AAPL",
            Self::Msft => "MSFT",
            Self::Nvda => "NVDA",
            Self::Googl => "GOOGL",
        }
    }
}

impl FromStr for Ticker {
    type Err = DeckError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DeckError::UnknownTicker(s.to_string()))
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
