//! Order → bitstring → deck.
//!
//! The encoder normalises an [`OrderRequest`] into the 8-bit layout described
//! in [`deck_core::bits`], then plays slot `i`'s candidate for bit `i`.
//! An unknown ticker fails with `DeckError::UnknownTicker`.

use deck_core::bits::{BIT_LEN, BitString, SHARES_WIDTH, TICKER_WIDTH, format_field};
use deck_core::error::DeckResult;
use deck_core::table::{Card, SymbolTable};
use deck_core::types::{DeckSequence, Direction, MAX_SHARES, MIN_SHARES, Order, OrderRequest, Ticker};
use serde::Serialize;
use tracing::{debug, warn};

/// Round `shares` to the nearest integer (ties to even) and clamp to
/// `[MIN_SHARES, MAX_SHARES]`. NaN clamps to the minimum.
#[inline]
pub fn normalize_shares(shares: f64) -> u8 {
    if shares.is_nan() {
        return MIN_SHARES;
    }
    shares
        .round_ties_even()
        .clamp(f64::from(MIN_SHARES), f64::from(MAX_SHARES)) as u8
}

/// Result of a full encode: the intermediate bitstring and the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encoded {
    pub bits: BitString,
    pub deck: DeckSequence,
}

/// Encoder bound to a symbol table.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'t> {
    table: &'t SymbolTable,
}

impl Encoder<'static> {
    /// Encoder over the process-wide [`SymbolTable::global`].
    pub fn new() -> Self {
        Self::with_table(SymbolTable::global())
    }
}

impl Default for Encoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Encoder<'t> {
    pub fn with_table(table: &'t SymbolTable) -> Self {
        Self { table }
    }

    /// Encode a client request. Fails when the ticker is not in the table.
    pub fn encode_to_bits(&self, req: &OrderRequest) -> DeckResult<BitString> {
        let ticker: Ticker = req.ticker.parse().inspect_err(|e| {
            warn!(ticker = %req.ticker, error = %e, "rejecting order");
        })?;
        let order = Order::new(Direction::from_buy_flag(req.buy), ticker, normalize_shares(req.shares));
        self.encode_order(&order)
    }

    /// Encode an already-normalised order.
    pub fn encode_order(&self, order: &Order) -> DeckResult<BitString> {
        let direction = u8::from(order.direction.is_buy());
        let code = self.table.ticker_code(order.ticker)?;
        let shares_field = order.shares.clamp(MIN_SHARES, MAX_SHARES) - 1;
        let bits = BitString::from_fields(direction, code, shares_field);

        debug!(
            direction = %order.direction,
            ticker = %order.ticker,
            ticker_bits = %format_field(code, TICKER_WIDTH),
            shares = order.shares,
            shares_bits = %format_field(shares_field, SHARES_WIDTH),
            %bits,
            "order encoded"
        );
        Ok(bits)
    }

    /// Map a textual bitstring onto a deck. Wrong length or a character
    /// other than `'0'`/`'1'` is rejected as malformed input.
    pub fn encode_to_deck(&self, bits: &str) -> DeckResult<DeckSequence> {
        let bits: BitString = bits.parse()?;
        Ok(self.deck_for(bits))
    }

    /// Cards played for each position of `bits`.
    pub fn cards_for(&self, bits: BitString) -> [&'t Card; BIT_LEN] {
        let slots = &self.table.slots;
        std::array::from_fn(|pos| slots[pos].card(bits.bit(pos)))
    }

    pub fn deck_for(&self, bits: BitString) -> DeckSequence {
        let cards = self.cards_for(bits);
        DeckSequence::new(cards.map(|c| c.id.to_string()))
    }

    /// Request → bitstring → deck in one call.
    pub fn encode(&self, req: &OrderRequest) -> DeckResult<Encoded> {
        let bits = self.encode_to_bits(req)?;
        let deck = self.deck_for(bits);
        debug!(%bits, deck = ?deck.as_slice(), "deck encoded");
        Ok(Encoded { bits, deck })
    }
}

/// [`Encoder::encode_to_bits`] against the global table.
pub fn encode_to_bits(req: &OrderRequest) -> DeckResult<BitString> {
    Encoder::new().encode_to_bits(req)
}

/// [`Encoder::encode_to_deck`] against the global table.
pub fn encode_to_deck(bits: &str) -> DeckResult<DeckSequence> {
    Encoder::new().encode_to_deck(bits)
}
