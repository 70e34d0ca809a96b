//! Deck → bitstring → order.
//!
//! Every identifier must match one of its slot's two candidates exactly. A
//! miss is reported as [`DeckError::UnrecognizedIdentifier`]; the decoder
//! never substitutes a default bitstring.

use deck_core::bits::{BIT_LEN, BitString, DIRECTION_POS, SHARES_POS, SHARES_WIDTH, TICKER_POS, TICKER_WIDTH};
use deck_core::error::{DeckError, DeckResult};
use deck_core::table::{CardIndex, SymbolTable};
use deck_core::types::{Direction, Order};
use serde::Serialize;
use tracing::{debug, warn};

/// Result of a full decode: the reconstructed bitstring and order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub bits: BitString,
    pub order: Order,
}

/// Decoder bound to a symbol table.
#[derive(Debug, Clone)]
pub struct Decoder<'t> {
    table: &'t SymbolTable,
    index: CardIndex,
}

impl Decoder<'static> {
    /// Decoder over the process-wide [`SymbolTable::global`].
    pub fn new() -> Self {
        Self::with_table(SymbolTable::global())
    }
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Decoder<'t> {
    pub fn with_table(table: &'t SymbolTable) -> Self {
        Self {
            table,
            index: CardIndex::build(table),
        }
    }

    /// Reverse-look-up each position against its slot.
    ///
    /// The deck must hold exactly [`BIT_LEN`] identifiers.
    pub fn decode_deck_to_bits<S: AsRef<str>>(&self, deck: &[S]) -> DeckResult<BitString> {
        check_len(deck.len())?;

        let mut value = 0u8;
        for (pos, (slot, id)) in self.table.slots.iter().zip(deck).enumerate() {
            let id: &str = id.as_ref();
            let Some(bit) = slot.bit_of(id) else {
                warn!(position = pos, identifier = id, "identifier matches neither slot candidate");
                return Err(DeckError::UnrecognizedIdentifier {
                    position: pos,
                    identifier: id.to_string(),
                });
            };
            value = (value << 1) | bit;
        }

        let bits = BitString::from_u8(value);
        debug!(%bits, "deck decoded");
        Ok(bits)
    }

    /// Decode a deck whose cards arrive in any order.
    ///
    /// Each card is placed into its slot through the reverse index, so every
    /// slot must be claimed exactly once. `position` in an
    /// [`DeckError::UnrecognizedIdentifier`] is the index in `cards`.
    pub fn decode_unordered<S: AsRef<str>>(&self, cards: &[S]) -> DeckResult<BitString> {
        check_len(cards.len())?;

        let mut placed: [Option<(usize, u8)>; BIT_LEN] = [None; BIT_LEN];
        for (input_pos, id) in cards.iter().enumerate() {
            let id: &str = id.as_ref();
            let (slot, bit) = self.index.locate(id).ok_or_else(|| {
                warn!(position = input_pos, identifier = id, "identifier not in symbol table");
                DeckError::UnrecognizedIdentifier {
                    position: input_pos,
                    identifier: id.to_string(),
                }
            })?;
            if let Some((first_pos, _)) = placed[slot] {
                let first: &str = cards[first_pos].as_ref();
                return Err(DeckError::DuplicateSlot {
                    slot,
                    first: first.to_string(),
                    second: id.to_string(),
                });
            }
            placed[slot] = Some((input_pos, bit));
        }

        // Eight cards, no slot claimed twice: every slot is filled.
        let value = placed
            .iter()
            .fold(0u8, |acc, p| (acc << 1) | p.map_or(0, |(_, bit)| bit));
        let bits = BitString::from_u8(value);
        debug!(%bits, "unordered deck decoded");
        Ok(bits)
    }

    /// Rebuild the order from a parsed bitstring.
    pub fn order_from_bits(&self, bits: BitString) -> DeckResult<Order> {
        let direction = Direction::from_buy_flag(bits.bit(DIRECTION_POS) == 1);
        let code = bits.field(TICKER_POS, TICKER_WIDTH);
        let ticker = self
            .table
            .ticker_for_code(code)
            .ok_or_else(|| DeckError::InvalidTable(format!("no ticker for code {code:02b}")))?;
        // The shares field stores shares - 1.
        let shares = bits.field(SHARES_POS, SHARES_WIDTH) + 1;

        let order = Order::new(direction, ticker, shares);
        debug!(%bits, direction = %order.direction, ticker = %order.ticker, shares = order.shares, "order decoded");
        Ok(order)
    }

    /// Parse a textual bitstring and rebuild the order.
    pub fn decode_bits_to_order(&self, bits: &str) -> DeckResult<Order> {
        self.order_from_bits(bits.parse()?)
    }

    /// Deck → bitstring → order in one call.
    pub fn decode<S: AsRef<str>>(&self, deck: &[S]) -> DeckResult<Decoded> {
        let bits = self.decode_deck_to_bits(deck)?;
        let order = self.order_from_bits(bits)?;
        Ok(Decoded { bits, order })
    }

    /// Like [`Decoder::decode`] but accepts the cards in any order.
    pub fn decode_any_order<S: AsRef<str>>(&self, cards: &[S]) -> DeckResult<Decoded> {
        let bits = self.decode_unordered(cards)?;
        let order = self.order_from_bits(bits)?;
        Ok(Decoded { bits, order })
    }
}

fn check_len(len: usize) -> DeckResult<()> {
    if len != BIT_LEN {
        return Err(DeckError::MalformedInput(format!("deck must hold {BIT_LEN} cards, got {len}")));
    }
    Ok(())
}

/// [`Decoder::decode_deck_to_bits`] against the global table.
pub fn decode_deck_to_bits<S: AsRef<str>>(deck: &[S]) -> DeckResult<BitString> {
    Decoder::new().decode_deck_to_bits(deck)
}

/// [`Decoder::decode_bits_to_order`] against the global table.
pub fn decode_bits_to_order(bits: &str) -> DeckResult<Order> {
    Decoder::new().decode_bits_to_order(bits)
}
