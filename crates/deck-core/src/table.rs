//! The authoritative symbol table shared by the encoder and the decoder.
//!
//! One static value, [`SYMBOL_TABLE`], holds both lookup tables:
//!
//! - ticker → 2-bit code (total over the four codes)
//! - 8 slots, each a pair of cards keyed by bit value
//!
//! Card identifiers are the game's 8-digit card ids (`26xxxxxx` troops,
//! `27xxxxxx` buildings, `28xxxxxx` spells). They are opaque to the codec
//! beyond identity and slot position.

use ahash::AHashMap;
use serde::Serialize;
use tracing::debug;

use crate::bits::{BIT_LEN, TICKER_WIDTH};
use crate::error::{DeckError, DeckResult};
use crate::types::Ticker;

/// Number of digits in a card identifier.
pub const CARD_ID_LEN: usize = 8;

/// A card identifier with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    pub id: &'static str,
    pub name: &'static str,
}

impl Card {
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }
}

/// One deck position: `candidates[b]` is played when the bit is `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub candidates: [Card; 2],
}

impl Slot {
    pub const fn new(zero: Card, one: Card) -> Self {
        Self { candidates: [zero, one] }
    }

    /// Card for bit value `bit` (0 or 1).
    #[inline]
    pub fn card(&self, bit: u8) -> &Card {
        &self.candidates[usize::from(bit & 1)]
    }

    /// Bit value whose candidate has identifier `id`.
    #[inline]
    pub fn bit_of(&self, id: &str) -> Option<u8> {
        self.candidates.iter().position(|c| c.id == id).map(|b| b as u8)
    }
}

/// Ticker codes plus slot pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolTable {
    pub tickers: [(Ticker, u8); 4],
    pub slots: [Slot; BIT_LEN],
}

/// The table used by every encode and decode path in the process.
pub static SYMBOL_TABLE: SymbolTable = SymbolTable {
    tickers: [
        (Ticker::Aapl, 0b00),
        (Ticker::Msft, 0b01),
        (Ticker::Nvda, 0b10),
        (Ticker::Googl, 0b11),
    ],
    slots: [
        Slot::new(Card::new("28000001", "Arrows"), Card::new("26000005", "Minions")),
        Slot::new(Card::new("26000001", "Archers"), Card::new("26000000", "Knight")),
        Slot::new(Card::new("28000000", "Fireball"), Card::new("26000018", "Mini P.E.K.K.A")),
        Slot::new(Card::new("26000014", "Musketeer"), Card::new("26000003", "Giant")),
        Slot::new(Card::new("26000019", "Spear Goblins"), Card::new("26000002", "Goblins")),
        Slot::new(Card::new("27000012", "Goblin Cage"), Card::new("27000001", "Goblin Hut")),
        Slot::new(Card::new("26000013", "Bomber"), Card::new("26000010", "Skeletons")),
        Slot::new(Card::new("27000009", "Tombstone"), Card::new("26000011", "Valkyrie")),
    ],
};

impl SymbolTable {
    #[inline]
    pub fn global() -> &'static SymbolTable {
        &SYMBOL_TABLE
    }

    /// 2-bit code for `ticker`.
    pub fn ticker_code(&self, ticker: Ticker) -> DeckResult<u8> {
        self.tickers
            .iter()
            .find(|(t, _)| *t == ticker)
            .map(|(_, code)| *code)
            .ok_or_else(|| DeckError::UnknownTicker(ticker.to_string()))
    }

    /// Reverse scan: the ticker whose code is `code`.
    pub fn ticker_for_code(&self, code: u8) -> Option<Ticker> {
        self.tickers.iter().find(|(_, c)| *c == code).map(|(t, _)| *t)
    }

    /// Display name for a card identifier, if it appears anywhere in the table.
    pub fn card_name(&self, id: &str) -> Option<&'static str> {
        self.slots
            .iter()
            .flat_map(|s| s.candidates.iter())
            .find(|c| c.id == id)
            .map(|c| c.name)
    }

    /// Check the table is usable for a lossless round trip.
    ///
    /// Ticker codes must be unique, fit in [`TICKER_WIDTH`] bits and cover
    /// every code. Card ids must be [`CARD_ID_LEN`]-digit decimals, the two
    /// candidates of a slot must differ, and no id may appear twice anywhere
    /// in the table.
    pub fn validate(&self) -> DeckResult<()> {
        let code_space = 1usize << TICKER_WIDTH;
        let mut seen_codes = vec![false; code_space];
        for (idx, (ticker, code)) in self.tickers.iter().enumerate() {
            let code = usize::from(*code);
            if code >= code_space {
                return Err(DeckError::InvalidTable(format!("ticker {ticker} has out-of-range code {code}")));
            }
            if seen_codes[code] {
                return Err(DeckError::InvalidTable(format!("ticker {ticker} reuses code {code:02b}")));
            }
            if self.tickers[..idx].iter().any(|(t, _)| t == ticker) {
                return Err(DeckError::InvalidTable(format!("ticker {ticker} listed twice")));
            }
            seen_codes[code] = true;
        }

        let mut seen_ids: AHashMap<&str, usize> = AHashMap::with_capacity(BIT_LEN * 2);
        for (pos, slot) in self.slots.iter().enumerate() {
            let [zero, one] = &slot.candidates;
            if zero.id == one.id {
                return Err(DeckError::InvalidTable(format!(
                    "slot {pos} has identical candidates {:?}",
                    zero.id
                )));
            }
            for card in &slot.candidates {
                if card.id.len() != CARD_ID_LEN || !card.id.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(DeckError::InvalidTable(format!(
                        "slot {pos} card {:?} is not a {CARD_ID_LEN}-digit card id",
                        card.id
                    )));
                }
                if let Some(prev) = seen_ids.insert(card.id, pos) {
                    return Err(DeckError::InvalidTable(format!(
                        "card {:?} appears in slots {prev} and {pos}",
                        card.id
                    )));
                }
            }
        }

        debug!(tickers = self.tickers.len(), slots = self.slots.len(), "symbol table validated");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// CardIndex: identifier → (slot, bit)
// ---------------------------------------------------------------------------

/// Reverse index from card identifier to its slot position and bit value.
///
/// Only meaningful for a table that passed [`SymbolTable::validate`], where
/// every identifier is unique.
#[derive(Debug, Clone)]
pub struct CardIndex {
    by_id: AHashMap<&'static str, (usize, u8)>,
}

impl CardIndex {
    pub fn build(table: &SymbolTable) -> Self {
        let mut by_id = AHashMap::with_capacity(BIT_LEN * 2);
        for (pos, slot) in table.slots.iter().enumerate() {
            for (bit, card) in slot.candidates.iter().enumerate() {
                by_id.insert(card.id, (pos, bit as u8));
            }
        }
        Self { by_id }
    }

    /// Slot position and bit value for `id`.
    #[inline]
    pub fn locate(&self, id: &str) -> Option<(usize, u8)> {
        self.by_id.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_table_is_valid() {
        SymbolTable::global().validate().unwrap();
    }

    #[test]
    fn ticker_codes_round_trip() {
        let table = SymbolTable::global();
        for ticker in Ticker::ALL {
            let code = table.ticker_code(ticker).unwrap();
            assert_eq!(table.ticker_for_code(code), Some(ticker));
        }
        assert_eq!(table.ticker_code(Ticker::Msft).unwrap(), 0b01);
        assert_eq!(table.ticker_code(Ticker::Googl).unwrap(), 0b11);
    }

    #[test]
    fn slot_lookup() {
        let slot = &SymbolTable::global().slots[0];
        assert_eq!(slot.card(0).name, "Arrows");
        assert_eq!(slot.card(1).id, "26000005");
        assert_eq!(slot.bit_of("26000005"), Some(1));
        assert_eq!(slot.bit_of("26000001"), None);
    }

    #[test]
    fn card_names() {
        let table = SymbolTable::global();
        assert_eq!(table.card_name("26000011"), Some("Valkyrie"));
        assert_eq!(table.card_name("00000000"), None);
    }

    #[test]
    fn rejects_code_string_placeholder() {
        let mut table = SYMBOL_TABLE.clone();
        table.slots[3] = Slot::new(Card::new("26000014", "Musketeer"), Card::new("01", "placeholder"));
        assert!(matches!(table.validate(), Err(DeckError::InvalidTable(_))));
    }

    #[test]
    fn rejects_identical_candidates() {
        let mut table = SYMBOL_TABLE.clone();
        table.slots[2] = Slot::new(Card::new("28000000", "Fireball"), Card::new("28000000", "Fireball"));
        assert!(matches!(table.validate(), Err(DeckError::InvalidTable(_))));
    }

    #[test]
    fn rejects_card_reused_across_slots() {
        let mut table = SYMBOL_TABLE.clone();
        table.slots[7] = Slot::new(Card::new("28000001", "Arrows"), Card::new("26000011", "Valkyrie"));
        assert!(matches!(table.validate(), Err(DeckError::InvalidTable(_))));
    }

    #[test]
    fn rejects_duplicate_ticker_code() {
        let mut table = SYMBOL_TABLE.clone();
        table.tickers[3] = (Ticker::Googl, 0b10);
        assert!(matches!(table.validate(), Err(DeckError::InvalidTable(_))));
    }

    #[test]
    fn index_locates_every_card() {
        let table = SymbolTable::global();
        let index = CardIndex::build(table);
        assert_eq!(index.by_id.len(), BIT_LEN * 2);
        for (pos, slot) in table.slots.iter().enumerate() {
            assert_eq!(index.locate(slot.card(0).id), Some((pos, 0)));
            assert_eq!(index.locate(slot.card(1).id), Some((pos, 1)));
        }
        assert_eq!(index.locate("99999999"), None);
    }
}
