//! # deck-codec
//!
//! Encodes a trade order into an 8-card deck and decodes it back.
//!
//! ```text
//! OrderRequest ──encode_to_bits──▶ BitString ──encode_to_deck──▶ DeckSequence
//! Order ◀──decode_bits_to_order── BitString ◀──decode_deck_to_bits── deck
//! ```
//!
//! Both directions read the single [`deck_core::SYMBOL_TABLE`].
//!
//! - [`encoder`]: order → bitstring → deck
//! - [`decoder`]: deck → bitstring → order, ordered or unordered
//! - [`wire`]: JSON request/response shapes for adapters

pub mod decoder;
pub mod encoder;
pub mod wire;

pub use decoder::{Decoded, Decoder, decode_bits_to_order, decode_deck_to_bits};
pub use encoder::{Encoded, Encoder, encode_to_bits, encode_to_deck, normalize_shares};

#[cfg(test)]
mod tests {
    use deck_core::bits::BitString;
    use deck_core::types::{Direction, Order, OrderRequest, Ticker};

    use super::*;

    #[test]
    fn every_order_round_trips() {
        for direction in [Direction::Buy, Direction::Sell] {
            for ticker in Ticker::ALL {
                for shares in 1..=32u8 {
                    let order = Order::new(direction, ticker, shares);
                    let bits = encode_to_bits(&OrderRequest::from(order)).unwrap();
                    let back = decode_bits_to_order(&bits.to_string()).unwrap();
                    assert_eq!(back, order, "bits {bits}");
                }
            }
        }
    }

    #[test]
    fn every_bitstring_round_trips_through_deck() {
        for value in 0..=u8::MAX {
            let bits = BitString::from_u8(value).to_string();
            let deck = encode_to_deck(&bits).unwrap();
            let back = decode_deck_to_bits(deck.as_slice()).unwrap();
            assert_eq!(back.to_string(), bits);
        }
    }

    #[test]
    fn full_pipeline_msft() {
        let req = OrderRequest {
            buy: true,
            ticker: "MSFT".into(),
            shares: 16.0,
        };
        let encoded = Encoder::new().encode(&req).unwrap();
        assert_eq!(encoded.bits.to_string(), "10101111");
        let decoded = Decoder::new().decode(encoded.deck.as_slice()).unwrap();
        assert_eq!(decoded.bits, encoded.bits);
        assert_eq!(decoded.order, Order::new(Direction::Buy, Ticker::Msft, 16));
    }
}
