//! JSON request/response shapes for adapters sitting in front of the codec.
//!
//! Card ids arrive either as JSON strings (`"26000010"`) or, when copied out
//! of a game battle log, as integers (`26000010`). Both are accepted.

use deck_core::bits::BitString;
use deck_core::error::{DeckError, DeckResult};
use deck_core::table::Card;
use deck_core::types::{OrderRequest, Stock, TradeAction};
use serde::Serialize;

use crate::decoder::Decoded;
use crate::encoder::Encoded;

/// Parse raw request text. Text that is not JSON is malformed input, like
/// any other request the codec cannot use.
pub fn parse_request(raw: &str) -> DeckResult<serde_json::Value> {
    serde_json::from_str(raw).map_err(|e| DeckError::MalformedInput(format!("request is not valid JSON: {e}")))
}

/// Parse a JSON value (string or non-negative integer) as a card id.
#[inline]
pub fn parse_card_id(v: &serde_json::Value) -> Option<String> {
    if let Some(s) = v.as_str() {
        Some(s.trim().to_string())
    } else {
        v.as_u64().map(|n| n.to_string())
    }
}

/// Extract the card list from `{"deck": [...]}` or a bare `[...]`.
pub fn parse_deck_request(v: &serde_json::Value) -> DeckResult<Vec<String>> {
    let cards = v
        .get("deck")
        .unwrap_or(v)
        .as_array()
        .ok_or_else(|| DeckError::MalformedInput("expected {\"deck\": [...]} or a JSON array".into()))?;

    cards
        .iter()
        .enumerate()
        .map(|(pos, c)| {
            parse_card_id(c)
                .ok_or_else(|| DeckError::MalformedInput(format!("card at position {pos} is not an id: {c}")))
        })
        .collect()
}

/// Parse `{"buy": .., "shares": .., "ticker": ..}`.
pub fn parse_order_request(v: &serde_json::Value) -> DeckResult<OrderRequest> {
    serde_json::from_value(v.clone()).map_err(|e| DeckError::MalformedInput(format!("order request: {e}")))
}

/// Card id with its display name.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: &'static str,
    pub name: &'static str,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            name: card.name,
        }
    }
}

/// Response body for an encode.
#[derive(Debug, Clone, Serialize)]
pub struct EncodeResponse {
    pub binary_encoding: BitString,
    pub deck_encoding: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<CardView>>,
}

impl EncodeResponse {
    pub fn new(encoded: Encoded, cards: Option<Vec<CardView>>) -> Self {
        Self {
            binary_encoding: encoded.bits,
            deck_encoding: encoded.deck.into_inner().into(),
            cards,
        }
    }
}

/// Response body for a decode.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeResponse {
    pub binary_encoding: BitString,
    pub stock: Stock,
    /// Side string for the trading service (`"buy"` / `"sell"`).
    pub side: &'static str,
}

impl From<Decoded> for DecodeResponse {
    fn from(decoded: Decoded) -> Self {
        let Decoded { bits, order } = decoded;
        let side = order.direction.as_str();
        let TradeAction { stock } = TradeAction::from(order);
        Self {
            binary_encoding: bits,
            stock,
            side,
        }
    }
}

/// Response body for a rejected request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

impl From<&DeckError> for ErrorResponse {
    fn from(err: &DeckError) -> Self {
        Self {
            error: err.kind(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn card_id_string_or_number() {
        assert_eq!(parse_card_id(&json!("26000010")).as_deref(), Some("26000010"));
        assert_eq!(parse_card_id(&json!(26000010)).as_deref(), Some("26000010"));
        assert_eq!(parse_card_id(&json!(-1)), None);
        assert_eq!(parse_card_id(&json!(null)), None);
    }

    #[test]
    fn deck_request_envelope_and_bare() {
        let wrapped = parse_deck_request(&json!({"deck": ["28000001", 26000001]})).unwrap();
        assert_eq!(wrapped, vec!["28000001", "26000001"]);
        let bare = parse_deck_request(&json!([28000001])).unwrap();
        assert_eq!(bare, vec!["28000001"]);
    }

    #[test]
    fn deck_request_rejects_garbage() {
        assert!(matches!(parse_deck_request(&json!({"deck": "x"})), Err(DeckError::MalformedInput(_))));
        assert!(matches!(parse_deck_request(&json!({"deck": [true]})), Err(DeckError::MalformedInput(_))));
        assert!(matches!(parse_deck_request(&json!(3)), Err(DeckError::MalformedInput(_))));
    }

    #[test]
    fn order_request_parsing() {
        let req = parse_order_request(&json!({"buy": true, "shares": 16, "ticker": "MSFT"})).unwrap();
        assert!(req.buy);
        assert_eq!(req.shares, 16.0);
        assert!(parse_order_request(&json!({"buy": true})).is_err());
    }

    #[test]
    fn order_request_falsy_buy_encodes_as_sell() {
        for buy in [json!(null), json!(0), json!(""), json!(false)] {
            let req = parse_order_request(&json!({"buy": buy, "shares": 3, "ticker": "MSFT"})).unwrap();
            assert!(!req.buy);
            let bits = crate::Encoder::new().encode_to_bits(&req).unwrap();
            assert_eq!(bits.bit(0), 0);
            assert_eq!(bits.to_string(), "00100010");
        }
        let req = parse_order_request(&json!({"buy": 1, "shares": 3, "ticker": "MSFT"})).unwrap();
        assert!(req.buy);
    }

    #[test]
    fn raw_request_text() {
        assert_eq!(parse_request(r#"{"deck": []}"#).unwrap(), json!({"deck": []}));
        let err = parse_request("{\"buy\": tru").unwrap_err();
        assert!(matches!(err, DeckError::MalformedInput(_)));
        assert_eq!(ErrorResponse::from(&err).error, "malformed_input");
        assert!(matches!(parse_request(""), Err(DeckError::MalformedInput(_))));
    }

    #[test]
    fn decode_response_shape() {
        let decoded = crate::Decoder::new().decode_bits_to_order("10101111").unwrap();
        let resp = DecodeResponse::from(Decoded {
            bits: "10101111".parse().unwrap(),
            order: decoded,
        });
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            v,
            json!({
                "binary_encoding": "10101111",
                "stock": {"buy": true, "ticker": "MSFT", "shares": 16},
                "side": "buy"
            })
        );
    }

    #[test]
    fn error_response_kind() {
        let resp = ErrorResponse::from(&DeckError::UnknownTicker("TSLA".into()));
        assert_eq!(resp.error, "unknown_ticker");
    }
}
