//! Trading-related data structures: the inbound order request, the
//! normalised order, and the trade action envelope handed downstream.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::enums::{Direction, Ticker};

/// Smallest encodable share count.
pub const MIN_SHARES: u8 = 1;
/// Largest encodable share count (5-bit field stores `shares - 1`).
pub const MAX_SHARES: u8 = 32;

// ---------------------------------------------------------------------------
// Order request (adapter → encoder)
// ---------------------------------------------------------------------------

/// An order as supplied by a client, before normalisation.
///
/// Wire form: `{"buy": true, "shares": 16, "ticker": "MSFT"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Missing or any falsy JSON value (`null`, `false`, `0`, `""`, `[]`,
    /// `{}`) means sell.
    #[serde(default, deserialize_with = "truthy")]
    pub buy: bool,
    /// Free-form ticker; must resolve to a [`Ticker`] for encoding to succeed.
    pub ticker: String,
    /// Requested share count; rounded and clamped to `[1, 32]` when encoded.
    pub shares: f64,
}

/// JSON truthiness: only `null`, `false`, zero, and empty strings, arrays
/// or objects are false.
fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}

impl From<Order> for OrderRequest {
    fn from(order: Order) -> Self {
        Self {
            buy: order.direction.is_buy(),
            ticker: order.ticker.as_str().to_string(),
            shares: f64::from(order.shares),
        }
    }
}

// ---------------------------------------------------------------------------
// Order (decoder → adapter)
// ---------------------------------------------------------------------------

/// A normalised order: every field is representable in the 8-bit encoding.
///
/// Not `Deserialize`: inbound orders arrive as [`OrderRequest`] and are
/// built through [`Order::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Order {
    pub direction: Direction,
    pub ticker: Ticker,
    /// Always within `[MIN_SHARES, MAX_SHARES]`.
    pub shares: u8,
}

impl Order {
    /// Build an order, clamping `shares` into the encodable range.
    pub fn new(direction: Direction, ticker: Ticker, shares: u8) -> Self {
        Self {
            direction,
            ticker,
            shares: shares.clamp(MIN_SHARES, MAX_SHARES),
        }
    }
}

// ---------------------------------------------------------------------------
// Trade action (decoder → history/trading services)
// ---------------------------------------------------------------------------

/// Stock block of a [`TradeAction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub buy: bool,
    pub ticker: Ticker,
    pub shares: u8,
}

/// Decoded order in the envelope consumed by the history service,
/// `{"stock": {"buy": .., "ticker": .., "shares": ..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeAction {
    pub stock: Stock,
}

impl From<Order> for TradeAction {
    fn from(order: Order) -> Self {
        Self {
            stock: Stock {
                buy: order.direction.is_buy(),
                ticker: order.ticker,
                shares: order.shares,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_new_clamps() {
        assert_eq!(Order::new(Direction::Buy, Ticker::Aapl, 0).shares, 1);
        assert_eq!(Order::new(Direction::Buy, Ticker::Aapl, 200).shares, 32);
        assert_eq!(Order::new(Direction::Buy, Ticker::Aapl, 7).shares, 7);
    }

    #[test]
    fn request_missing_buy_is_sell() {
        let req: OrderRequest = serde_json::from_str(r#"{"ticker":"MSFT","shares":3}"#).unwrap();
        assert!(!req.buy);
        assert_eq!(req.shares, 3.0);
    }

    #[test]
    fn request_falsy_buy_is_sell() {
        for buy in [r#"null"#, r#"false"#, r#"0"#, r#"0.0"#, r#""""#, r#"[]"#, r#"{}"#] {
            let raw = format!(r#"{{"buy":{buy},"ticker":"MSFT","shares":3}}"#);
            let req: OrderRequest = serde_json::from_str(&raw).unwrap();
            assert!(!req.buy, "buy={buy}");
        }
    }

    #[test]
    fn request_truthy_buy_is_buy() {
        for buy in [r#"true"#, r#"1"#, r#"-2"#, r#"0.5"#, r#""yes""#, r#"[0]"#, r#"{"a":1}"#] {
            let raw = format!(r#"{{"buy":{buy},"ticker":"MSFT","shares":3}}"#);
            let req: OrderRequest = serde_json::from_str(&raw).unwrap();
            assert!(req.buy, "buy={buy}");
        }
    }

    #[test]
    fn order_serializes_normalised_fields() {
        let v = serde_json::to_value(Order::new(Direction::Buy, Ticker::Msft, 0)).unwrap();
        assert_eq!(v, serde_json::json!({"direction": "buy", "ticker": "MSFT", "shares": 1}));
    }

    #[test]
    fn request_from_order() {
        let req = OrderRequest::from(Order::new(Direction::Buy, Ticker::Nvda, 9));
        assert!(req.buy);
        assert_eq!(req.ticker, "NVDA");
        assert_eq!(req.shares, 9.0);
    }

    #[test]
    fn trade_action_wire_shape() {
        let action = TradeAction::from(Order::new(Direction::Sell, Ticker::Googl, 4));
        let v = serde_json::to_value(&action).unwrap();
        assert_eq!(v, serde_json::json!({"stock": {"buy": false, "ticker": "GOOGL", "shares": 4}}));
    }
}
