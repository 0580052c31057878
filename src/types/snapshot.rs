use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{execution::order_action::Order, types::order_book::OrderBook};

/// Market snapshot delivered by the exchange harness once per tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub timestamp: i64,

    /// Blob returned on the previous tick; empty on the first one.
    #[serde(rename = "traderData", default)]
    pub trader_data: String,

    #[serde(default)]
    pub order_depths: BTreeMap<String, OrderBook>,

    /// Signed inventory per product. Products without an entry are flat.
    #[serde(default)]
    pub position: BTreeMap<String, i64>,
}

impl TickSnapshot {
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp,
            ..Self::default()
        }
    }

    pub fn with_trader_data(mut self, trader_data: impl Into<String>) -> Self {
        self.trader_data = trader_data.into();
        self
    }

    pub fn with_book(mut self, product: &str, book: OrderBook) -> Self {
        self.order_depths.insert(product.to_string(), book);
        self
    }

    pub fn with_position(mut self, product: &str, position: i64) -> Self {
        self.position.insert(product.to_string(), position);
        self
    }

    pub fn position(&self, product: &str) -> i64 {
        self.position.get(product).copied().unwrap_or(0)
    }
}

/// What the engine hands back to the harness for one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickOutcome {
    pub orders: BTreeMap<String, Vec<Order>>,

    /// Always zero: no conversion mechanism is modelled.
    pub conversions: i64,

    #[serde(rename = "traderData")]
    pub trader_data: String,
}

impl TickOutcome {
    pub fn orders_for(&self, product: &str) -> &[Order] {
        self.orders.get(product).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harness_snapshot_parses_with_defaults() {
        let raw = r#"{
            "timestamp": 300,
            "traderData": "",
            "order_depths": {
                "KELP": {"buy_orders": {"2028": 30}, "sell_orders": {"2032": -30}}
            }
        }"#;
        let snapshot: TickSnapshot = serde_json::from_str(raw).unwrap();

        assert_eq!(snapshot.timestamp, 300);
        assert_eq!(snapshot.position("KELP"), 0);
        assert_eq!(snapshot.order_depths["KELP"].mid_price(), Some(2030.0));
    }
}
