use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::price::Price;

/// Resting liquidity for one product at one tick.
///
/// Sell quantities are carried as negative numbers, buy quantities as
/// positive ones. Levels are keyed by price, so the best ask is the first
/// sell level and the best bid is the last buy level regardless of the order
/// the snapshot listed them in.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    #[serde(default)]
    pub buy_orders: BTreeMap<Price, i64>,
    #[serde(default)]
    pub sell_orders: BTreeMap<Price, i64>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bid(mut self, price: i64, quantity: i64) -> Self {
        self.buy_orders.insert(Price::new(price), quantity);
        self
    }

    pub fn with_ask(mut self, price: i64, quantity: i64) -> Self {
        self.sell_orders.insert(Price::new(price), quantity);
        self
    }

    /// Highest resting buy price and the quantity bid there.
    pub fn best_bid(&self) -> Option<(Price, i64)> {
        self.buy_orders
            .iter()
            .next_back()
            .map(|(price, quantity)| (*price, *quantity))
    }

    /// Lowest resting sell price and the (negative) quantity offered there.
    pub fn best_ask(&self) -> Option<(Price, i64)> {
        self.sell_orders
            .iter()
            .next()
            .map(|(price, quantity)| (*price, *quantity))
    }

    pub fn mid_price(&self) -> Option<f64> {
        let (bid, _) = self.best_bid()?;
        let (ask, _) = self.best_ask()?;
        Some(bid.midpoint(ask))
    }
}

impl fmt::Debug for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderBook")
            .field("best_bid", &self.best_bid())
            .field("mid_price", &self.mid_price())
            .field("best_ask", &self.best_ask())
            .field("bid_levels", &self.buy_orders.len())
            .field("ask_levels", &self.sell_orders.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_levels_ignore_snapshot_ordering() {
        let raw = r#"{
            "buy_orders": {"9": 4, "11": 2, "10": 7},
            "sell_orders": {"14": -1, "12": -3, "13": -5}
        }"#;
        let book: OrderBook = serde_json::from_str(raw).unwrap();

        assert_eq!(book.best_bid(), Some((Price::new(11), 2)));
        assert_eq!(book.best_ask(), Some((Price::new(12), -3)));
        assert_eq!(book.mid_price(), Some(11.5));
    }

    #[test]
    fn one_sided_book_has_no_mid() {
        let book = OrderBook::new().with_bid(10, 5);

        assert!(book.best_ask().is_none());
        assert!(book.mid_price().is_none());
    }

    #[test]
    fn missing_sides_deserialize_as_empty() {
        let book: OrderBook = serde_json::from_str("{}").unwrap();
        assert!(book.buy_orders.is_empty());
        assert!(book.sell_orders.is_empty());
        assert!(book.best_bid().is_none());
    }
}
