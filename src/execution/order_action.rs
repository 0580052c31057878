use serde::{Deserialize, Serialize};

use crate::types::price::Price;

/// Order handed back to the exchange. Positive quantity buys, negative sells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub product: String,
    pub price: Price,
    pub quantity: i64,
}

impl Order {
    pub fn buy(product: &str, price: Price, quantity: i64) -> Self {
        Self {
            product: product.to_string(),
            price,
            quantity: quantity.saturating_abs(),
        }
    }

    pub fn sell(product: &str, price: Price, quantity: i64) -> Self {
        Self {
            product: product.to_string(),
            price,
            quantity: -quantity.saturating_abs(),
        }
    }
}
