use std::fmt;

use crate::{
    state::price_history::PriceHistory, strategy::product_context::WithContext,
    types::order_book::OrderBook,
};

pub trait Strategy: WithContext + fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// `history` is the product's record before this tick's mid is added.
    fn fair_value(&self, book: &OrderBook, history: Option<&PriceHistory>, timestamp: i64) -> f64;
}
