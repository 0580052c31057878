use crate::{
    state::price_history::PriceHistory,
    strategy::{
        product_context::{ProductContext, WithContext},
        strategy::Strategy,
        strategy_helpers::StrategyHelpers,
    },
    types::order_book::OrderBook,
};

pub const DEFAULT_FAIR_VALUE: f64 = 10.0;

/// Prices a stable product at the midpoint of its live book.
#[derive(Debug, Clone)]
pub struct MidpointStrategy {
    ctx: ProductContext,
}

impl MidpointStrategy {
    pub fn new(product: &str, default_fair_value: f64) -> Self {
        Self {
            ctx: ProductContext::new(product, default_fair_value),
        }
    }

    pub fn for_product(product: &str) -> Self {
        Self::new(product, DEFAULT_FAIR_VALUE)
    }
}

impl WithContext for MidpointStrategy {
    fn ctx(&self) -> &ProductContext {
        &self.ctx
    }
}

impl Strategy for MidpointStrategy {
    fn name(&self) -> &'static str {
        "midpoint"
    }

    fn fair_value(&self, book: &OrderBook, _history: Option<&PriceHistory>, _timestamp: i64) -> f64 {
        self.book_fair_value(book)
    }
}
