use tracing::trace;

use crate::{
    state::price_history::PriceHistory, strategy::product_context::WithContext,
    types::order_book::OrderBook,
};

pub trait StrategyHelpers: WithContext {
    /// Best bid and ask, treating a side quoted at price 0 as empty.
    fn best_bid_ask(book: &OrderBook) -> Option<(f64, f64)> {
        let best_bid = book.best_bid()?.0.as_f64();
        let best_ask = book.best_ask()?.0.as_f64();
        (best_bid != 0.0 && best_ask != 0.0).then_some((best_bid, best_ask))
    }

    /// Midpoint of the live book, or the product's default when a side is empty.
    fn book_fair_value(&self, book: &OrderBook) -> f64 {
        match Self::best_bid_ask(book) {
            Some((best_bid, best_ask)) => (best_bid + best_ask) / 2.0,
            None => {
                trace!(
                    product = self.ctx().product(),
                    "book cannot price product; using default fair value"
                );
                self.ctx().default_fair_value()
            }
        }
    }

    fn recent_prices(history: Option<&PriceHistory>, count: usize) -> Option<Vec<f64>> {
        history?.recent_prices(count)
    }
}

impl<T: WithContext> StrategyHelpers for T {}
