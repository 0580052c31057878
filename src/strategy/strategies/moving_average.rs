use crate::{
    state::price_history::PriceHistory,
    strategy::{
        product_context::{ProductContext, WithContext},
        strategy::Strategy,
        strategy_helpers::StrategyHelpers,
        strategies::midpoint::DEFAULT_FAIR_VALUE,
    },
    types::order_book::OrderBook,
};

pub const DEFAULT_WINDOW: usize = 5;

/// Simple moving average over the last `window` recorded mids.
///
/// Until a full window has been recorded the live book midpoint is used
/// instead, so a cold start never trades off a partial average.
#[derive(Debug, Clone)]
pub struct MovingAverageStrategy {
    ctx: ProductContext,

    /// Number of recorded mids averaged.
    pub window: usize,
}

impl MovingAverageStrategy {
    pub fn new(product: &str, window: usize, default_fair_value: f64) -> Self {
        Self {
            ctx: ProductContext::new(product, default_fair_value),
            window,
        }
    }

    pub fn for_product(product: &str) -> Self {
        Self::new(product, DEFAULT_WINDOW, DEFAULT_FAIR_VALUE)
    }
}

impl WithContext for MovingAverageStrategy {
    fn ctx(&self) -> &ProductContext {
        &self.ctx
    }
}

impl Strategy for MovingAverageStrategy {
    fn name(&self) -> &'static str {
        "moving-average"
    }

    fn fair_value(&self, book: &OrderBook, history: Option<&PriceHistory>, _timestamp: i64) -> f64 {
        match Self::recent_prices(history, self.window) {
            Some(window) => window.iter().sum::<f64>() / window.len() as f64,
            None => self.book_fair_value(book),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(prices: &[f64]) -> PriceHistory {
        let mut history = PriceHistory::new();
        for (index, price) in prices.iter().enumerate() {
            history.push(index as i64 * 100, *price);
        }
        history
    }

    #[test]
    fn averages_exactly_the_last_window() {
        let strategy = MovingAverageStrategy::for_product("KELP");

        let full = history_of(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(strategy.fair_value(&OrderBook::new(), Some(&full), 500), 3.0);

        let longer = history_of(&[100.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(strategy.fair_value(&OrderBook::new(), Some(&longer), 600), 3.0);
    }

    #[test]
    fn short_history_uses_the_live_book() {
        let strategy = MovingAverageStrategy::for_product("KELP");
        let book = OrderBook::new().with_bid(2_028, 10).with_ask(2_032, -10);
        let short = history_of(&[1.0, 2.0, 3.0, 4.0]);

        assert_eq!(strategy.fair_value(&book, Some(&short), 400), 2_030.0);
        assert_eq!(strategy.fair_value(&book, None, 0), 2_030.0);
        assert_eq!(strategy.fair_value(&OrderBook::new(), None, 0), DEFAULT_FAIR_VALUE);
    }
}
