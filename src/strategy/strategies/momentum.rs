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

pub const DEFAULT_LOOKBACK: usize = 3;

pub const DEFAULT_BIAS: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trend {
    Rising,
    Falling,
    Flat,
}

/// Momentum detection:
/// - Strictly rising mids over the lookback bias fair value up
/// - Strictly falling mids bias it down
/// - Anything else (ties included) prices off the live book
#[derive(Debug, Clone)]
pub struct MomentumStrategy {
    ctx: ProductContext,

    /// Number of recorded mids that must move in one direction.
    pub lookback: usize,

    /// Fractional bias applied to the latest mid in the trend direction.
    pub bias: f64,
}

impl MomentumStrategy {
    pub fn new(product: &str, lookback: usize, bias: f64, default_fair_value: f64) -> Self {
        Self {
            ctx: ProductContext::new(product, default_fair_value),
            lookback,
            bias,
        }
    }

    pub fn for_product(product: &str) -> Self {
        Self::new(product, DEFAULT_LOOKBACK, DEFAULT_BIAS, DEFAULT_FAIR_VALUE)
    }

    fn trend(prices: &[f64]) -> Trend {
        if prices.windows(2).all(|pair| pair[1] > pair[0]) {
            Trend::Rising
        } else if prices.windows(2).all(|pair| pair[1] < pair[0]) {
            Trend::Falling
        } else {
            Trend::Flat
        }
    }
}

impl WithContext for MomentumStrategy {
    fn ctx(&self) -> &ProductContext {
        &self.ctx
    }
}

impl Strategy for MomentumStrategy {
    fn name(&self) -> &'static str {
        "momentum"
    }

    fn fair_value(&self, book: &OrderBook, history: Option<&PriceHistory>, _timestamp: i64) -> f64 {
        let Some(recent) = Self::recent_prices(history, self.lookback) else {
            return self.book_fair_value(book);
        };
        let Some(&latest) = recent.last() else {
            return self.book_fair_value(book);
        };

        match Self::trend(&recent) {
            Trend::Rising => latest * (1.0 + self.bias),
            Trend::Falling => latest * (1.0 - self.bias),
            Trend::Flat => self.book_fair_value(book),
        }
    }
}
