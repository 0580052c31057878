use crate::{
    execution::order_action::Order,
    risk::position_limit::PositionLimit,
    types::order_book::OrderBook,
};

/// Takes liquidity that is mispriced against a fair value, one level deep on
/// each side, sized so a full fill never breaches the position limit.
#[derive(Debug, Clone, Copy)]
pub struct OrderGenerator {
    limit: PositionLimit,
}

impl OrderGenerator {
    pub fn new(limit: PositionLimit) -> Self {
        Self { limit }
    }

    pub fn orders_for(
        &self,
        product: &str,
        fair_value: f64,
        book: &OrderBook,
        position: i64,
    ) -> Vec<Order> {
        let mut orders = Vec::with_capacity(2);

        orders.extend(self.buy_leg(product, fair_value, book, position));
        orders.extend(self.sell_leg(product, fair_value, book, position));

        orders
    }

    /// Lifts the best ask when it is offered below fair value.
    fn buy_leg(&self, product: &str, fair_value: f64, book: &OrderBook, position: i64) -> Option<Order> {
        let (best_ask, ask_quantity) = book.best_ask()?;
        if best_ask.as_f64() >= fair_value {
            return None;
        }

        let quantity = ask_quantity.saturating_abs().min(self.limit.buy_capacity(position));
        (quantity > 0).then(|| Order::buy(product, best_ask, quantity))
    }

    /// Hits the best bid when it is bid above fair value.
    fn sell_leg(&self, product: &str, fair_value: f64, book: &OrderBook, position: i64) -> Option<Order> {
        let (best_bid, bid_quantity) = book.best_bid()?;
        if best_bid.as_f64() <= fair_value {
            return None;
        }

        let quantity = bid_quantity.min(self.limit.sell_capacity(position));
        (quantity > 0).then(|| Order::sell(product, best_bid, quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::price::Price;

    fn generator() -> OrderGenerator {
        OrderGenerator::new(PositionLimit::new(50))
    }

    #[test]
    fn trades_both_sides_of_a_wide_book() {
        let book = OrderBook::new().with_ask(9, -5).with_bid(11, 3);

        let orders = generator().orders_for("KELP", 10.0, &book, 0);

        assert_eq!(
            orders,
            vec![
                Order::buy("KELP", Price::new(9), 5),
                Order::sell("KELP", Price::new(11), 3),
            ]
        );
    }

    #[test]
    fn fairly_priced_book_is_left_alone() {
        let book = OrderBook::new().with_ask(11, -5).with_bid(9, 3);

        assert!(generator().orders_for("KELP", 10.0, &book, 0).is_empty());
    }

    #[test]
    fn price_equal_to_fair_value_is_not_an_opportunity() {
        let book = OrderBook::new().with_ask(10, -5).with_bid(10, 3);

        assert!(generator().orders_for("KELP", 10.0, &book, 0).is_empty());
    }

    #[test]
    fn size_is_capped_by_remaining_capacity() {
        let book = OrderBook::new().with_ask(9, -20).with_bid(11, 20);

        let long = generator().orders_for("KELP", 10.0, &book, 45);
        assert_eq!(
            long,
            vec![
                Order::buy("KELP", Price::new(9), 5),
                Order::sell("KELP", Price::new(11), 20),
            ]
        );

        let short = generator().orders_for("KELP", 10.0, &book, -42);
        assert_eq!(
            short,
            vec![
                Order::buy("KELP", Price::new(9), 20),
                Order::sell("KELP", Price::new(11), 8),
            ]
        );
    }

    #[test]
    fn full_inventory_suppresses_the_leg() {
        let book = OrderBook::new().with_ask(9, -5).with_bid(11, 3);

        let at_cap = generator().orders_for("KELP", 10.0, &book, 50);
        assert_eq!(at_cap, vec![Order::sell("KELP", Price::new(11), 3)]);

        let over_short_cap = generator().orders_for("KELP", 10.0, &book, -55);
        assert_eq!(over_short_cap, vec![Order::buy("KELP", Price::new(9), 5)]);
    }

    #[test]
    fn extreme_positions_do_not_overflow() {
        let book = OrderBook::new().with_ask(9, -5).with_bid(11, 3);

        let deep_short = generator().orders_for("KELP", 10.0, &book, i64::MIN);
        assert_eq!(deep_short, vec![Order::buy("KELP", Price::new(9), 5)]);

        let deep_long = generator().orders_for("KELP", 10.0, &book, i64::MAX);
        assert_eq!(deep_long, vec![Order::sell("KELP", Price::new(11), 3)]);

        let huge_ask = OrderBook::new().with_ask(9, i64::MIN);
        assert_eq!(
            generator().orders_for("KELP", 10.0, &huge_ask, 0),
            vec![Order::buy("KELP", Price::new(9), 50)]
        );
    }

    #[test]
    fn only_the_best_level_is_taken() {
        let book = OrderBook::new()
            .with_ask(8, -2)
            .with_ask(9, -10)
            .with_bid(12, 1)
            .with_bid(11, 10);

        let orders = generator().orders_for("KELP", 10.0, &book, 0);

        assert_eq!(
            orders,
            vec![
                Order::buy("KELP", Price::new(8), 2),
                Order::sell("KELP", Price::new(12), 1),
            ]
        );
    }

    #[test]
    fn missing_sides_emit_nothing() {
        assert!(generator()
            .orders_for("KELP", 10.0, &OrderBook::new(), 0)
            .is_empty());
    }
}
