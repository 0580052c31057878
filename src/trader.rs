use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, error, trace, warn};

use crate::{
    config::TraderConfig,
    execution::order_generator::OrderGenerator,
    risk::position_limit::PositionLimit,
    scenario::scenario::{DynamicStrategy, Scenario},
    state::trader_state::TraderState,
    types::snapshot::{TickOutcome, TickSnapshot},
};

/// Everything needed to trade one product, resolved once from config.
struct ProductDesk {
    strategy: DynamicStrategy,
    generator: OrderGenerator,
}

impl fmt::Debug for ProductDesk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductDesk")
            .field("strategy", &self.strategy.name())
            .field("generator", &self.generator)
            .finish()
    }
}

/// Per-tick decision engine. Holds no state between ticks: everything that
/// must survive travels in the returned `traderData` blob.
#[derive(Debug)]
pub struct Trader {
    desks: BTreeMap<String, ProductDesk>,
    history_capacity: usize,
}

impl Trader {
    pub fn new(config: &TraderConfig) -> Self {
        let desks = config
            .products
            .iter()
            .map(|(product, product_config)| {
                let desk = ProductDesk {
                    strategy: Scenario::strategy(product, &product_config.strategy),
                    generator: OrderGenerator::new(PositionLimit::new(
                        product_config.position_limit,
                    )),
                };
                (product.clone(), desk)
            })
            .collect();

        Self {
            desks,
            history_capacity: config.history_capacity,
        }
    }

    pub fn process_tick(&self, snapshot: &TickSnapshot) -> TickOutcome {
        let mut state = Self::load_state(&snapshot.trader_data);
        let mut orders = BTreeMap::new();

        for (product, book) in &snapshot.order_depths {
            let Some(desk) = self.desks.get(product) else {
                trace!(product = %product, "skipping unconfigured product");
                continue;
            };

            let position = snapshot.position(product);
            let fair_value =
                desk.strategy
                    .fair_value(book, state.history(product), snapshot.timestamp);

            let product_orders = desk
                .generator
                .orders_for(product, fair_value, book, position);

            debug!(
                product = %product,
                strategy = desk.strategy.name(),
                fair_value,
                best_bid = ?book.best_bid(),
                best_ask = ?book.best_ask(),
                position,
                orders = ?product_orders,
                "tick decision"
            );

            orders.insert(product.clone(), product_orders);

            // A zero mid is not a usable price.
            if let Some(mid) = book.mid_price().filter(|mid| *mid != 0.0) {
                state.record(product, snapshot.timestamp, mid);
            }
        }

        state.truncate(self.history_capacity);

        TickOutcome {
            orders,
            conversions: 0,
            trader_data: Self::store_state(&state),
        }
    }

    fn load_state(trader_data: &str) -> TraderState {
        TraderState::decode(Some(trader_data)).unwrap_or_else(|error| {
            warn!(%error, "discarding malformed trader state");
            TraderState::default()
        })
    }

    fn store_state(state: &TraderState) -> String {
        state.encode().unwrap_or_else(|error| {
            error!(%error, "failed to encode trader state; history will restart");
            String::new()
        })
    }
}

impl Default for Trader {
    fn default() -> Self {
        Self::new(&TraderConfig::default())
    }
}
