pub mod config;
pub mod execution;
pub mod risk;
pub mod scenario;
pub mod state;
pub mod strategy;
pub mod trader;
pub mod types;

pub use config::{ProductConfig, TraderConfig};
pub use execution::order_action::Order;
pub use state::{MalformedStateError, TraderState};
pub use trader::Trader;
pub use types::{
    order_book::OrderBook,
    price::Price,
    snapshot::{TickOutcome, TickSnapshot},
};
