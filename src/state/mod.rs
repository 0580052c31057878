pub mod error;
pub mod price_history;
pub mod trader_state;

pub use error::MalformedStateError;
pub use price_history::{PriceHistory, PriceObservation};
pub use trader_state::{DEFAULT_HISTORY_CAPACITY, STATE_VERSION, TraderState};
