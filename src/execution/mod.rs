pub mod order_action;
pub mod order_generator;

pub use order_action::Order;
pub use order_generator::OrderGenerator;
