pub mod product_context;
pub mod strategies;
pub mod strategy;
pub mod strategy_helpers;

pub use strategy::Strategy;
