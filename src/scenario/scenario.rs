use crate::{
    scenario::strategies::StrategyParams,
    strategy::{
        strategies::{
            midpoint::MidpointStrategy, momentum::MomentumStrategy,
            moving_average::MovingAverageStrategy,
        },
        strategy::Strategy,
    },
};

pub struct Scenario;

pub type DynamicStrategy = Box<dyn Strategy>;

impl Scenario {
    pub fn strategy(product: &str, params: &StrategyParams) -> DynamicStrategy {
        tracing::info!(product, strategy = %params.kind(), "creating strategy");

        match *params {
            StrategyParams::Midpoint { default_fair_value } => {
                Box::new(MidpointStrategy::new(product, default_fair_value))
            }
            StrategyParams::MovingAverage {
                window,
                default_fair_value,
            } => Box::new(MovingAverageStrategy::new(
                product,
                window,
                default_fair_value,
            )),
            StrategyParams::Momentum {
                lookback,
                bias,
                default_fair_value,
            } => Box::new(MomentumStrategy::new(
                product,
                lookback,
                bias,
                default_fair_value,
            )),
        }
    }
}
