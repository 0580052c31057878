pub mod midpoint;
pub mod momentum;
pub mod moving_average;
