pub mod position_limit;
