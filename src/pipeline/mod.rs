pub mod aggregator;
pub mod pipeline;
