pub mod agents;
pub mod aggregator;
pub mod distributions;
pub mod filters;
pub mod health;
pub mod regional;
pub mod stats;
pub mod trends;

#[cfg(test)]
mod testing;

pub use aggregator::{MarketAggregator, MarketConfig, MarketOverview, MarketReport};
pub use filters::FilterSelection;
pub use health::MarketHealth;
