//! Region resolution and market aggregation for UK and Irish property listings.
//!
//! Listings arrive as loosely typed JSON, are annotated with a calculated
//! region and a EUR price, and are reduced into independent dashboard
//! summaries. The `router` module exposes the pipeline over a stateless
//! JSON HTTP service.

pub mod analytics;
pub mod config;
pub mod domain;
pub mod errors;
pub mod geo;
pub mod logging;
pub mod responses;
pub mod router;
pub mod spreadsheets;

#[cfg(test)]
mod tests;

pub use analytics::{FilterSelection, MarketAggregator, MarketConfig, MarketReport};
pub use domain::{AnnotatedProperty, PropertyRecord, RateTable};
pub use geo::{Region, RegionResolver};
pub use router::{handle, AppState};
