// src/analytics/health.rs

use super::stats::{distinct, group_in_order, mean, percentage, ratio, round_to, std_dev};
use crate::domain::AnnotatedProperty;
use serde::Serialize;

/// Descriptive market heuristics over the whole filtered set.
///
/// Each value is `None` when its divisor is zero: an empty set, or a zero
/// mean price for volatility.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketHealth {
    /// Coefficient of variation of EUR prices, as a whole percentage.
    pub volatility: Option<i64>,
    /// Listings per distinct agent.
    pub liquidity: Option<f64>,
    /// Distinct property types per listing.
    pub diversity: Option<f64>,
    /// Share of the largest region, as a whole percentage.
    pub concentration: Option<i64>,
    /// Share of listings with a BER rating, as a whole percentage.
    pub data_quality: Option<i64>,
}

pub fn market_health(properties: &[AnnotatedProperty]) -> MarketHealth {
    MarketHealth {
        volatility: volatility(properties),
        liquidity: liquidity(properties),
        diversity: diversity(properties),
        concentration: concentration(properties),
        data_quality: data_quality(properties),
    }
}

fn volatility(properties: &[AnnotatedProperty]) -> Option<i64> {
    let prices: Vec<f64> = properties.iter().map(|p| p.price_eur).collect();
    let cv = ratio(std_dev(&prices)?, mean(&prices)?)?;
    Some((cv * 100.0).round() as i64)
}

fn liquidity(properties: &[AnnotatedProperty]) -> Option<f64> {
    let agents = distinct(properties.iter().map(|p| p.agent_label()));
    ratio(properties.len() as f64, agents as f64).map(|v| round_to(v, 1))
}

fn diversity(properties: &[AnnotatedProperty]) -> Option<f64> {
    let types = distinct(properties.iter().map(|p| p.property_type.label()));
    ratio(types as f64, properties.len() as f64).map(|v| round_to(v, 3))
}

fn concentration(properties: &[AnnotatedProperty]) -> Option<i64> {
    let largest = group_in_order(properties, |p| p.calculated_region.clone())
        .iter()
        .map(|(_, group)| group.len())
        .max()?;
    percentage(largest, properties.len()).map(|v| v.round() as i64)
}

fn data_quality(properties: &[AnnotatedProperty]) -> Option<i64> {
    let rated = properties.iter().filter(|p| p.ber_rating.is_some()).count();
    percentage(rated, properties.len()).map(|v| v.round() as i64)
}
