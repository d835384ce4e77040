// src/analytics/regional.rs

use super::stats::{distinct, group_in_order, mean, percentage, round_to, upper_median};
use crate::domain::AnnotatedProperty;
use serde::Serialize;

/// Side-by-side profile of one calculated region. Prices are in EUR.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalComparison {
    pub region: String,
    pub count: usize,
    pub average_price: f64,
    pub median_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub price_range: f64,
    pub average_bedrooms: f64,
    pub average_bathrooms: f64,
    pub source_count: usize,
    pub currency_count: usize,
    pub property_type_count: usize,
    pub agent_count: usize,
    pub market_share: f64,
    pub ber_availability: f64,
}

/// Largest regions first; equal counts keep first-seen order.
pub fn regional_comparison(properties: &[AnnotatedProperty]) -> Vec<RegionalComparison> {
    let total = properties.len();
    let mut rows: Vec<RegionalComparison> =
        group_in_order(properties, |p| p.calculated_region.clone())
            .into_iter()
            .map(|(region, group)| compare_region(region, &group, total))
            .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

fn compare_region(region: String, group: &[&AnnotatedProperty], total: usize) -> RegionalComparison {
    let prices: Vec<f64> = group.iter().map(|p| p.price_eur).collect();
    let bedrooms: Vec<f64> = group.iter().map(|p| f64::from(p.bedrooms)).collect();
    let bathrooms: Vec<f64> = group.iter().map(|p| f64::from(p.bathrooms)).collect();
    let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max_price = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let rated = group.iter().filter(|p| p.ber_rating.is_some()).count();

    RegionalComparison {
        region,
        count: group.len(),
        average_price: mean(&prices).unwrap_or_default(),
        median_price: upper_median(&prices).unwrap_or_default(),
        min_price,
        max_price,
        price_range: max_price - min_price,
        average_bedrooms: round_to(mean(&bedrooms).unwrap_or_default(), 1),
        average_bathrooms: round_to(mean(&bathrooms).unwrap_or_default(), 1),
        source_count: distinct(group.iter().map(|p| p.source.as_str())),
        currency_count: distinct(group.iter().map(|p| p.currency.as_str())),
        property_type_count: distinct(group.iter().map(|p| p.property_type.label())),
        agent_count: distinct(group.iter().map(|p| p.agent_label())),
        market_share: round_to(percentage(group.len(), total).unwrap_or_default(), 1),
        ber_availability: round_to(percentage(rated, group.len()).unwrap_or_default(), 1),
    }
}
