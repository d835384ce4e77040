// src/analytics/distributions.rs

use super::stats::{group_in_order, mean, percentage, round_to};
use crate::domain::annotated::BER_NOT_AVAILABLE;
use crate::domain::AnnotatedProperty;
use serde::Serialize;

const PROPERTY_TYPE_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPriceRow {
    pub region: String,
    pub count: usize,
    pub average_price: f64,
    pub min_price: f64,
    pub max_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceShare {
    pub source: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTypeCount {
    pub property_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRow {
    pub currency: String,
    pub count: usize,
    pub total_price: f64,
    pub average_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BerRatingCount {
    pub rating: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedroomCount {
    pub label: String,
    pub bedrooms: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBucket {
    pub label: &'static str,
    pub min: f64,
    /// Exclusive upper bound; `None` for the open-ended top bucket.
    pub max: Option<f64>,
    pub count: usize,
    pub percentage: f64,
}

/// EUR price bands, lower bound inclusive.
pub const PRICE_BUCKETS: [(&str, f64, Option<f64>); 5] = [
    ("€0-200k", 0.0, Some(200_000.0)),
    ("€200k-400k", 200_000.0, Some(400_000.0)),
    ("€400k-600k", 400_000.0, Some(600_000.0)),
    ("€600k-800k", 600_000.0, Some(800_000.0)),
    ("€800k+", 800_000.0, None),
];

fn eur_prices(group: &[&AnnotatedProperty]) -> Vec<f64> {
    group.iter().map(|p| p.price_eur).collect()
}

/// Count, average, min and max EUR price per calculated region, most expensive first.
pub fn price_by_region(properties: &[AnnotatedProperty]) -> Vec<RegionPriceRow> {
    let mut rows: Vec<RegionPriceRow> = group_in_order(properties, |p| p.calculated_region.clone())
        .into_iter()
        .map(|(region, group)| {
            let prices = eur_prices(&group);
            RegionPriceRow {
                region,
                count: group.len(),
                average_price: mean(&prices).unwrap_or_default(),
                min_price: prices.iter().copied().fold(f64::INFINITY, f64::min),
                max_price: prices.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            }
        })
        .collect();

    // sort_by is stable, so equal averages keep first-seen order
    rows.sort_by(|a, b| b.average_price.total_cmp(&a.average_price));
    rows
}

pub fn source_distribution(properties: &[AnnotatedProperty]) -> Vec<SourceShare> {
    let total = properties.len();
    group_in_order(properties, |p| p.source.clone())
        .into_iter()
        .map(|(source, group)| SourceShare {
            source,
            count: group.len(),
            percentage: round_to(percentage(group.len(), total).unwrap_or_default(), 1),
        })
        .collect()
}

/// The first eight property types seen, not the eight largest.
pub fn property_type_distribution(properties: &[AnnotatedProperty]) -> Vec<PropertyTypeCount> {
    group_in_order(properties, |p| p.property_type.label().to_string())
        .into_iter()
        .take(PROPERTY_TYPE_LIMIT)
        .map(|(property_type, group)| PropertyTypeCount {
            property_type,
            count: group.len(),
        })
        .collect()
}

/// Totals in each listing's own currency; nothing here is converted.
pub fn currency_distribution(properties: &[AnnotatedProperty]) -> Vec<CurrencyRow> {
    group_in_order(properties, |p| p.currency.clone())
        .into_iter()
        .map(|(currency, group)| {
            let prices: Vec<f64> = group.iter().map(|p| p.price).collect();
            CurrencyRow {
                currency,
                count: group.len(),
                total_price: prices.iter().sum(),
                average_price: mean(&prices).unwrap_or_default(),
            }
        })
        .collect()
}

/// Alphabetical by rating, with "Not Available" always last.
pub fn ber_rating_distribution(properties: &[AnnotatedProperty]) -> Vec<BerRatingCount> {
    let mut rows: Vec<BerRatingCount> = group_in_order(properties, |p| p.ber_label().to_string())
        .into_iter()
        .map(|(rating, group)| BerRatingCount {
            rating,
            count: group.len(),
        })
        .collect();

    rows.sort_by(|a, b| {
        let a_missing = a.rating == BER_NOT_AVAILABLE;
        let b_missing = b.rating == BER_NOT_AVAILABLE;
        a_missing.cmp(&b_missing).then_with(|| a.rating.cmp(&b.rating))
    });
    rows
}

pub fn bedroom_label(bedrooms: u32) -> String {
    match bedrooms {
        0 => "Not specified".to_string(),
        1 => "1 Bedroom".to_string(),
        n => format!("{n} Bedrooms"),
    }
}

pub fn bedroom_distribution(properties: &[AnnotatedProperty]) -> Vec<BedroomCount> {
    group_in_order(properties, |p| bedroom_label(p.bedrooms))
        .into_iter()
        .map(|(label, group)| BedroomCount {
            label,
            bedrooms: group[0].bedrooms,
            count: group.len(),
        })
        .collect()
}

/// All five bands, always in ascending order, including empty ones.
pub fn price_range_buckets(properties: &[AnnotatedProperty]) -> Vec<PriceBucket> {
    let total = properties.len();
    PRICE_BUCKETS
        .iter()
        .map(|&(label, min, max)| {
            let count = properties
                .iter()
                .filter(|p| p.price_eur >= min && max.map_or(true, |max| p.price_eur < max))
                .count();
            PriceBucket {
                label,
                min,
                max,
                count,
                percentage: round_to(percentage(count, total).unwrap_or_default(), 1),
            }
        })
        .collect()
}
