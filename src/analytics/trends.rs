// src/analytics/trends.rs

use super::stats::mean;
use crate::domain::{AnnotatedProperty, YearMonth};
use serde::Serialize;
use std::collections::BTreeMap;

const TREND_MONTHS: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub month: YearMonth,
    pub count: usize,
    pub average_price: f64,
    pub total_value: f64,
}

/// Listings per `createdOn` month, oldest first, keeping the latest twelve
/// months that have data. Undated listings are left out.
pub fn monthly_trends(properties: &[AnnotatedProperty]) -> Vec<MonthlyTrend> {
    let mut by_month: BTreeMap<YearMonth, Vec<f64>> = BTreeMap::new();
    for property in properties {
        if let Some(month) = property.created_month {
            by_month.entry(month).or_default().push(property.price_eur);
        }
    }

    let skip = by_month.len().saturating_sub(TREND_MONTHS);
    by_month
        .into_iter()
        .skip(skip)
        .map(|(month, prices)| MonthlyTrend {
            month,
            count: prices.len(),
            average_price: mean(&prices).unwrap_or_default(),
            total_value: prices.iter().sum(),
        })
        .collect()
}
