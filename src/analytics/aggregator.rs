// src/analytics/aggregator.rs

use super::agents::{agent_performance, AgentRow};
use super::distributions::{
    ber_rating_distribution, bedroom_distribution, currency_distribution, price_by_region,
    price_range_buckets, property_type_distribution, source_distribution, BedroomCount,
    BerRatingCount, CurrencyRow, PriceBucket, PropertyTypeCount, RegionPriceRow, SourceShare,
};
use super::filters::FilterSelection;
use super::health::{market_health, MarketHealth};
use super::regional::{regional_comparison, RegionalComparison};
use super::stats::{distinct, mean};
use super::trends::{monthly_trends, MonthlyTrend};
use crate::domain::{AnnotatedProperty, PropertyRecord, RateTable};
use crate::geo::RegionResolver;
use serde::Serialize;
use tracing::debug;

/// Immutable lookup tables handed to the aggregator once at start-up.
#[derive(Debug, Clone, Default)]
pub struct MarketConfig {
    pub regions: RegionResolver,
    pub rates: RateTable,
}

/// Headline figures for the filtered set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverview {
    pub total_properties: usize,
    pub total_value: f64,
    pub average_price: Option<f64>,
    pub region_count: usize,
    pub source_count: usize,
}

/// Every dashboard summary for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketReport {
    pub filters: FilterSelection,
    pub overview: MarketOverview,
    pub price_by_region: Vec<RegionPriceRow>,
    pub source_distribution: Vec<SourceShare>,
    pub property_type_distribution: Vec<PropertyTypeCount>,
    pub currency_distribution: Vec<CurrencyRow>,
    pub ber_rating_distribution: Vec<BerRatingCount>,
    pub bedroom_distribution: Vec<BedroomCount>,
    pub price_range_buckets: Vec<PriceBucket>,
    pub agent_performance: Vec<AgentRow>,
    pub monthly_trends: Vec<MonthlyTrend>,
    pub regional_comparison: Vec<RegionalComparison>,
    pub health: MarketHealth,
}

/// Stateless entry point for the analytics pipeline.
///
/// Holds only read-only tables, so one instance can serve concurrent
/// requests; every call reduces its own input from scratch.
#[derive(Debug, Clone, Default)]
pub struct MarketAggregator {
    config: MarketConfig,
}

impl MarketAggregator {
    pub fn new(config: MarketConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    pub fn resolve_region(&self, coordinates: Option<&[f64]>) -> &str {
        self.config.regions.resolve(coordinates)
    }

    pub fn annotate(&self, records: &[PropertyRecord]) -> Vec<AnnotatedProperty> {
        records
            .iter()
            .map(|record| {
                AnnotatedProperty::from_record(record, &self.config.regions, &self.config.rates)
            })
            .collect()
    }

    /// Annotates and then narrows to the filter selection.
    pub fn prepare(
        &self,
        records: &[PropertyRecord],
        filters: &FilterSelection,
    ) -> Vec<AnnotatedProperty> {
        filters.apply(self.annotate(records), &self.config.regions)
    }

    pub fn overview(&self, properties: &[AnnotatedProperty]) -> MarketOverview {
        let prices: Vec<f64> = properties.iter().map(|p| p.price_eur).collect();
        MarketOverview {
            total_properties: properties.len(),
            total_value: prices.iter().sum(),
            average_price: mean(&prices),
            region_count: distinct(properties.iter().map(|p| p.calculated_region.as_str())),
            source_count: distinct(properties.iter().map(|p| p.source.as_str())),
        }
    }

    pub fn report(&self, records: &[PropertyRecord], filters: &FilterSelection) -> MarketReport {
        let properties = self.prepare(records, filters);
        debug!(
            received = records.len(),
            matched = properties.len(),
            "building market report"
        );

        MarketReport {
            filters: filters.clone(),
            overview: self.overview(&properties),
            price_by_region: price_by_region(&properties),
            source_distribution: source_distribution(&properties),
            property_type_distribution: property_type_distribution(&properties),
            currency_distribution: currency_distribution(&properties),
            ber_rating_distribution: ber_rating_distribution(&properties),
            bedroom_distribution: bedroom_distribution(&properties),
            price_range_buckets: price_range_buckets(&properties),
            agent_performance: agent_performance(&properties),
            monthly_trends: monthly_trends(&properties),
            regional_comparison: regional_comparison(&properties),
            health: market_health(&properties),
        }
    }
}
