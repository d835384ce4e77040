// src/analytics/filters.rs

use crate::domain::{AnnotatedProperty, Position};
use crate::geo::RegionResolver;
use serde::{Deserialize, Serialize};

/// Sentinel meaning "no filter on this dimension".
pub const ALL: &str = "All";

fn all() -> String {
    ALL.to_string()
}

/// Dashboard filter selection. Missing fields default to "All".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    #[serde(default = "all")]
    pub source: String,
    #[serde(default = "all")]
    pub region: String,
    #[serde(default = "all")]
    pub currency: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            source: all(),
            region: all(),
            currency: all(),
        }
    }
}

impl FilterSelection {
    pub fn is_unfiltered(&self) -> bool {
        [&self.source, &self.region, &self.currency]
            .iter()
            .all(|v| v.as_str() == ALL)
    }

    /// Source, then region, then currency. All three must pass.
    pub fn matches(&self, property: &AnnotatedProperty, resolver: &RegionResolver) -> bool {
        self.matches_source(property)
            && self.matches_region(property, resolver)
            && self.matches_currency(property)
    }

    pub fn apply(
        &self,
        mut properties: Vec<AnnotatedProperty>,
        resolver: &RegionResolver,
    ) -> Vec<AnnotatedProperty> {
        if !self.is_unfiltered() {
            properties.retain(|p| self.matches(p, resolver));
        }
        properties
    }

    fn matches_source(&self, property: &AnnotatedProperty) -> bool {
        self.source == ALL || property.source == self.source
    }

    /// A listing with coordinates matches when the selected region's own box
    /// contains it, so points in an overlap match either region. Listings
    /// without coordinates compare their `region` field literally.
    fn matches_region(&self, property: &AnnotatedProperty, resolver: &RegionResolver) -> bool {
        if self.region == ALL {
            return true;
        }
        match property.position {
            Position::Point(point) => resolver.contains(&self.region, point),
            Position::Malformed => false,
            Position::Missing => property.fallback_region.as_deref() == Some(self.region.as_str()),
        }
    }

    fn matches_currency(&self, property: &AnnotatedProperty) -> bool {
        self.currency == ALL || property.currency == self.currency
    }
}
