// src/domain/annotated.rs

use super::currency::RateTable;
use super::extract::{extract_bathroom_count, extract_bedroom_count, extract_price};
use super::property::{PropertyRecord, Scalar, TypeField};
use crate::geo::{Coordinates, RegionResolver, UNKNOWN_REGION};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

pub const UNKNOWN_LABEL: &str = "Unknown";
pub const UNKNOWN_AGENT: &str = "Unknown Agent";
pub const BER_NOT_AVAILABLE: &str = "Not Available";

/// A listing normalized for aggregation, with its derived region and EUR price.
/// Built fresh for every aggregation call; the source record is never touched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedProperty {
    pub calculated_region: String,
    pub price: f64,
    pub price_eur: f64,
    pub currency: String,
    pub source: String,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub ber_rating: Option<String>,
    pub agent: Option<String>,
    pub created_month: Option<YearMonth>,
    pub position: Position,
    pub fallback_region: Option<String>,
}

/// Where a record sits on the map, as far as its `coordinates` field says.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Position {
    Point(Coordinates),
    /// The field was present but was not a `[longitude, latitude]` pair.
    Malformed,
    Missing,
}

impl Position {
    fn from_raw(raw: Option<&Value>) -> Self {
        let Some(raw) = raw else {
            return Position::Missing;
        };
        let numbers: Option<Vec<f64>> = raw
            .as_array()
            .and_then(|items| items.iter().take(2).map(Value::as_f64).collect());

        numbers
            .as_deref()
            .and_then(Coordinates::from_slice)
            .map(Position::Point)
            .unwrap_or(Position::Malformed)
    }

    pub fn point(&self) -> Option<Coordinates> {
        match self {
            Position::Point(point) => Some(*point),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Single(String),
    Unknown,
}

impl PropertyType {
    fn from_field(field: Option<&TypeField>) -> Self {
        field
            .and_then(TypeField::first)
            .map(|label| PropertyType::Single(label.to_string()))
            .unwrap_or(PropertyType::Unknown)
    }

    pub fn label(&self) -> &str {
        match self {
            PropertyType::Single(label) => label,
            PropertyType::Unknown => UNKNOWN_LABEL,
        }
    }
}

impl Serialize for PropertyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Calendar month bucket; orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Reads epoch milliseconds, RFC 3339, naive ISO date-times or plain `YYYY-MM-DD`.
    pub fn parse(field: Option<&Scalar>) -> Option<Self> {
        match field? {
            Scalar::Number(ms) if ms.is_finite() => Utc
                .timestamp_millis_opt(*ms as i64)
                .single()
                .map(|dt| Self::from_date(dt.date_naive())),
            Scalar::Text(s) => Self::parse_text(s.trim()),
            _ => None,
        }
    }

    fn parse_text(s: &str) -> Option<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self::from_date(dt.with_timezone(&Utc).date_naive()));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Some(Self::from_date(dt.date()));
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(Self::from_date)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl AnnotatedProperty {
    /// Derives every grouping attribute for one record.
    ///
    /// A record with a `coordinates` field is placed by the resolver, even when the
    /// field turns out to be malformed; only records without one fall back to `region`.
    pub fn from_record(
        record: &PropertyRecord,
        resolver: &RegionResolver,
        rates: &RateTable,
    ) -> Self {
        let position = Position::from_raw(record.raw_coordinates());
        let fallback_region = non_empty(record.region.as_deref()).map(str::to_string);

        let calculated_region = match position {
            Position::Point(point) => resolver.resolve_point(point).to_string(),
            Position::Malformed => UNKNOWN_REGION.to_string(),
            Position::Missing => fallback_region
                .clone()
                .unwrap_or_else(|| UNKNOWN_REGION.to_string()),
        };

        let price = extract_price(record.numeric_price.as_ref());
        let price_eur = rates.convert_to_eur(price, record.currency.as_deref());

        let ber_rating = non_empty(record.ber_rating.as_deref())
            .filter(|rating| *rating != BER_NOT_AVAILABLE)
            .map(str::to_string);

        AnnotatedProperty {
            calculated_region,
            price,
            price_eur,
            currency: non_empty(record.currency.as_deref())
                .unwrap_or(UNKNOWN_LABEL)
                .to_string(),
            source: non_empty(record.source.as_deref())
                .unwrap_or(UNKNOWN_LABEL)
                .to_string(),
            property_type: PropertyType::from_field(record.type_field()),
            bedrooms: extract_bedroom_count(record.beds_string.as_ref()),
            bathrooms: extract_bathroom_count(record.bath_string.as_ref()),
            ber_rating,
            agent: record.agent().map(str::to_string),
            created_month: YearMonth::parse(record.created_on.as_ref()),
            position,
            fallback_region,
        }
    }

    pub fn ber_label(&self) -> &str {
        self.ber_rating.as_deref().unwrap_or(BER_NOT_AVAILABLE)
    }

    pub fn agent_label(&self) -> &str {
        self.agent.as_deref().unwrap_or(UNKNOWN_AGENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn annotate(value: Value) -> AnnotatedProperty {
        let record: PropertyRecord = serde_json::from_value(value).unwrap();
        AnnotatedProperty::from_record(&record, &RegionResolver::default(), &RateTable::default())
    }

    #[test]
    fn coordinates_take_precedence_over_region_field() {
        let p = annotate(json!({
            "location": { "coordinates": [-6.30, 53.35] },
            "region": "Kent"
        }));
        assert_eq!(p.calculated_region, "Dublin");
        assert_eq!(p.fallback_region.as_deref(), Some("Kent"));
    }

    #[test]
    fn region_field_is_the_fallback_and_unknown_the_default() {
        assert_eq!(annotate(json!({ "region": "Kent" })).calculated_region, "Kent");
        assert_eq!(annotate(json!({})).calculated_region, "Unknown");
        assert_eq!(annotate(json!({ "region": "  " })).calculated_region, "Unknown");
    }

    #[test]
    fn malformed_coordinates_resolve_to_unknown() {
        let p = annotate(json!({
            "location": { "coordinates": [] },
            "region": "Kent"
        }));
        assert_eq!(p.position, Position::Malformed);
        assert_eq!(p.calculated_region, "Unknown");

        let p = annotate(json!({ "location": { "coordinates": "53.35,-6.30" } }));
        assert_eq!(p.position, Position::Malformed);
    }

    #[test]
    fn trailing_coordinate_values_are_ignored() {
        let p = annotate(json!({ "location": { "coordinates": [-6.30, 53.35, null] } }));
        assert_eq!(p.position, Position::Point(Coordinates::new(-6.30, 53.35)));
        assert_eq!(p.calculated_region, "Dublin");

        let p = annotate(json!({ "location": { "coordinates": [-6.30, null, 53.35] } }));
        assert_eq!(p.position, Position::Malformed);
    }

    #[test]
    fn labels_default_when_fields_are_missing() {
        let p = annotate(json!({}));
        assert_eq!(p.currency, "Unknown");
        assert_eq!(p.source, "Unknown");
        assert_eq!(p.property_type, PropertyType::Unknown);
        assert_eq!(p.ber_label(), "Not Available");
        assert_eq!(p.agent_label(), "Unknown Agent");
        assert_eq!(p.price, 0.0);
        assert_eq!(p.bedrooms, 0);
    }

    #[test]
    fn not_available_ber_is_treated_as_absent() {
        let p = annotate(json!({ "berRating": "Not Available" }));
        assert_eq!(p.ber_rating, None);
        let p = annotate(json!({ "berRating": "A2" }));
        assert_eq!(p.ber_label(), "A2");
    }

    #[test]
    fn created_on_accepts_common_date_shapes() {
        let expected = Some(YearMonth::new(2024, 3));
        assert_eq!(annotate(json!({ "createdOn": "2024-03-18T09:30:00Z" })).created_month, expected);
        assert_eq!(annotate(json!({ "createdOn": "2024-03-18T09:30:00.123" })).created_month, expected);
        assert_eq!(annotate(json!({ "createdOn": "2024-03-18" })).created_month, expected);
        // 2024-03-18T00:00:00Z
        assert_eq!(annotate(json!({ "createdOn": 1710720000000_i64 })).created_month, expected);
        assert_eq!(annotate(json!({ "createdOn": "last week" })).created_month, None);
    }

    #[test]
    fn year_month_orders_and_prints_chronologically() {
        let mut months = vec![YearMonth::new(2024, 1), YearMonth::new(2023, 12), YearMonth::new(2024, 11)];
        months.sort();
        let printed: Vec<String> = months.iter().map(ToString::to_string).collect();
        assert_eq!(printed, ["2023-12", "2024-01", "2024-11"]);
    }

    #[test]
    fn serializes_normalized_shape() {
        let p = annotate(json!({
            "numericPrice": 100000,
            "currency": "GBP",
            "propertyType": ["Bungalow"],
            "createdOn": "2024-03-18"
        }));
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["calculatedRegion"], "Unknown");
        assert_eq!(value["propertyType"], "Bungalow");
        assert_eq!(value["createdMonth"], "2024-03");
        assert_eq!(value["position"], "missing");
    }
}
