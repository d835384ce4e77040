// src/domain/property.rs

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// record
//  ├── numericPrice        number | "350,000"
//  ├── currency            "EUR" | "GBP" | "USD" | ...
//  ├── location
//  │    └── coordinates    [longitude, latitude]
//  ├── region              fallback when there are no coordinates
//  ├── source              listing provider
//  ├── propertyType        "House" | ["House", ...]
//  ├── propertyClass       same shape, used when propertyType is missing
//  ├── bedsString          "3 bed" | 3
//  ├── bathString          "2 bath" | 2
//  ├── berRating           "B2" | "Not Available"
//  ├── groupObject
//  │    ├── name
//  │    └── groupName
//  └── createdOn           RFC 3339 | "YYYY-MM-DD" | epoch millis

/// A listing as delivered by the listings backend. Every field is optional and
/// loosely typed; `AnnotatedProperty` is the normalized view the analytics use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub numeric_price: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub source: Option<String>,
    pub property_type: Option<TypeField>,
    pub property_class: Option<TypeField>,
    pub beds_string: Option<Scalar>,
    pub bath_string: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub ber_rating: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub group_object: Option<GroupObject>,
    pub created_on: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Kept as raw JSON so that malformed values degrade instead of failing the request.
    pub coordinates: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupObject {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub group_name: Option<String>,
}

/// Reads any JSON value and keeps it only if it has the expected shape.
/// A wrongly typed field becomes `None` instead of rejecting the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A field that arrives as a number, a string, or occasionally something else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Other(Value),
}

/// `propertyType` / `propertyClass` as sent: a single string or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeField {
    Single(String),
    List(Vec<Value>),
    Other(Value),
}

impl TypeField {
    /// The label this field contributes, if any. Lists contribute their first element.
    pub fn first(&self) -> Option<&str> {
        let label = match self {
            TypeField::Single(s) => Some(s.as_str()),
            TypeField::List(items) => items.first().and_then(Value::as_str),
            TypeField::Other(_) => None,
        };
        label.map(str::trim).filter(|s| !s.is_empty())
    }

    fn is_blank(&self) -> bool {
        matches!(self, TypeField::Single(s) if s.trim().is_empty())
    }
}

impl PropertyRecord {
    /// `propertyType` wins unless it is missing or an empty string.
    pub fn type_field(&self) -> Option<&TypeField> {
        self.property_type
            .as_ref()
            .filter(|f| !f.is_blank())
            .or(self.property_class.as_ref())
    }

    /// Raw coordinate values, or `None` when the field is missing or null.
    pub fn raw_coordinates(&self) -> Option<&Value> {
        self.location
            .as_ref()
            .and_then(|l| l.coordinates.as_ref())
            .filter(|v| !v.is_null())
    }

    /// First non-empty agent identifier.
    pub fn agent(&self) -> Option<&str> {
        let group = self.group_object.as_ref()?;
        [group.name.as_deref(), group.group_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_loose_listing_shape() {
        let record: PropertyRecord = serde_json::from_value(json!({
            "numericPrice": 325000,
            "currency": "EUR",
            "location": { "coordinates": [-6.30, 53.35] },
            "source": "daft",
            "propertyType": ["Semi-Detached", "House"],
            "bedsString": "3 bed",
            "bathString": 2,
            "berRating": "B3",
            "groupObject": { "groupName": "Sherry FitzGerald" },
            "createdOn": "2024-03-18T09:30:00Z",
            "someFieldWeIgnore": { "nested": true }
        }))
        .unwrap();

        assert_eq!(record.numeric_price, Some(Scalar::Number(325000.0)));
        assert_eq!(record.beds_string, Some(Scalar::Text("3 bed".into())));
        assert_eq!(record.bath_string, Some(Scalar::Number(2.0)));
        assert_eq!(record.type_field().and_then(TypeField::first), Some("Semi-Detached"));
        assert_eq!(record.agent(), Some("Sherry FitzGerald"));
        assert!(record.raw_coordinates().is_some());
    }

    #[test]
    fn property_class_is_used_when_type_is_missing_or_blank() {
        let record: PropertyRecord = serde_json::from_value(json!({
            "propertyType": "",
            "propertyClass": "Apartment"
        }))
        .unwrap();
        assert_eq!(record.type_field().and_then(TypeField::first), Some("Apartment"));
    }

    #[test]
    fn agent_prefers_name_and_skips_blank_values() {
        let record: PropertyRecord = serde_json::from_value(json!({
            "groupObject": { "name": "  ", "groupName": "DNG" }
        }))
        .unwrap();
        assert_eq!(record.agent(), Some("DNG"));

        let record: PropertyRecord = serde_json::from_value(json!({
            "groupObject": { "name": "Savills", "groupName": "DNG" }
        }))
        .unwrap();
        assert_eq!(record.agent(), Some("Savills"));
    }

    #[test]
    fn null_and_odd_values_do_not_fail_deserialization() {
        let record: PropertyRecord = serde_json::from_value(json!({
            "numericPrice": null,
            "location": { "coordinates": null },
            "bedsString": true,
            "propertyType": { "unexpected": "object" }
        }))
        .unwrap();

        assert_eq!(record.numeric_price, None);
        assert_eq!(record.raw_coordinates(), None);
        assert_eq!(record.beds_string, Some(Scalar::Other(json!(true))));
        assert_eq!(record.type_field().and_then(TypeField::first), None);
    }

    #[test]
    fn wrongly_typed_fields_fall_back_to_none() {
        let record: PropertyRecord = serde_json::from_value(json!({
            "currency": 978,
            "location": "Dublin",
            "region": 7,
            "source": 123,
            "berRating": 2,
            "groupObject": "DNG",
            "numericPrice": 250000
        }))
        .unwrap();

        assert_eq!(record.currency, None);
        assert_eq!(record.location, None);
        assert_eq!(record.region, None);
        assert_eq!(record.source, None);
        assert_eq!(record.ber_rating, None);
        assert_eq!(record.group_object, None);
        assert_eq!(record.numeric_price, Some(Scalar::Number(250000.0)));

        let record: PropertyRecord = serde_json::from_value(json!({
            "groupObject": { "name": 42, "groupName": "DNG" }
        }))
        .unwrap();
        assert_eq!(record.agent(), Some("DNG"));
    }

    #[test]
    fn one_bad_record_does_not_reject_the_batch() {
        let records: Vec<PropertyRecord> = serde_json::from_value(json!([
            { "numericPrice": 300000, "region": "Kent" },
            { "source": 123, "location": "Dublin", "region": 7, "berRating": 2, "groupObject": "DNG" }
        ]))
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].region.as_deref(), Some("Kent"));
        assert_eq!(records[1], PropertyRecord::default());
    }
}
