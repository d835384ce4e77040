use crate::domain::{AnnotatedProperty, PropertyRecord, RateTable};
use crate::geo::RegionResolver;
use serde_json::Value;

pub fn listing(value: Value) -> PropertyRecord {
    serde_json::from_value(value).expect("test listing should deserialize")
}

pub fn annotate_all(records: Vec<PropertyRecord>) -> Vec<AnnotatedProperty> {
    let resolver = RegionResolver::default();
    let rates = RateTable::default();
    records
        .iter()
        .map(|r| AnnotatedProperty::from_record(r, &resolver, &rates))
        .collect()
}
