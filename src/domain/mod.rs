pub mod annotated;
pub mod currency;
pub mod extract;
pub mod property;

pub use annotated::{AnnotatedProperty, Position, PropertyType, YearMonth};
pub use currency::RateTable;
pub use property::PropertyRecord;
