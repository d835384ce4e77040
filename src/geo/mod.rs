mod regions;
mod resolver;

pub use regions::{Region, REGIONS};
pub use resolver::{BoundingBox, Coordinates, RegionResolver, UNKNOWN_REGION};
