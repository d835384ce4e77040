// src/geo/resolver.rs

use super::regions::{Region, REGIONS};
use serde::Serialize;

/// Region name reported when a point falls outside every bounding box.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Axis-aligned latitude/longitude rectangle. All edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub const fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    pub fn contains(&self, point: Coordinates) -> bool {
        point.latitude >= self.south
            && point.latitude <= self.north
            && point.longitude >= self.west
            && point.longitude <= self.east
    }
}

/// A point in GeoJSON order: longitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Reads a `[longitude, latitude, ..]` slice. Anything shorter is no point at all.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match values {
            &[longitude, latitude, ..] => Some(Self::new(longitude, latitude)),
            _ => None,
        }
    }
}

/// Resolves coordinates to region names against an ordered, immutable table.
///
/// Boxes are rectangular approximations of irregular areas and may overlap.
/// The first region in table order that contains the point wins.
#[derive(Debug, Clone)]
pub struct RegionResolver {
    regions: Vec<Region>,
}

impl RegionResolver {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Resolves a raw `[longitude, latitude]` pair. Missing or short input is `"Unknown"`.
    pub fn resolve(&self, coordinates: Option<&[f64]>) -> &str {
        coordinates
            .and_then(Coordinates::from_slice)
            .map(|point| self.resolve_point(point))
            .unwrap_or(UNKNOWN_REGION)
    }

    pub fn resolve_point(&self, point: Coordinates) -> &str {
        self.regions
            .iter()
            .find(|region| region.bounds.contains(point))
            .map(|region| region.name)
            .unwrap_or(UNKNOWN_REGION)
    }

    /// Looks a region up by exact name.
    pub fn find(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.name == name)
    }

    /// True when the named region's own box holds the point, regardless of
    /// whether an earlier region would win resolution.
    pub fn contains(&self, name: &str, point: Coordinates) -> bool {
        self.find(name)
            .map(|region| region.bounds.contains(point))
            .unwrap_or(false)
    }
}

impl Default for RegionResolver {
    fn default() -> Self {
        Self::new(REGIONS.to_vec())
    }
}
