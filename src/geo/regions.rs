// src/geo/regions.rs

use super::resolver::BoundingBox;
use serde::Serialize;

/// A named administrative area approximated by a rectangular box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub country: &'static str,
    pub bounds: BoundingBox,
}

impl Region {
    pub const fn new(name: &'static str, country: &'static str, bounds: BoundingBox) -> Self {
        Self {
            name,
            country,
            bounds,
        }
    }
}

const IE: &str = "Ireland";
const NI: &str = "Northern Ireland";
const EN: &str = "England";
const SC: &str = "Scotland";
const WA: &str = "Wales";

/// Built-in region table, in resolution order.
///
/// Boxes are `north, south, east, west`. Neighbouring boxes overlap along
/// shared borders, so reordering entries changes which region wins there.
/// Northern Ireland sits ahead of Cavan, Monaghan and Donegal so border
/// towns resolve north of the line.
///
/// Boxes are hand-drawn approximations. Ireland and Northern Ireland are
/// covered county by county; Great Britain only through the metropolitan
/// and border areas listed plus whole-country boxes for Scotland and Wales,
/// so much of England (Oxford, for one) resolves to `"Unknown"`.
pub const REGIONS: &[Region] = &[
    // ── Republic of Ireland: Leinster ────────────────────────────────────
    Region::new("Dublin", IE, BoundingBox::new(53.63, 53.17, -6.00, -6.55)),
    Region::new("Wicklow", IE, BoundingBox::new(53.24, 52.68, -5.99, -6.80)),
    Region::new("Kildare", IE, BoundingBox::new(53.48, 52.85, -6.45, -7.18)),
    Region::new("Meath", IE, BoundingBox::new(53.93, 53.36, -6.20, -7.35)),
    Region::new("Louth", IE, BoundingBox::new(54.12, 53.70, -6.08, -6.75)),
    Region::new("Wexford", IE, BoundingBox::new(52.78, 52.10, -6.12, -6.97)),
    Region::new("Carlow", IE, BoundingBox::new(52.88, 52.45, -6.50, -7.10)),
    Region::new("Kilkenny", IE, BoundingBox::new(52.90, 52.25, -6.92, -7.65)),
    Region::new("Laois", IE, BoundingBox::new(53.20, 52.77, -6.92, -7.75)),
    Region::new("Offaly", IE, BoundingBox::new(53.45, 52.85, -6.98, -8.10)),
    Region::new("Westmeath", IE, BoundingBox::new(53.78, 53.30, -6.95, -7.90)),
    Region::new("Longford", IE, BoundingBox::new(53.95, 53.52, -7.45, -8.05)),
    // ── Republic of Ireland: Munster ─────────────────────────────────────
    Region::new("Waterford", IE, BoundingBox::new(52.35, 51.93, -6.95, -8.15)),
    Region::new("Tipperary", IE, BoundingBox::new(53.17, 52.20, -7.40, -8.50)),
    Region::new("Cork", IE, BoundingBox::new(52.40, 51.40, -7.85, -10.25)),
    Region::new("Kerry", IE, BoundingBox::new(52.60, 51.68, -9.10, -10.70)),
    Region::new("Limerick", IE, BoundingBox::new(52.77, 52.30, -8.15, -9.40)),
    Region::new("Clare", IE, BoundingBox::new(53.15, 52.55, -8.30, -9.95)),
    // ── Republic of Ireland: Connacht ────────────────────────────────────
    Region::new("Galway", IE, BoundingBox::new(53.60, 52.95, -7.95, -10.25)),
    Region::new("Mayo", IE, BoundingBox::new(54.35, 53.45, -8.55, -10.20)),
    Region::new("Roscommon", IE, BoundingBox::new(54.12, 53.28, -7.85, -8.80)),
    Region::new("Sligo", IE, BoundingBox::new(54.45, 53.90, -8.15, -9.10)),
    Region::new("Leitrim", IE, BoundingBox::new(54.48, 53.85, -7.70, -8.40)),
    // ── Northern Ireland ─────────────────────────────────────────────────
    Region::new("Antrim", NI, BoundingBox::new(55.32, 54.45, -5.70, -6.65)),
    Region::new("Down", NI, BoundingBox::new(54.65, 54.02, -5.40, -6.30)),
    Region::new("Armagh", NI, BoundingBox::new(54.52, 54.02, -6.22, -6.80)),
    Region::new("Derry", NI, BoundingBox::new(55.25, 54.65, -6.50, -7.45)),
    Region::new("Tyrone", NI, BoundingBox::new(54.90, 54.35, -6.60, -7.95)),
    Region::new("Fermanagh", NI, BoundingBox::new(54.60, 54.10, -7.20, -8.20)),
    // ── Republic of Ireland: Ulster ──────────────────────────────────────
    Region::new("Cavan", IE, BoundingBox::new(54.20, 53.75, -6.75, -8.00)),
    Region::new("Monaghan", IE, BoundingBox::new(54.42, 53.90, -6.55, -7.35)),
    Region::new("Donegal", IE, BoundingBox::new(55.45, 54.45, -6.90, -8.80)),
    // ── England ──────────────────────────────────────────────────────────
    Region::new("Greater London", EN, BoundingBox::new(51.69, 51.28, 0.34, -0.51)),
    Region::new("Kent", EN, BoundingBox::new(51.48, 50.91, 1.45, 0.03)),
    Region::new("Surrey", EN, BoundingBox::new(51.47, 51.07, 0.06, -0.85)),
    Region::new("Essex", EN, BoundingBox::new(52.09, 51.45, 1.30, 0.02)),
    Region::new("Greater Manchester", EN, BoundingBox::new(53.69, 53.34, -1.91, -2.73)),
    Region::new("Merseyside", EN, BoundingBox::new(53.70, 53.30, -2.65, -3.20)),
    Region::new("West Midlands", EN, BoundingBox::new(52.66, 52.35, -1.42, -2.21)),
    Region::new("West Yorkshire", EN, BoundingBox::new(53.96, 53.51, -1.19, -2.17)),
    Region::new("Tyne and Wear", EN, BoundingBox::new(55.08, 54.78, -1.35, -1.83)),
    // border counties, ahead of the Scotland box that overlaps them
    Region::new("Cumbria", EN, BoundingBox::new(54.98, 54.04, -2.16, -3.64)),
    Region::new("Northumberland", EN, BoundingBox::new(55.81, 54.78, -1.46, -2.25)),
    Region::new("County Durham", EN, BoundingBox::new(54.92, 54.45, -1.24, -2.35)),
    Region::new("Bristol", EN, BoundingBox::new(51.55, 51.40, -2.50, -2.72)),
    Region::new("Cornwall", EN, BoundingBox::new(50.93, 49.95, -4.18, -5.75)),
    // ── Scotland & Wales ─────────────────────────────────────────────────
    Region::new("Scotland", SC, BoundingBox::new(60.90, 54.63, -0.70, -8.70)),
    Region::new("Wales", WA, BoundingBox::new(53.45, 51.35, -2.65, -5.35)),
];
