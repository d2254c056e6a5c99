//! Region gate deciding whether the GCJ-02 offset applies to a point
//!
//! The gate is a plain rectangle over mainland China's extent. It is a fast filter, not a
//! border test: Taiwan, the open sea inside the box and land across the borders of
//! neighbouring countries are all treated as "in region", while a few far-flung corners
//! of the mainland fall outside. Callers needing an exact border must test it themselves.

use geo::{Coord, Rect};

/// Southern edge of the region in degrees latitude (inclusive)
pub const MIN_LAT: f64 = 18.0;
/// Northern edge of the region in degrees latitude (inclusive)
pub const MAX_LAT: f64 = 54.0;
/// Western edge of the region in degrees longitude (inclusive)
pub const MIN_LON: f64 = 73.0;
/// Eastern edge of the region in degrees longitude (inclusive)
pub const MAX_LON: f64 = 135.0;

/// Check if a raw coordinate pair falls inside the offset region
///
/// # Arguments
/// * `lat` - Latitude in degrees
/// * `lon` - Longitude in degrees
///
/// Out-of-range or NaN input is accepted and evaluates to `false`.
#[inline(always)]
pub fn is_in_region(lat: f64, lon: f64) -> bool {
    (MIN_LAT..=MAX_LAT).contains(&lat) && (MIN_LON..=MAX_LON).contains(&lon)
}

/// The region as a `geo` rectangle (x = longitude, y = latitude)
pub fn region_rect() -> Rect<f64> {
    Rect::new(
        Coord {
            x: MIN_LON,
            y: MIN_LAT,
        },
        Coord {
            x: MAX_LON,
            y: MAX_LAT,
        },
    )
}
