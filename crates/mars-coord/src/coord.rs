//! Nominal coordinate types for the two datums
//!
//! `Wgs84` and `Gcj02` share a shape but not a meaning. Keeping them apart at the type level
//! makes the conversion methods the only way from one to the other, so a stored GCJ-02 value
//! can never be fed back into the forward transform by accident.

use crate::region::is_in_region;
use crate::transform;
use geo::{Coord, Distance, Haversine, Point};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the WGS-84 datum, as reported by GPS hardware
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wgs84 {
    lat: f64,
    lon: f64,
}

/// A position in the GCJ-02 datum, as drawn by mainland Chinese map providers
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gcj02 {
    lat: f64,
    lon: f64,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Wgs84 {
    /// Create a WGS-84 coordinate from degrees. No range validation is done.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Interpret a `geo` point (x = longitude, y = latitude) as WGS-84
    #[inline]
    pub fn from_point(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Whether the GCJ-02 offset applies at this position
    #[inline]
    pub fn is_in_region(&self) -> bool {
        is_in_region(self.lat, self.lon)
    }

    /// Apply the forward transform
    ///
    /// Consumes `self`: a raw fix should be converted once, right after acquisition.
    #[inline]
    pub fn to_gcj02(self) -> Gcj02 {
        let (lat, lon) = transform::wgs84_to_gcj02(self.lat, self.lon);
        Gcj02 { lat, lon }
    }

    /// Great-circle distance in meters to another WGS-84 coordinate
    #[inline]
    pub fn distance_to(&self, other: &Wgs84) -> f64 {
        Haversine.distance(Point::from(*self), Point::from(*other))
    }
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Gcj02 {
    /// Create a GCJ-02 coordinate from degrees. No range validation is done.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Interpret a `geo` point (x = longitude, y = latitude) as GCJ-02
    #[inline]
    pub fn from_point(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Whether this position lies inside the offset region
    #[inline]
    pub fn is_in_region(&self) -> bool {
        is_in_region(self.lat, self.lon)
    }

    /// Apply the two-pass inverse transform
    #[inline]
    pub fn to_wgs84(self) -> Wgs84 {
        let (lat, lon) = transform::gcj02_to_wgs84(self.lat, self.lon);
        Wgs84 { lat, lon }
    }

    /// Apply the iterative inverse until updates fall below `threshold` degrees
    #[inline]
    pub fn to_wgs84_precise(self, threshold: f64) -> Wgs84 {
        let (lat, lon) = transform::gcj02_to_wgs84_precise(self.lat, self.lon, threshold);
        Wgs84 { lat, lon }
    }

    /// Great-circle distance in meters to another GCJ-02 coordinate
    #[inline]
    pub fn distance_to(&self, other: &Gcj02) -> f64 {
        Haversine.distance(Point::from(*self), Point::from(*other))
    }
}

impl fmt::Display for Wgs84 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

impl fmt::Display for Gcj02 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

impl From<Wgs84> for Point<f64> {
    fn from(value: Wgs84) -> Self {
        Point::new(value.lon, value.lat)
    }
}

impl From<Wgs84> for Coord<f64> {
    fn from(value: Wgs84) -> Self {
        Coord {
            x: value.lon,
            y: value.lat,
        }
    }
}

impl From<Gcj02> for Point<f64> {
    fn from(value: Gcj02) -> Self {
        Point::new(value.lon, value.lat)
    }
}

impl From<Gcj02> for Coord<f64> {
    fn from(value: Gcj02) -> Self {
        Coord {
            x: value.lon,
            y: value.lat,
        }
    }
}
