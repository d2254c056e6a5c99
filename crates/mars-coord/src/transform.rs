//! Forward and inverse WGS-84 <-> GCJ-02 transforms
//!
//! The offset model is a fixed polynomial plus trigonometric warp centered on (35°N, 105°E),
//! scaled into degrees on the Krasovsky 1940 ellipsoid. Coefficients and the order of every
//! summation follow the published algorithm so results agree with other ports bit for bit.

use crate::region::is_in_region;
use std::f64::consts::PI;

/// Semi-major axis of the reference ellipsoid in meters
const A: f64 = 6378245.0;

/// First eccentricity squared of the reference ellipsoid
const EE: f64 = 0.00669342162296594323;

/// Longitude of the warp model's origin
const ORIGIN_LON: f64 = 105.0;

/// Latitude of the warp model's origin
const ORIGIN_LAT: f64 = 35.0;

/// Upper bound on iterations of [`gcj02_to_wgs84_precise`]
pub const MAX_INVERSE_ITERATIONS: usize = 30;

/// Convergence threshold in degrees used when the caller passes an unusable one
pub const DEFAULT_PRECISION: f64 = 1e-10;

/// Offset in degrees produced by the warp model for one point
#[derive(Debug, Clone, Copy)]
struct Offset {
    d_lat: f64,
    d_lon: f64,
}

fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lon(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Evaluate the warp at a point treated as WGS-84 and scale it into degrees
#[inline]
fn offset(lat: f64, lon: f64) -> Offset {
    let x = lon - ORIGIN_LON;
    let y = lat - ORIGIN_LAT;
    let raw_lat = transform_lat(x, y);
    let raw_lon = transform_lon(x, y);

    // Divide before multiplying; `to_radians()` rounds differently
    let rad_lat = lat / 180.0 * PI;
    let sin_lat = rad_lat.sin();
    let magic = 1.0 - EE * sin_lat * sin_lat;
    let sqrt_magic = magic.sqrt();

    Offset {
        d_lat: (raw_lat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrt_magic) * PI),
        d_lon: (raw_lon * 180.0) / (A / sqrt_magic * rad_lat.cos() * PI),
    }
}

/// Apply the forward model without the region gate
#[inline]
fn shift(lat: f64, lon: f64) -> (f64, f64) {
    let d = offset(lat, lon);
    (lat + d.d_lat, lon + d.d_lon)
}

/// One fixed-point refinement step of the inverse
///
/// `(lat, lon)` is the GCJ-02 target and `(w_lat, w_lon)` the current WGS-84 estimate.
#[inline]
fn refine(lat: f64, lon: f64, w_lat: f64, w_lon: f64) -> (f64, f64) {
    let (s_lat, s_lon) = shift(w_lat, w_lon);
    (lat - (s_lat - w_lat), lon - (s_lon - w_lon))
}

/// Convert a WGS-84 (GPS) coordinate to GCJ-02
///
/// # Arguments
/// * `lat` - WGS-84 latitude in degrees
/// * `lon` - WGS-84 longitude in degrees
///
/// # Returns
/// A tuple of GCJ-02 (latitude, longitude) in degrees. Points outside the region are
/// returned unchanged. Applying this twice to the same value corrupts it; convert once.
#[inline]
pub fn wgs84_to_gcj02(lat: f64, lon: f64) -> (f64, f64) {
    if !is_in_region(lat, lon) {
        return (lat, lon);
    }
    shift(lat, lon)
}

/// Convert a GCJ-02 coordinate back to WGS-84
///
/// The model has no closed-form inverse. The offset is evaluated at the input, subtracted,
/// then evaluated again at that estimate and subtracted once more. Inside the region the
/// result is within a few centimeters of the true inverse.
///
/// # Returns
/// A tuple of WGS-84 (latitude, longitude) in degrees
#[inline]
pub fn gcj02_to_wgs84(lat: f64, lon: f64) -> (f64, f64) {
    if !is_in_region(lat, lon) {
        return (lat, lon);
    }
    let (w_lat, w_lon) = refine(lat, lon, lat, lon);
    refine(lat, lon, w_lat, w_lon)
}

/// Convert a GCJ-02 coordinate back to WGS-84, iterating until converged
///
/// Runs the same fixed-point step as [`gcj02_to_wgs84`] until both coordinates move by
/// less than `threshold` degrees, or [`MAX_INVERSE_ITERATIONS`] steps have run. A
/// non-finite or non-positive threshold is replaced by [`DEFAULT_PRECISION`].
pub fn gcj02_to_wgs84_precise(lat: f64, lon: f64, threshold: f64) -> (f64, f64) {
    if !is_in_region(lat, lon) {
        return (lat, lon);
    }
    let threshold = if threshold.is_finite() && threshold > 0.0 {
        threshold
    } else {
        DEFAULT_PRECISION
    };

    let (mut w_lat, mut w_lon) = (lat, lon);
    for _ in 0..MAX_INVERSE_ITERATIONS {
        let (next_lat, next_lon) = refine(lat, lon, w_lat, w_lon);
        let converged =
            (next_lat - w_lat).abs() < threshold && (next_lon - w_lon).abs() < threshold;
        w_lat = next_lat;
        w_lon = next_lon;
        if converged {
            break;
        }
    }
    (w_lat, w_lon)
}
