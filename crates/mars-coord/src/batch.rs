//! Bulk conversion of coordinate slices and `geo` geometries
//!
//! Conversions are independent per point, so slices are split across the rayon pool.
//! Output order always matches input order.

use crate::{Gcj02, Wgs84, transform};
use geo::{Coord, LineString};
use rayon::prelude::*;

/// Convert a slice of WGS-84 coordinates to GCJ-02 in parallel
pub fn wgs84_to_gcj02_batch(coords: &[Wgs84]) -> Vec<Gcj02> {
    #[cfg(feature = "profiling")]
    profiling::scope!("batch::wgs84_to_gcj02");

    tracing::trace!("Converting {} points to GCJ-02", coords.len());
    coords.par_iter().map(|c| c.to_gcj02()).collect()
}

/// Convert a slice of GCJ-02 coordinates to WGS-84 in parallel (two-pass inverse)
pub fn gcj02_to_wgs84_batch(coords: &[Gcj02]) -> Vec<Wgs84> {
    #[cfg(feature = "profiling")]
    profiling::scope!("batch::gcj02_to_wgs84");

    tracing::trace!("Converting {} points to WGS-84", coords.len());
    coords.par_iter().map(|c| c.to_wgs84()).collect()
}

/// Convert every vertex of a WGS-84 line string (x = lon, y = lat) to GCJ-02
///
/// `geo` geometries carry no datum tag; the caller asserts the input is WGS-84.
pub fn line_string_to_gcj02(line: &LineString<f64>) -> LineString<f64> {
    map_line_string(line, transform::wgs84_to_gcj02)
}

/// Convert every vertex of a GCJ-02 line string (x = lon, y = lat) to WGS-84
pub fn line_string_to_wgs84(line: &LineString<f64>) -> LineString<f64> {
    map_line_string(line, transform::gcj02_to_wgs84)
}

fn map_line_string(line: &LineString<f64>, f: fn(f64, f64) -> (f64, f64)) -> LineString<f64> {
    let coords: Vec<Coord<f64>> = line
        .coords()
        .map(|c| {
            let (lat, lon) = f(c.y, c.x);
            Coord { x: lon, y: lat }
        })
        .collect();
    LineString::new(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_track(num_points: usize) -> Vec<Wgs84> {
        // A track wandering north-east out of Beijing
        (0..num_points)
            .map(|i| {
                let t = i as f64 / num_points as f64;
                Wgs84::new(39.9 + t * 0.5, 116.3 + t * 0.5 + (t * 30.0).sin() * 0.01)
            })
            .collect()
    }

    #[test]
    fn test_batch_matches_scalar() {
        let track = create_test_track(1_000);
        let converted = wgs84_to_gcj02_batch(&track);

        assert_eq!(converted.len(), track.len());
        for (wgs, gcj) in track.iter().zip(&converted) {
            assert_eq!(*gcj, wgs.to_gcj02());
        }
    }

    #[test]
    fn test_batch_roundtrip() {
        let track = create_test_track(500);
        let back = gcj02_to_wgs84_batch(&wgs84_to_gcj02_batch(&track));

        for (original, restored) in track.iter().zip(&back) {
            assert!(original.distance_to(restored) < 0.1);
        }
    }

    #[test]
    fn test_batch_empty() {
        assert!(wgs84_to_gcj02_batch(&[]).is_empty());
        assert!(gcj02_to_wgs84_batch(&[]).is_empty());
    }

    #[test]
    fn test_batch_mixed_region() {
        let points = [Wgs84::new(51.5074, -0.1278), Wgs84::new(31.2304, 121.4737)];
        let converted = wgs84_to_gcj02_batch(&points);
        assert_eq!((converted[0].lat(), converted[0].lon()), (51.5074, -0.1278));
        assert_ne!((converted[1].lat(), converted[1].lon()), (31.2304, 121.4737));
    }

    #[test]
    fn test_line_string_conversion() {
        let line = LineString::new(vec![
            Coord {
                x: 116.397428,
                y: 39.90923,
            },
            Coord {
                x: -0.1278,
                y: 51.5074,
            },
        ]);

        let gcj = line_string_to_gcj02(&line);
        assert_eq!(gcj.0.len(), 2);
        let (lat, lon) = transform::wgs84_to_gcj02(39.90923, 116.397428);
        assert_eq!(gcj.0[0], Coord { x: lon, y: lat });
        assert_eq!(gcj.0[1], line.0[1]);

        let back = line_string_to_wgs84(&gcj);
        assert!((back.0[0].x - 116.397428).abs() < 1e-6);
        assert!((back.0[0].y - 39.90923).abs() < 1e-6);
    }
}
