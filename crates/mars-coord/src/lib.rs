//! Mars Coord - WGS-84 / GCJ-02 Coordinate Conversion
//!
//! GCJ-02 ("Mars coordinates") is the obfuscated datum mandated for public maps in mainland
//! China. It shifts true WGS-84 positions by a nonlinear, location-dependent offset of a few
//! hundred meters. This library converts between the two datums and ships the sampling policy
//! a location consumer needs so that every device fix is converted exactly once.
//!
//! # Architecture
//!
//! - **[`is_in_region`]**: Coarse bounding-box gate deciding whether the offset applies
//! - **[`wgs84_to_gcj02`] / [`gcj02_to_wgs84`]**: Forward transform and two-pass inverse
//! - **[`Wgs84`] / [`Gcj02`]**: Nominal datum types, the only legal conversion points
//! - **[`batch`]**: Parallel slice conversion and `geo` line string conversion
//! - **[`BestLocationFilter`]**: Accuracy gate plus best-fix cache over converted locations
//!
//! # Numerical Characteristics
//!
//! - **Forward**: Deterministic, bit-identical for identical input
//! - **Inverse**: Two fixed-point passes, sub-micro-degree error inside the region
//! - **Outside the region**: Both directions are the identity

pub mod batch;
mod coord;
mod region;
mod sampler;
mod transform;

// Public API exports
pub use coord::{Gcj02, Wgs84};
pub use region::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON, is_in_region, region_rect};
pub use sampler::{
    BestLocationFilter, ConvertedLocation, LocationSample, SampleDecision, SamplerConfig,
};
pub use transform::{
    DEFAULT_PRECISION, MAX_INVERSE_ITERATIONS, gcj02_to_wgs84, gcj02_to_wgs84_precise,
    wgs84_to_gcj02,
};

/// Error types for the location policy layer
///
/// The conversion functions themselves are total and never fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordError {
    #[error("Invalid coordinate: ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("Invalid horizontal accuracy: {0}")]
    InvalidAccuracy(f64),

    #[error("Accuracy too poor: {accuracy}m exceeds {max}m")]
    AccuracyTooPoor { accuracy: f64, max: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CoordError>;
