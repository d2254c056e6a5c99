//! Best-location sampling policy
//!
//! Raw device fixes arrive in WGS-84 with a horizontal accuracy radius. The filter rejects
//! unusable fixes before they reach the transform, converts each accepted fix to GCJ-02
//! exactly once, and keeps the best converted fix seen so far. Stored fixes are `Gcj02`,
//! so nothing read back from the cache can be converted a second time.

use crate::{CoordError, Gcj02, Result, Wgs84};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the best-location filter
///
/// All distances are in meters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerConfig {
    /// Fixes with a worse (larger) horizontal accuracy are rejected outright.
    /// Default: 100m
    pub max_acceptable_accuracy: f64,
    /// A fix replaces the cached one if its accuracy is better by more than this.
    /// Default: 10m
    pub min_accuracy_improvement: f64,
    /// A fix at least as accurate as the cached one replaces it once it is farther
    /// away than this. Default: 10m
    pub distance_filter: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_acceptable_accuracy: 100.0,
            min_accuracy_improvement: 10.0,
            distance_filter: 10.0,
        }
    }
}

impl SamplerConfig {
    /// Check that every threshold is a finite, non-negative number of meters
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("max_acceptable_accuracy", self.max_acceptable_accuracy),
            ("min_accuracy_improvement", self.min_accuracy_improvement),
            ("distance_filter", self.distance_filter),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CoordError::InvalidConfig(format!(
                    "{name} must be a finite, non-negative number of meters, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// A raw fix as reported by the device
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocationSample {
    pub coord: Wgs84,
    /// Radius of uncertainty in meters. Negative means the fix is invalid.
    pub horizontal_accuracy: f64,
}

impl LocationSample {
    pub fn new(coord: Wgs84, horizontal_accuracy: f64) -> Self {
        Self {
            coord,
            horizontal_accuracy,
        }
    }
}

/// A fix after its single forward conversion
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvertedLocation {
    pub coord: Gcj02,
    /// Carried over unchanged from the raw sample
    pub horizontal_accuracy: f64,
}

/// Outcome of offering an acceptable sample to the filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleDecision {
    /// First accepted fix
    Initialized,
    /// Replaced the cached fix, being more accurate by `by` meters
    AccuracyImproved { by: f64 },
    /// Replaced the cached fix after moving `distance` meters with no loss of accuracy
    Moved { distance: f64 },
    /// The cached fix is better; nothing changed
    Ignored,
}

impl SampleDecision {
    /// Whether the offered sample became the new best fix
    #[inline]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SampleDecision::Ignored)
    }
}

/// Keeps the best converted fix out of a stream of raw samples
#[derive(Debug, Clone)]
pub struct BestLocationFilter {
    config: SamplerConfig,
    best: Option<ConvertedLocation>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl BestLocationFilter {
    /// Create a new filter with the given configuration
    pub fn new(config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, best: None })
    }

    /// Offer a raw sample to the filter
    ///
    /// # Returns
    /// The decision taken for an acceptable sample, or an error if the sample was rejected
    /// before conversion. Rejected samples never touch the cached fix.
    pub fn offer(&mut self, sample: LocationSample) -> Result<SampleDecision> {
        let (lat, lon) = (sample.coord.lat(), sample.coord.lon());
        if !lat.is_finite() || !lon.is_finite() {
            tracing::warn!("Location sample rejected: invalid coordinate ({}, {})", lat, lon);
            return Err(CoordError::InvalidCoordinate { lat, lon });
        }

        let accuracy = sample.horizontal_accuracy;
        if !accuracy.is_finite() || accuracy < 0.0 {
            tracing::warn!("Location sample rejected: invalid accuracy {}", accuracy);
            return Err(CoordError::InvalidAccuracy(accuracy));
        }
        if accuracy > self.config.max_acceptable_accuracy {
            tracing::warn!("Location sample rejected: accuracy too poor ({}m)", accuracy);
            return Err(CoordError::AccuracyTooPoor {
                accuracy,
                max: self.config.max_acceptable_accuracy,
            });
        }

        let converted = ConvertedLocation {
            coord: sample.coord.to_gcj02(),
            horizontal_accuracy: accuracy,
        };

        let Some(cached) = self.best else {
            tracing::info!(
                "Location initialized at {} with accuracy {}m",
                converted.coord,
                accuracy
            );
            self.best = Some(converted);
            return Ok(SampleDecision::Initialized);
        };

        let improvement = cached.horizontal_accuracy - accuracy;
        if improvement > self.config.min_accuracy_improvement {
            tracing::debug!("Location updated: accuracy improved by {}m", improvement);
            self.best = Some(converted);
            return Ok(SampleDecision::AccuracyImproved { by: improvement });
        }

        let distance = converted.coord.distance_to(&cached.coord);
        if distance > self.config.distance_filter && accuracy <= cached.horizontal_accuracy {
            tracing::debug!("Location updated: moved {}m with acceptable accuracy", distance);
            self.best = Some(converted);
            return Ok(SampleDecision::Moved { distance });
        }

        tracing::debug!(
            "Location sample ignored: cached fix is better ({}m vs {}m)",
            cached.horizontal_accuracy,
            accuracy
        );
        Ok(SampleDecision::Ignored)
    }

    /// The best fix accepted so far, already in GCJ-02
    #[inline]
    pub fn best(&self) -> Option<ConvertedLocation> {
        self.best
    }

    /// Forget the cached fix
    pub fn reset(&mut self) {
        self.best = None;
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }
}
