//! Randomized mod-signal synthesis configuration.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::shape::Shape;
use crate::validation::{validate_non_negative, validate_positive, validate_range};

fn default_shapes() -> Vec<Shape> {
    Shape::RANDOM_DEFAULTS.to_vec()
}

fn default_phase_error() -> f64 {
    0.5
}

fn default_freq_error() -> f64 {
    0.25
}

/// Bounds and jitter amounts for batched random mod-signal synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandModSigConfig {
    /// Lowest frequency in Hz; also the clamp floor for jittered frequencies.
    pub freq_min: f64,
    /// Highest frequency in Hz; also the clamp ceiling for jittered frequencies.
    pub freq_max: f64,
    /// Candidate shapes drawn from when no baseline shape is given.
    #[serde(default = "default_shapes")]
    pub shapes: Vec<Shape>,
    /// Additive phase jitter, as a fraction of pi.
    #[serde(default = "default_phase_error")]
    pub phase_error: f64,
    /// Multiplicative frequency jitter: factor drawn from `[1 - e, 1 + e]`.
    #[serde(default = "default_freq_error")]
    pub freq_error: f64,
}

impl RandModSigConfig {
    /// Creates a config for the given frequency bounds with default jitter.
    pub fn new(freq_min: f64, freq_max: f64) -> Self {
        Self {
            freq_min,
            freq_max,
            shapes: default_shapes(),
            phase_error: default_phase_error(),
            freq_error: default_freq_error(),
        }
    }

    /// Checks frequency bounds, jitter amounts and the shape list.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_positive("freq_min", self.freq_min)?;
        validate_positive("freq_max", self.freq_max)?;
        if self.freq_min > self.freq_max {
            return Err(ValidationError::new(
                "freq_min",
                format!(
                    "freq_min {} exceeds freq_max {}",
                    self.freq_min, self.freq_max
                ),
            ));
        }
        if self.shapes.is_empty() {
            return Err(ValidationError::new("shapes", "must not be empty"));
        }
        validate_non_negative("phase_error", self.phase_error)?;
        validate_range("freq_error", self.freq_error, 0.0, 1.0)?;
        Ok(())
    }
}
