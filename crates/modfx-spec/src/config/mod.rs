//! Configuration types for mod-signal synthesis, warping, validity checking
//! and the modulated delay effect.
//!
//! Every config is plain serde data with defaults matching the reference
//! training setup, plus a `validate()` that checks value domains before any
//! DSP runs.

mod corners;
mod flanger;
mod synthesis;
mod warp;

#[cfg(test)]
mod tests;

pub use corners::CornerPolicy;
pub use flanger::FlangerConfig;
pub use synthesis::RandModSigConfig;
pub use warp::{ConcaveConvexConfig, QuasiPeriodicConfig, StretchConfig};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An inclusive `[min, max]` range for a sampled value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl ParamRange {
    /// Creates a new range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Creates a degenerate range that always yields `value`.
    pub const fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Returns true if `value` lies in `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Checks both bounds with `check` and requires `min <= max`.
    pub fn validate_with(
        &self,
        name: &str,
        check: fn(&str, f64) -> Result<(), ValidationError>,
    ) -> Result<(), ValidationError> {
        check("min", self.min).map_err(|e| e.nested(name))?;
        check("max", self.max).map_err(|e| e.nested(name))?;
        if self.min > self.max {
            return Err(ValidationError::new(
                name,
                format!("min {} exceeds max {}", self.min, self.max),
            ));
        }
        Ok(())
    }
}
