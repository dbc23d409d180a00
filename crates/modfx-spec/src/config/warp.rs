//! Time-warp and reshaping configuration.

use serde::{Deserialize, Serialize};

use super::ParamRange;
use crate::error::ValidationError;
use crate::validation::{validate_non_negative, validate_positive, validate_unit_interval};

/// Per-segment stretch amounts for quasi-periodic warping.
///
/// Each inter-corner segment is shrunk by a fraction from `[l_min, l_max]`
/// with probability `lr_split`, otherwise grown by a fraction from
/// `[r_min, r_max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuasiPeriodicConfig {
    /// Minimum shrink fraction.
    pub l_min: f64,
    /// Maximum shrink fraction.
    pub l_max: f64,
    /// Minimum grow fraction.
    pub r_min: f64,
    /// Maximum grow fraction.
    pub r_max: f64,
    /// Probability of shrinking a segment.
    pub lr_split: f64,
}

impl Default for QuasiPeriodicConfig {
    fn default() -> Self {
        Self {
            l_min: 0.2,
            l_max: 0.2,
            r_min: 0.2,
            r_max: 0.2,
            lr_split: 0.5,
        }
    }
}

impl QuasiPeriodicConfig {
    /// Checks that every fraction is in range and the ranges are ordered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ParamRange::new(self.l_min, self.l_max).validate_with("l", validate_unit_interval)?;
        ParamRange::new(self.r_min, self.r_max).validate_with("r", validate_non_negative)?;
        validate_unit_interval("lr_split", self.lr_split)
    }
}

/// Exponent ranges for concave/convex reshaping of a triangle wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConcaveConvexConfig {
    /// Exponent range used for concave segments.
    pub concave: ParamRange,
    /// Exponent range used for convex segments.
    pub convex: ParamRange,
    /// Probability that a segment is concave.
    pub concave_prob: f64,
}

impl Default for ConcaveConvexConfig {
    fn default() -> Self {
        Self {
            concave: ParamRange::new(0.2, 1.0),
            convex: ParamRange::new(1.0, 3.0),
            concave_prob: 0.5,
        }
    }
}

impl ConcaveConvexConfig {
    /// Exponents must be strictly positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.concave.validate_with("concave", validate_positive)?;
        self.convex.validate_with("convex", validate_positive)?;
        validate_unit_interval("concave_prob", self.concave_prob)
    }
}

/// Corner stretcher settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StretchConfig {
    /// Signals with more corners than this are returned unstretched.
    pub max_n_corners: usize,
    /// Moving-average window applied before corner detection.
    pub smooth_n_frames: usize,
}

impl Default for StretchConfig {
    fn default() -> Self {
        Self {
            max_n_corners: 10,
            smooth_n_frames: 32,
        }
    }
}

impl StretchConfig {
    /// The smoothing window must hold at least one frame.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.smooth_n_frames == 0 {
            return Err(ValidationError::new(
                "smooth_n_frames",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
