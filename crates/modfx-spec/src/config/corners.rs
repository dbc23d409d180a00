//! Corner-count and spacing policy for accepting synthetic mod signals.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::validate_unit_interval;

/// Acceptance bounds used by the validity checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CornerPolicy {
    /// Minimum number of top corners.
    pub min_top_corners: usize,
    /// Maximum number of top corners.
    pub max_top_corners: usize,
    /// Minimum number of bottom corners.
    pub min_bottom_corners: usize,
    /// Maximum number of bottom corners.
    pub max_bottom_corners: usize,
    /// Minimum spacing between consecutive same-kind corners, as a fraction
    /// of the signal length.
    pub min_fraction_between_corners: f64,
}

impl Default for CornerPolicy {
    fn default() -> Self {
        Self {
            min_top_corners: 1,
            max_top_corners: 6,
            min_bottom_corners: 1,
            max_bottom_corners: 6,
            min_fraction_between_corners: 0.10,
        }
    }
}

impl CornerPolicy {
    /// Checks that count bounds are ordered and the spacing is a fraction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_top_corners > self.max_top_corners {
            return Err(ValidationError::new(
                "min_top_corners",
                format!(
                    "min {} exceeds max {}",
                    self.min_top_corners, self.max_top_corners
                ),
            ));
        }
        if self.min_bottom_corners > self.max_bottom_corners {
            return Err(ValidationError::new(
                "min_bottom_corners",
                format!(
                    "min {} exceeds max {}",
                    self.min_bottom_corners, self.max_bottom_corners
                ),
            ));
        }
        validate_unit_interval(
            "min_fraction_between_corners",
            self.min_fraction_between_corners,
        )
    }
}
