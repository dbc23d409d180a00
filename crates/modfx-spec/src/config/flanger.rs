//! Modulated delay (flanger/chorus) configuration.

use serde::{Deserialize, Serialize};

use super::ParamRange;
use crate::error::{ConfigError, ValidationError};
use crate::validation::{
    validate_non_negative, validate_unit_interval, validate_unit_interval_exclusive,
};

/// Delay ranges for the engine plus sampling ranges for its parameters.
///
/// `max_min_delay_ms` and `max_lfo_delay_ms` size the delay buffer. The five
/// parameter ranges are sampled once per batch item when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlangerConfig {
    /// Largest static delay in milliseconds.
    pub max_min_delay_ms: f64,
    /// Largest LFO-driven delay swing in milliseconds.
    pub max_lfo_delay_ms: f64,
    /// Feedback gain range, within [0, 1).
    #[serde(default = "default_feedback")]
    pub feedback: ParamRange,
    /// Fraction of `max_min_delay_ms` used as the static delay.
    #[serde(default = "default_unit")]
    pub min_delay_width: ParamRange,
    /// Fraction of `max_lfo_delay_ms` swept by the mod signal.
    #[serde(default = "default_unit")]
    pub width: ParamRange,
    /// Gain of the delayed signal added to the dry signal.
    #[serde(default = "default_unit")]
    pub depth: ParamRange,
    /// Dry/wet blend.
    #[serde(default = "default_unit")]
    pub mix: ParamRange,
}

fn default_feedback() -> ParamRange {
    ParamRange::new(0.0, 0.7)
}

fn default_unit() -> ParamRange {
    ParamRange::new(0.0, 1.0)
}

impl Default for FlangerConfig {
    fn default() -> Self {
        Self::flanger()
    }
}

impl FlangerConfig {
    /// Short delays: no static delay, up to 5 ms of sweep.
    pub fn flanger() -> Self {
        Self::with_delays(0.0, 5.0)
    }

    /// Longer delays: up to 30 ms static plus 10 ms of sweep.
    pub fn chorus() -> Self {
        Self::with_delays(30.0, 10.0)
    }

    /// Creates a config with the given delay bounds and default parameter ranges.
    pub fn with_delays(max_min_delay_ms: f64, max_lfo_delay_ms: f64) -> Self {
        Self {
            max_min_delay_ms,
            max_lfo_delay_ms,
            feedback: default_feedback(),
            min_delay_width: default_unit(),
            width: default_unit(),
            depth: default_unit(),
            mix: default_unit(),
        }
    }

    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the delay bounds and every parameter range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_non_negative("max_min_delay_ms", self.max_min_delay_ms)?;
        validate_non_negative("max_lfo_delay_ms", self.max_lfo_delay_ms)?;
        if self.max_min_delay_ms + self.max_lfo_delay_ms <= 0.0 {
            return Err(ValidationError::new(
                "max_lfo_delay_ms",
                "total delay must be positive",
            ));
        }
        self.feedback
            .validate_with("feedback", validate_unit_interval_exclusive)?;
        self.min_delay_width
            .validate_with("min_delay_width", validate_unit_interval)?;
        self.width.validate_with("width", validate_unit_interval)?;
        self.depth.validate_with("depth", validate_unit_interval)?;
        self.mix.validate_with("mix", validate_unit_interval)?;
        Ok(())
    }
}
