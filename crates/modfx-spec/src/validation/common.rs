//! Common validation utilities.
//!
//! Scalar domain checks used by every config type and by the effect
//! parameter validation in the audio backend.

use crate::error::ValidationError;

fn require_finite(name: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(
            name,
            format!("must be finite, got {}", value),
        ));
    }
    Ok(())
}

/// Validate that a value is in [0, 1] (the unit interval).
///
/// # Example
/// ```
/// use modfx_spec::validation::common::validate_unit_interval;
///
/// assert!(validate_unit_interval("mix", 0.5).is_ok());
/// assert!(validate_unit_interval("mix", 1.0).is_ok());
/// assert!(validate_unit_interval("mix", 1.5).is_err());
/// ```
pub fn validate_unit_interval(name: &str, value: f64) -> Result<(), ValidationError> {
    require_finite(name, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::new(
            name,
            format!("must be in [0, 1], got {}", value),
        ));
    }
    Ok(())
}

/// Validate that a value is in [0, 1), i.e. strictly below one.
///
/// Feedback gains use this domain: a gain of exactly 1.0 makes the delay
/// loop unstable.
///
/// # Example
/// ```
/// use modfx_spec::validation::common::validate_unit_interval_exclusive;
///
/// assert!(validate_unit_interval_exclusive("feedback", 0.99).is_ok());
/// assert!(validate_unit_interval_exclusive("feedback", 1.0).is_err());
/// ```
pub fn validate_unit_interval_exclusive(name: &str, value: f64) -> Result<(), ValidationError> {
    require_finite(name, value)?;
    if !(0.0..1.0).contains(&value) {
        return Err(ValidationError::new(
            name,
            format!("must be in [0, 1), got {}", value),
        ));
    }
    Ok(())
}

/// Validate that a value is positive (> 0).
///
/// # Example
/// ```
/// use modfx_spec::validation::common::validate_positive;
///
/// assert!(validate_positive("sample_rate", 16000.0).is_ok());
/// assert!(validate_positive("sample_rate", 0.0).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> Result<(), ValidationError> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(ValidationError::new(
            name,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}

/// Validate that a value is non-negative (>= 0).
pub fn validate_non_negative(name: &str, value: f64) -> Result<(), ValidationError> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(ValidationError::new(
            name,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(())
}

/// Validate that a value is within a specified range [min, max].
///
/// # Example
/// ```
/// use modfx_spec::validation::common::validate_range;
///
/// assert!(validate_range("exponent", 2.0, 1.0, 3.0).is_ok());
/// assert!(validate_range("exponent", 5.0, 1.0, 3.0).is_err());
/// ```
pub fn validate_range(name: &str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    require_finite(name, value)?;
    if value < min || value > max {
        return Err(ValidationError::new(
            name,
            format!("must be in [{}, {}], got {}", min, max, value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_interval_bounds() {
        assert!(validate_unit_interval("depth", 0.0).is_ok());
        assert!(validate_unit_interval("depth", 1.0).is_ok());
        assert!(validate_unit_interval("depth", -0.01).is_err());
        assert!(validate_unit_interval("depth", f64::NAN).is_err());
    }

    #[test]
    fn test_unit_interval_exclusive_rejects_one() {
        let err = validate_unit_interval_exclusive("feedback", 1.0).unwrap_err();
        assert_eq!(err.path, "feedback");
        assert!(err.message.contains("[0, 1)"));
        assert!(validate_unit_interval_exclusive("feedback", 0.0).is_ok());
    }

    #[test]
    fn test_positive_rejects_infinity() {
        let err = validate_positive("freq", f64::INFINITY).unwrap_err();
        assert!(err.message.contains("finite"));
    }

    #[test]
    fn test_non_negative() {
        assert!(validate_non_negative("delay_ms", 0.0).is_ok());
        assert!(validate_non_negative("delay_ms", -1.0).is_err());
    }

    #[test]
    fn test_range_message() {
        let err = validate_range("concave", 0.1, 0.2, 1.0).unwrap_err();
        assert!(err.message.contains("[0.2, 1]"));
    }
}
