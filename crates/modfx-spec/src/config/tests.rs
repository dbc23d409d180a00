//! Configuration unit tests.

use pretty_assertions::assert_eq;

use super::*;
use crate::error::ConfigError;
use crate::shape::Shape;

#[test]
fn test_defaults_are_valid() {
    assert!(RandModSigConfig::new(0.5, 3.0).validate().is_ok());
    assert!(QuasiPeriodicConfig::default().validate().is_ok());
    assert!(ConcaveConvexConfig::default().validate().is_ok());
    assert!(StretchConfig::default().validate().is_ok());
    assert!(CornerPolicy::default().validate().is_ok());
    assert!(FlangerConfig::flanger().validate().is_ok());
    assert!(FlangerConfig::chorus().validate().is_ok());
}

#[test]
fn test_rand_config_defaults_from_json() {
    let config: RandModSigConfig =
        serde_json::from_str(r#"{"freq_min": 0.5, "freq_max": 2.0}"#).unwrap();
    assert_eq!(config.shapes, Shape::RANDOM_DEFAULTS.to_vec());
    assert_eq!(config.phase_error, 0.5);
    assert_eq!(config.freq_error, 0.25);
}

#[test]
fn test_rand_config_rejects_inverted_bounds() {
    let err = RandModSigConfig::new(3.0, 1.0).validate().unwrap_err();
    assert_eq!(err.path, "freq_min");
}

#[test]
fn test_rand_config_rejects_empty_shapes() {
    let mut config = RandModSigConfig::new(0.5, 1.0);
    config.shapes.clear();
    assert_eq!(config.validate().unwrap_err().path, "shapes");
}

#[test]
fn test_quasi_periodic_rejects_unordered_range() {
    let config = QuasiPeriodicConfig {
        l_min: 0.3,
        l_max: 0.1,
        ..Default::default()
    };
    assert_eq!(config.validate().unwrap_err().path, "l");
}

#[test]
fn test_range_errors_carry_field_path() {
    use crate::validation::validate_unit_interval;

    let err = ParamRange::new(0.2, 1.5)
        .validate_with("depth", validate_unit_interval)
        .unwrap_err();
    assert_eq!(err.path, "depth.max");
    assert_eq!(err.message, "must be in [0, 1], got 1.5");

    let err = ParamRange::new(0.8, 0.2)
        .validate_with("depth", validate_unit_interval)
        .unwrap_err();
    assert_eq!(err.path, "depth");
}

#[test]
fn test_concave_convex_rejects_zero_exponent() {
    let config = ConcaveConvexConfig {
        concave: ParamRange::new(0.0, 1.0),
        ..Default::default()
    };
    assert_eq!(config.validate().unwrap_err().path, "concave.min");
}

#[test]
fn test_stretch_rejects_empty_window() {
    let config = StretchConfig {
        smooth_n_frames: 0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_corner_policy_rejects_inverted_counts() {
    let policy = CornerPolicy {
        min_top_corners: 4,
        max_top_corners: 2,
        ..Default::default()
    };
    assert_eq!(policy.validate().unwrap_err().path, "min_top_corners");
}

#[test]
fn test_flanger_from_json_applies_defaults() {
    let config =
        FlangerConfig::from_json(r#"{"max_min_delay_ms": 0.0, "max_lfo_delay_ms": 5.0}"#)
            .unwrap();
    assert_eq!(config, FlangerConfig::flanger());
}

#[test]
fn test_flanger_from_json_rejects_feedback_of_one() {
    let json = r#"{
        "max_min_delay_ms": 30.0,
        "max_lfo_delay_ms": 10.0,
        "feedback": {"min": 0.0, "max": 1.0}
    }"#;
    match FlangerConfig::from_json(json) {
        Err(ConfigError::Invalid(err)) => assert_eq!(err.path, "feedback.max"),
        other => panic!("expected feedback validation error, got {:?}", other),
    }
}

#[test]
fn test_flanger_from_json_rejects_unknown_fields() {
    let json = r#"{"max_min_delay_ms": 0.0, "max_lfo_delay_ms": 5.0, "rate": 1.0}"#;
    assert!(matches!(
        FlangerConfig::from_json(json),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_flanger_rejects_zero_total_delay() {
    let config = FlangerConfig::with_delays(0.0, 0.0);
    assert_eq!(config.validate().unwrap_err().path, "max_lfo_delay_ms");
}

#[test]
fn test_param_range_contains() {
    let range = ParamRange::new(0.2, 0.4);
    assert!(range.contains(0.2));
    assert!(range.contains(0.4));
    assert!(!range.contains(0.41));
    assert!(ParamRange::fixed(0.5).contains(0.5));
}
