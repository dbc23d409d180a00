//! Validation helpers shared by the configuration types and the DSP backend.

pub mod common;

pub use common::{
    validate_non_negative, validate_positive, validate_range, validate_unit_interval,
    validate_unit_interval_exclusive,
};
