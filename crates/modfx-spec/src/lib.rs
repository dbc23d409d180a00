//! modfx Configuration Library
//!
//! Declarative types shared by the mod-signal synthesis and delay-effect
//! backend: shape names, per-transform configuration, and value-domain
//! validation.
//!
//! # Example
//!
//! ```
//! use modfx_spec::{FlangerConfig, Shape};
//!
//! let config = FlangerConfig::from_json(
//!     r#"{"max_min_delay_ms": 30.0, "max_lfo_delay_ms": 10.0}"#,
//! ).unwrap();
//! assert_eq!(config, FlangerConfig::chorus());
//!
//! let shape: Shape = "tri".parse().unwrap();
//! assert_eq!(shape, Shape::Tri);
//! ```
//!
//! # Modules
//!
//! - [`config`]: configuration structs and parameter ranges
//! - [`error`]: validation and config errors, the `BackendError` trait
//! - [`shape`]: mod-signal shape names
//! - [`validation`]: scalar domain checks

pub mod config;
pub mod error;
pub mod shape;
pub mod validation;

pub use config::{
    ConcaveConvexConfig, CornerPolicy, FlangerConfig, ParamRange, QuasiPeriodicConfig,
    RandModSigConfig, StretchConfig,
};
pub use error::{BackendError, ConfigError, ValidationError};
pub use shape::{Shape, UnknownShape};
