//! Error types for the audio backend.

use modfx_spec::{BackendError, UnknownShape, ValidationError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis, analysis or effect processing.
///
/// Every variant is a precondition failure: operations check their inputs up
/// front and never return partial output.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Frequency outside `(0, sample_rate / 2)`.
    #[error("invalid frequency: {freq} Hz (must be in (0, {nyquist}))")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
        /// Nyquist frequency for the requested sample rate.
        nyquist: f64,
    },

    /// Phase outside `[-2pi, 2pi]`.
    #[error("invalid phase: {phase} rad (must be in [-2pi, 2pi])")]
    InvalidPhase {
        /// The invalid phase.
        phase: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Shape name not recognized.
    #[error("unsupported shape '{name}'")]
    UnsupportedShape {
        /// The rejected name.
        name: String,
    },

    /// Buffer or per-item parameter has the wrong dimensions.
    #[error("shape mismatch for '{name}': expected {expected}, found {found}")]
    ShapeMismatch {
        /// What was being checked.
        name: String,
        /// Expected dimensions.
        expected: String,
        /// Actual dimensions.
        found: String,
    },

    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    Config(#[from] ValidationError),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a shape mismatch error.
    pub fn shape_mismatch(
        name: impl Into<String>,
        expected: impl ToString,
        found: impl ToString,
    ) -> Self {
        Self::ShapeMismatch {
            name: name.into(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

impl From<UnknownShape> for AudioError {
    fn from(err: UnknownShape) -> Self {
        Self::UnsupportedShape { name: err.0 }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidFrequency { .. } => "AUDIO_001",
            AudioError::InvalidPhase { .. } => "AUDIO_002",
            AudioError::InvalidParameter { .. } => "AUDIO_003",
            AudioError::UnsupportedShape { .. } => "AUDIO_004",
            AudioError::ShapeMismatch { .. } => "AUDIO_005",
            AudioError::Config(_) => "AUDIO_006",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("feedback", "must be in [0, 1)");
        assert!(err.to_string().contains("feedback"));
        assert!(err.to_string().contains("[0, 1)"));
        assert_eq!(err.code(), "AUDIO_003");
    }

    #[test]
    fn test_unknown_shape_conversion() {
        let err = AudioError::from(UnknownShape("sine".to_string()));
        assert!(matches!(err, AudioError::UnsupportedShape { ref name } if name == "sine"));
        assert_eq!(err.category(), "audio");
    }

    #[test]
    fn test_shape_mismatch_message() {
        let err = AudioError::shape_mismatch("mix", "4 values", 3);
        assert_eq!(
            err.to_string(),
            "shape mismatch for 'mix': expected 4 values, found 3"
        );
    }
}
