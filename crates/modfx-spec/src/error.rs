//! Error types for configuration parsing and validation.

use thiserror::Error;

/// A single validation failure, tagged with the path of the offending field.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
    /// Dotted path of the field that failed (e.g. `flanger.feedback.max`).
    pub path: String,
    /// Human-readable error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error for the given field path.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns a copy of this error with `prefix.` prepended to the path.
    pub fn nested(self, prefix: &str) -> Self {
        Self {
            path: format!("{}.{}", prefix, self.path),
            message: self.message,
        }
    }
}

/// Errors that can occur while loading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the target type.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but a value is out of its domain.
    #[error("invalid config: {0}")]
    Invalid(#[from] ValidationError),
}

/// Common trait for backend errors.
///
/// Gives every error type in the workspace a stable code and a category so
/// callers can report failures uniformly.
///
/// # Example
///
/// ```ignore
/// use modfx_spec::error::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001". Codes are stable and can be
    /// used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

impl BackendError for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            ConfigError::Json(_) => "CONFIG_001",
            ConfigError::Invalid(_) => "CONFIG_002",
        }
    }

    fn category(&self) -> &'static str {
        "config"
    }
}
