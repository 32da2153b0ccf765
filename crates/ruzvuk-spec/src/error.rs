//! Error types for request validation and the backend error contract.

use thiserror::Error;

/// Errors raised while building or validating a generation request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// A parameter is missing, out of range, or cannot be coerced.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name as it appears in the request payload.
        name: String,
        /// Error message.
        message: String,
    },

    /// The request payload is not valid JSON or has the wrong shape.
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
}

impl RequestError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl BackendError for RequestError {
    fn code(&self) -> &'static str {
        match self {
            RequestError::InvalidParameter { .. } => "REQUEST_001",
            RequestError::Json(_) => "REQUEST_002",
        }
    }

    fn category(&self) -> &'static str {
        "request"
    }
}

/// Trait for errors that can be reported as a [`GenerationError`].
///
/// Every crate that participates in generation implements this for its own
/// error enum so callers get a stable code and category regardless of which
/// stage failed.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001" or "REQUEST_002". These codes
    /// are stable and can be matched on programmatically.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

/// The single opaque error returned by the generation entry point.
///
/// Captures the code, message, and category of whatever failed, and keeps the
/// original error as its `source()`.
#[derive(Debug)]
pub struct GenerationError {
    /// The error code (e.g., "AUDIO_004", "REQUEST_001").
    pub code: &'static str,
    /// The human-readable error message.
    pub message: String,
    /// The error category (e.g., "audio", "request").
    pub category: &'static str,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl GenerationError {
    /// Create a `GenerationError` from any `BackendError` implementor.
    pub fn from_backend<E: BackendError + Send + Sync + 'static>(err: E) -> Self {
        Self {
            code: err.code(),
            message: err.message(),
            category: err.category(),
            source: Some(Box::new(err)),
        }
    }

    /// Create a `GenerationError` with explicit values and no source.
    pub fn new(code: &'static str, message: impl Into<String>, category: &'static str) -> Self {
        Self {
            code,
            message: message.into(),
            category,
            source: None,
        }
    }
}

impl From<RequestError> for GenerationError {
    fn from(err: RequestError) -> Self {
        Self::from_backend(err)
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
