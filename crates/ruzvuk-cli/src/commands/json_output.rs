//! JSON output types for machine-readable CLI output.
//!
//! Every command run with `--json` prints one [`CommandOutput`] envelope to
//! stdout, on success and on failure alike.

use anyhow::{Context, Result};
use ruzvuk_backend_audio::AudioError;
use ruzvuk_spec::{BackendError, GenerationError, RequestError};
use serde::{Deserialize, Serialize};

/// Error codes for CLI-level failures.
///
/// Engine failures pass their own codes through (`REQUEST_00x`, `AUDIO_00x`).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Any other CLI failure
    pub const CLI_ERROR: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "AUDIO_004")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Error category (if the error came from the engine)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            category: None,
        }
    }

    /// Sets the category for this error.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Converts any CLI error, keeping engine codes where present.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        if let Some(e) = err.downcast_ref::<GenerationError>() {
            return Self::new(e.code, e.message.clone()).with_category(e.category);
        }
        if let Some(e) = err.downcast_ref::<RequestError>() {
            return Self::from_backend(e, err);
        }
        if let Some(e) = err.downcast_ref::<AudioError>() {
            return Self::from_backend(e, err);
        }
        if err.downcast_ref::<std::io::Error>().is_some() {
            return Self::new(error_codes::FILE_READ, format!("{:#}", err));
        }
        Self::new(error_codes::CLI_ERROR, format!("{:#}", err))
    }

    fn from_backend(backend: &dyn BackendError, err: &anyhow::Error) -> Self {
        Self::new(backend.code(), format!("{:#}", err)).with_category(backend.category())
    }
}

/// JSON envelope printed by every command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            errors: vec![error],
            result: None,
        }
    }

    /// Builds the envelope for a command outcome.
    pub fn from_result(outcome: Result<T>) -> Self {
        match outcome {
            Ok(result) => Self::success(result),
            Err(e) => Self::failure(JsonError::from_anyhow(&e)),
        }
    }
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}
