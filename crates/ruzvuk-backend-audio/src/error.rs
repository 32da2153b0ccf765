//! Error types for audio backend.

use ruzvuk_spec::{BackendError, GenerationError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio generation.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// A buffer reached the master bus in a state that cannot be mixed
    /// (empty, mismatched lengths, non-finite peak).
    #[error("degenerate buffer: {message}")]
    Degenerate {
        /// Error message.
        message: String,
    },

    /// Writing the output file failed.
    #[error("failed to write {}: {source}", path.display())]
    Encoding {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A byte buffer is not a readable PCM WAV file.
    #[error("invalid WAV data: {message}")]
    InvalidWav {
        /// Error message.
        message: String,
    },
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a degenerate buffer error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }

    /// Creates an invalid WAV error.
    pub fn invalid_wav(message: impl Into<String>) -> Self {
        Self::InvalidWav {
            message: message.into(),
        }
    }

    /// Creates an encoding error for `path`.
    pub fn encoding(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Encoding {
            path: path.into(),
            source,
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidParameter { .. } => "AUDIO_001",
            AudioError::InvalidDuration { .. } => "AUDIO_002",
            AudioError::Degenerate { .. } => "AUDIO_003",
            AudioError::Encoding { .. } => "AUDIO_004",
            AudioError::InvalidWav { .. } => "AUDIO_005",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

impl From<AudioError> for GenerationError {
    fn from(err: AudioError) -> Self {
        GenerationError::from_backend(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("tempo_bpm", "must be positive");
        assert!(err.to_string().contains("tempo_bpm"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_encoding_error_mentions_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AudioError::encoding("/tmp/out.wav", io);
        assert!(err.to_string().contains("/tmp/out.wav"));
        assert_eq!(err.code(), "AUDIO_004");
    }

    #[test]
    fn test_into_generation_error() {
        let err: GenerationError = AudioError::degenerate("empty mix").into();
        assert_eq!(err.code, "AUDIO_003");
        assert_eq!(err.category, "audio");
        assert!(err.message.contains("empty mix"));
    }
}
