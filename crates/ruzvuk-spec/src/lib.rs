//! Ruzvuk Request Library
//!
//! This crate provides the types shared between the synthesis backend and its
//! callers: the generation request, its validation, the output naming rule,
//! the generation result, and the error types every backend reports through.
//!
//! # Example
//!
//! ```
//! use ruzvuk_spec::{GenerationRequest, Genre, InstrumentKind};
//!
//! let request = GenerationRequest::builder()
//!     .genre("Rock")
//!     .mood("joy")
//!     .instrument("electronic")
//!     .length_minutes(1)
//!     .tempo_bpm(120)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.genre(), Genre::Rock);
//! assert_eq!(request.instrument(), InstrumentKind::Electronic);
//! assert_eq!(request.output_filename(), "master_Rock_joy_1min_120bpm.wav");
//! ```
//!
//! # Modules
//!
//! - [`error`]: Request errors, the `BackendError` trait, and `GenerationError`
//! - [`output`]: Output format and file naming
//! - [`request`]: Genre/instrument enums and the validated request
//! - [`result`]: Metadata describing a generated file

pub mod error;
pub mod output;
pub mod request;
pub mod result;

// Re-export commonly used types at the crate root
pub use error::{BackendError, GenerationError, RequestError};
pub use output::{master_filename, OutputFormat};
pub use request::{
    GenerationRequest, GenerationRequestBuilder, Genre, InstrumentKind, RawRequest,
    MAX_LENGTH_MINUTES, MAX_TEMPO_BPM,
};
pub use result::GenerationResult;
