//! Ruzvuk Audio Backend
//!
//! This crate turns a [`GenerationRequest`](ruzvuk_spec::GenerationRequest)
//! (genre, mood, instrument, length, tempo, description) into a mixed,
//! normalized, 16-bit stereo WAV file.
//!
//! # Pipeline
//!
//! ```text
//! genre ──► Scale ─────────────┐
//! instrument ──► InstrumentProfile ──► NoteSynthesizer ──► drums / bass / melody
//!                                                             │
//!                          Mixer (sum, reverb, stereo, normalize, quantize)
//!                                                             │
//!                                                   WAV writer ──► file
//! ```
//!
//! # Randomness
//!
//! Drums are a pure function of duration and tempo. Bass and melody draw from
//! a PCG32 generator that is passed explicitly to each track generator; when
//! the request carries a seed the whole render is reproducible, otherwise a
//! seed is drawn from OS entropy and reported in the result.
//!
//! # Example
//!
//! ```ignore
//! use ruzvuk_backend_audio::generate;
//! use ruzvuk_spec::GenerationRequest;
//!
//! let request = GenerationRequest::builder()
//!     .genre("pop")
//!     .mood("joy")
//!     .length_minutes(1)
//!     .tempo_bpm(120)
//!     .build()?;
//! let result = generate(&request, "generated")?;
//! println!("{} ({} bytes)", result.filename, result.file_bytes);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] / [`render()`] - Entry points (to disk / in memory)
//! - [`scale`] - Genre to note frequencies
//! - [`instrument`] - Instrument profiles
//! - [`oscillator`] - Phase-aligned waveform functions
//! - [`envelope`] - Overwrite-order ADSR curve
//! - [`note`] - Additive note synthesis
//! - [`tracks`] - Drum, bass, and melody generators
//! - [`mixer`] - Master bus: sum, reverb, stereo image, normalization, quantization
//! - [`wav`] - WAV container writer and reader helpers
//! - [`rng`] - Seeded PCG32 source

pub mod buffer;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod instrument;
pub mod mixer;
pub mod note;
pub mod oscillator;
pub mod rng;
pub mod scale;
pub mod tracks;
pub mod wav;

/// Sample rate shared by every buffer in a generation.
pub const SAMPLE_RATE: u32 = 44_100;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{generate, render, RenderOutput};
pub use wav::{WavFormat, WavResult};
