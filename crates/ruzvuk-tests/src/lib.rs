//! Ruzvuk End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the full generation flow:
//!
//! - Generation: request -> WAV file on disk
//! - Determinism: byte-identical output for a fixed seed
//! - CLI: generate then inspect through the command implementations
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ruzvuk-tests --release
//! ```
//!
//! Full-length renders are slow in debug builds.

pub mod determinism;
pub mod harness;
