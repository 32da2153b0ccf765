//! Ruzvuk CLI library.
//!
//! This crate provides the command implementations behind the `ruzvuk`
//! binary: request loading, generation, WAV inspection, and table listings.

pub mod commands;
pub mod input;
pub mod logging;
