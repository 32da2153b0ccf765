//! Metadata describing a generated file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of a successful generation.
///
/// The WAV file at `path` is the only persisted artifact; this struct is what
/// the caller relays back (file name for the download route, sizes for display).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Deterministic file name (`master_<genre>_<mood>_<length>min_<tempo>bpm.wav`).
    pub filename: String,
    /// Full path of the written file.
    pub path: PathBuf,
    /// Size of the file on disk, header included.
    pub file_bytes: u64,
    /// Size of the PCM data chunk alone.
    pub pcm_bytes: u64,
    /// BLAKE3 hash of the PCM data chunk.
    pub pcm_hash: String,
    /// Seed used for the bass and melody random source.
    pub seed: u32,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Samples per channel.
    pub num_frames: usize,
}

impl GenerationResult {
    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.sample_rate as f64
    }
}
