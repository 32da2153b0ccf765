//! Building a generation request from a JSON file and command-line flags.

use anyhow::{Context, Result};
use ruzvuk_spec::{GenerationRequest, RawRequest};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Request fields given on the command line.
///
/// Every field is optional; a set field overrides the JSON file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOverrides {
    /// Genre text.
    pub genre: Option<String>,
    /// Mood text.
    pub mood: Option<String>,
    /// Instrument text.
    pub instrument: Option<String>,
    /// Length in minutes.
    pub length: Option<u32>,
    /// Tempo in BPM.
    pub tempo: Option<u32>,
    /// Free-text description.
    pub description: Option<String>,
    /// Random seed.
    pub seed: Option<u32>,
}

impl RequestOverrides {
    /// Applies the set fields on top of `raw`.
    pub fn apply(self, mut raw: RawRequest) -> RawRequest {
        if self.genre.is_some() {
            raw.genre = self.genre;
        }
        if self.mood.is_some() {
            raw.mood = self.mood;
        }
        if self.instrument.is_some() {
            raw.instrument = self.instrument;
        }
        if let Some(length) = self.length {
            raw.length = Some(Value::from(length));
        }
        if let Some(tempo) = self.tempo {
            raw.tempo = Some(Value::from(tempo));
        }
        if self.description.is_some() {
            raw.description = self.description;
        }
        if self.seed.is_some() {
            raw.seed = self.seed;
        }
        raw
    }
}

/// Loads a JSON request payload.
pub fn load_raw_request(path: &Path) -> Result<RawRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read request file: {}", path.display()))?;
    RawRequest::from_json(&content)
        .with_context(|| format!("failed to parse request file: {}", path.display()))
}

/// Builds the final request from an optional file and flag overrides.
pub fn build_request(
    request_path: Option<&Path>,
    overrides: RequestOverrides,
) -> Result<GenerationRequest> {
    let raw = match request_path {
        Some(path) => load_raw_request(path)?,
        None => RawRequest::default(),
    };
    Ok(overrides.apply(raw).into_request()?)
}
