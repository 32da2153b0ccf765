//! Test harness for running generations into a scratch directory.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use ruzvuk_spec::{GenerationError, GenerationRequest, GenerationResult, RawRequest};

/// A scratch output directory plus helpers.
pub struct TestHarness {
    /// Working directory for test outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Output directory used by [`TestHarness::generate`].
    pub fn out_dir(&self) -> PathBuf {
        self.path().join("generated")
    }

    /// Generates `request` into the output directory.
    pub fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        ruzvuk_backend_audio::generate(request, self.out_dir())
            .unwrap_or_else(|e| panic!("generation failed: {}", e))
    }

    /// Runs a raw JSON payload through coercion, validation, and generation.
    pub fn try_generate_json(
        &self,
        payload: &serde_json::Value,
    ) -> Result<GenerationResult, GenerationError> {
        let request = RawRequest::from_json(&payload.to_string())?.into_request()?;
        ruzvuk_backend_audio::generate(&request, self.out_dir())
    }

    /// Writes `json` as a request file and returns its path.
    pub fn write_request(&self, name: &str, json: &serde_json::Value) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, json.to_string()).expect("Failed to write request file");
        path
    }

    /// Lists file names in the output directory.
    pub fn output_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.out_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a seeded request.
pub fn seeded_request(
    genre: &str,
    instrument: &str,
    length: u32,
    tempo: u32,
    seed: u32,
) -> GenerationRequest {
    GenerationRequest::builder()
        .genre(genre)
        .mood("joy")
        .instrument(instrument)
        .length_minutes(length)
        .tempo_bpm(tempo)
        .seed(seed)
        .build()
        .expect("valid request")
}
