//! Output format and file naming.

use serde::{Deserialize, Serialize};

/// Output format (file type).
///
/// Only one container is produced: uncompressed 16-bit PCM WAV.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// WAV audio format.
    #[default]
    Wav,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Wav => "wav",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Builds the deterministic master file name.
///
/// `master_<genre>_<mood>_<length>min_<tempo>bpm.<ext>`, using the genre and
/// mood text exactly as the caller supplied it. Identical requests map to the
/// same name.
pub fn master_filename(
    genre: &str,
    mood: &str,
    length_minutes: u32,
    tempo_bpm: u32,
    format: OutputFormat,
) -> String {
    format!(
        "master_{}_{}_{}min_{}bpm.{}",
        genre,
        mood,
        length_minutes,
        tempo_bpm,
        format.extension()
    )
}
