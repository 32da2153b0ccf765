//! WAV file generation result type.

use super::format::{WavFormat, HEADER_SIZE};
use super::pcm::hash_pcm;
use super::writer::{pcm16_to_bytes, write_wav_to_vec};

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples per channel.
    pub num_frames: usize,
}

impl WavResult {
    /// Creates a WavResult from interleaved 16-bit samples.
    pub fn from_interleaved(samples: &[i16], format: WavFormat) -> Self {
        let pcm = pcm16_to_bytes(samples);
        let pcm_hash = hash_pcm(&pcm);
        let wav_data = write_wav_to_vec(&format, &pcm);
        let channels = format.channels.max(1);

        Self {
            wav_data,
            pcm_hash,
            channels: format.channels,
            sample_rate: format.sample_rate,
            num_frames: samples.len() / channels as usize,
        }
    }

    /// Size of the file in bytes, header included.
    pub fn file_bytes(&self) -> u64 {
        self.wav_data.len() as u64
    }

    /// Size of the PCM data chunk in bytes.
    pub fn pcm_bytes(&self) -> u64 {
        self.file_bytes().saturating_sub(HEADER_SIZE as u64)
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.sample_rate as f64
    }
}
