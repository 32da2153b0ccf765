//! Reading back a WAV file.

use super::format::WavFormat;
use super::pcm::{find_chunk, hash_pcm};
use crate::error::{AudioError, AudioResult};

/// Summary of a 16-bit PCM WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct WavInfo {
    /// Format from the `fmt ` chunk.
    pub format: WavFormat,
    /// Samples per channel.
    pub num_frames: usize,
    /// Largest absolute sample value.
    pub peak_sample: i32,
    /// Size of the PCM data chunk in bytes.
    pub pcm_bytes: usize,
    /// BLAKE3 hash of the PCM data chunk.
    pub pcm_hash: String,
}

impl WavInfo {
    /// Parses a complete WAV file.
    ///
    /// Only uncompressed 16-bit PCM is accepted.
    pub fn parse(wav_data: &[u8]) -> AudioResult<Self> {
        let fmt = find_chunk(wav_data, b"fmt ")
            .ok_or_else(|| AudioError::invalid_wav("missing RIFF/WAVE header or fmt chunk"))?;
        if fmt.len() < 16 {
            return Err(AudioError::invalid_wav(format!(
                "fmt chunk is {} bytes, expected at least 16",
                fmt.len()
            )));
        }

        let audio_format = u16::from_le_bytes([fmt[0], fmt[1]]);
        if audio_format != 1 {
            return Err(AudioError::invalid_wav(format!(
                "unsupported audio format {} (only PCM is supported)",
                audio_format
            )));
        }
        let format = WavFormat {
            channels: u16::from_le_bytes([fmt[2], fmt[3]]),
            sample_rate: u32::from_le_bytes([fmt[4], fmt[5], fmt[6], fmt[7]]),
            bits_per_sample: u16::from_le_bytes([fmt[14], fmt[15]]),
        };
        if format.bits_per_sample != 16 {
            return Err(AudioError::invalid_wav(format!(
                "unsupported bit depth {}",
                format.bits_per_sample
            )));
        }
        if format.channels == 0 || format.sample_rate == 0 {
            return Err(AudioError::invalid_wav("zero channels or sample rate"));
        }
        let block_align = format.checked_block_align().ok_or_else(|| {
            AudioError::invalid_wav(format!(
                "{} channels overflow the block align field",
                format.channels
            ))
        })?;

        let pcm = find_chunk(wav_data, b"data")
            .ok_or_else(|| AudioError::invalid_wav("missing or truncated data chunk"))?;

        let peak_sample = pcm
            .chunks_exact(2)
            .map(|b| (i16::from_le_bytes([b[0], b[1]]) as i32).abs())
            .max()
            .unwrap_or(0);

        Ok(Self {
            format,
            num_frames: pcm.len() / block_align as usize,
            peak_sample,
            pcm_bytes: pcm.len(),
            pcm_hash: hash_pcm(pcm),
        })
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.format.sample_rate as f64
    }
}
