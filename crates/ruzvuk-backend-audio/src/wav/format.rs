//! WAV file format parameters.

/// Bits per sample for every file this crate writes.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Size of the canonical RIFF/fmt/data header.
pub const HEADER_SIZE: usize = 44;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Creates a stereo WAV format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per sample frame, or None if it does not fit the 16-bit header
    /// field or is zero.
    pub fn checked_block_align(&self) -> Option<u16> {
        self.channels
            .checked_mul(self.bytes_per_sample())
            .filter(|&align| align > 0)
    }

    /// Bytes per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
