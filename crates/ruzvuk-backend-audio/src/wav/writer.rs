//! WAV header and PCM byte encoding.

use std::io::{self, Write};

use super::format::{WavFormat, HEADER_SIZE};

/// Builds the 44-byte header for `data_size` bytes of PCM data.
pub fn wav_header(format: &WavFormat, data_size: u32) -> [u8; HEADER_SIZE] {
    // Total file size minus 8 bytes for the RIFF id and size
    let riff_size = 36u32.saturating_add(data_size);

    let mut header = [0u8; HEADER_SIZE];
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&riff_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // Chunk size (16 for PCM)
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // Audio format (1 = PCM)
    header[22..24].copy_from_slice(&format.channels.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    header[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());
    header
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("PCM data of {} bytes exceeds the WAV size limit", pcm_data.len()),
        )
    })?;
    writer.write_all(&wav_header(format, data_size))?;
    writer.write_all(pcm_data)
}

/// Builds a complete WAV file in memory.
///
/// `pcm_data` must fit the 32-bit RIFF size field; the request limits keep
/// every render well under it.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let data_size = u32::try_from(pcm_data.len()).unwrap_or(u32::MAX);
    let mut buffer = Vec::with_capacity(HEADER_SIZE + pcm_data.len());
    buffer.extend_from_slice(&wav_header(format, data_size));
    buffer.extend_from_slice(pcm_data);
    buffer
}

/// Encodes samples as little-endian 16-bit PCM bytes.
pub fn pcm16_to_bytes(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}
