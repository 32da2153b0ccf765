//! PCM data extraction and hashing utilities.

/// Extracts PCM data from a WAV file buffer.
///
/// Walks the chunk list after the RIFF header, so files with extra chunks
/// before `data` are handled.
///
/// # Returns
/// PCM data if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    find_chunk(wav_data, b"data")
}

/// Finds the body of the first chunk with `id`.
pub(crate) fn find_chunk<'a>(wav_data: &'a [u8], id: &[u8; 4]) -> Option<&'a [u8]> {
    if wav_data.len() < 12 {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        let body_start = pos + 8;
        let body_end = body_start.checked_add(chunk_size)?;
        if chunk_id == id {
            return wav_data.get(body_start..body_end);
        }

        pos = body_end;
        // Align to word boundary
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}

/// Hashes raw PCM bytes with BLAKE3.
pub fn hash_pcm(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Computes the PCM hash of a WAV file.
///
/// # Returns
/// BLAKE3 hash of PCM data, or None if format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(hash_pcm)
}
