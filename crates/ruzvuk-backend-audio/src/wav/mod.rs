//! Deterministic WAV file writer and reader.
//!
//! This module writes 16-bit PCM WAV files with a fixed 44-byte header and no
//! metadata chunks, so two renders of the same request are byte-identical.
//! The BLAKE3 hash of the PCM data identifies a render.

mod format;
mod info;
mod pcm;
mod result;
mod writer;


pub use format::{WavFormat, BITS_PER_SAMPLE, HEADER_SIZE};
pub use info::WavInfo;
pub use pcm::{compute_pcm_hash, extract_pcm_data, hash_pcm};
pub use result::WavResult;
pub use writer::{pcm16_to_bytes, wav_header, write_wav, write_wav_to_vec};
