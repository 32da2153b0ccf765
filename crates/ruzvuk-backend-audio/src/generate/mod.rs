//! Main entry point for audio generation.
//!
//! This module takes a [`GenerationRequest`] and renders it to a WAV file.

#[cfg(test)]
mod tests;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use rand_pcg::Pcg32;
use ruzvuk_spec::{GenerationError, GenerationRequest, GenerationResult, Genre, InstrumentKind};
use tracing::{debug, info};

use crate::error::{AudioError, AudioResult};
use crate::instrument::InstrumentProfile;
use crate::mixer::{
    apply_reverb, normalize_peak, quantize_pcm16, stereo_spread, Mixer, BASS_GAIN, DRUM_GAIN,
    MELODY_GAIN, NORMALIZE_TARGET, REVERB_DELAY_SECONDS,
};
use crate::rng::{create_rng, resolve_seed};
use crate::scale::Scale;
use crate::tracks::{BassGenerator, DrumGenerator, MelodyGenerator, TrackGenerator, TrackGrid};
use crate::wav::{WavFormat, WavResult};
use crate::SAMPLE_RATE;

/// A render held in memory.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// File name the render is saved under.
    pub filename: String,
    /// WAV file data.
    pub wav: WavResult,
    /// Seed used for bass and melody.
    pub seed: u32,
}

/// Renders a request without touching the filesystem.
///
/// When the request has no seed one is drawn from OS entropy and reported in
/// the output.
pub fn render(request: &GenerationRequest) -> Result<RenderOutput, GenerationError> {
    let seed = resolve_seed(request.seed());

    info!(
        genre = request.genre_name(),
        mood = request.mood(),
        instrument = request.instrument_name(),
        length_minutes = request.length_minutes(),
        tempo_bpm = request.tempo_bpm(),
        description_len = request.description().chars().count(),
        "starting generation"
    );
    debug!(seed, "resolved seed");

    let grid = TrackGrid::new(
        request.duration_seconds(),
        request.tempo_bpm() as f64,
        SAMPLE_RATE,
    )?;
    let wav = render_grid(&grid, request.genre(), request.instrument(), seed)?;

    Ok(RenderOutput {
        filename: request.output_filename(),
        wav,
        seed,
    })
}

/// Renders a request and writes it to `out_dir`.
///
/// The directory is created if needed. The file is written in place; if the
/// write fails, whatever part of it reached the disk is removed.
///
/// # Returns
/// Metadata of the written file
pub fn generate(
    request: &GenerationRequest,
    out_dir: impl AsRef<Path>,
) -> Result<GenerationResult, GenerationError> {
    let output = render(request)?;
    let out_dir = out_dir.as_ref();
    let path = out_dir.join(&output.filename);

    write_output(out_dir, &path, &output.wav.wav_data)?;

    info!(
        filename = %output.filename,
        bytes = output.wav.file_bytes(),
        "wrote master"
    );

    Ok(GenerationResult {
        filename: output.filename,
        path,
        file_bytes: output.wav.file_bytes(),
        pcm_bytes: output.wav.pcm_bytes(),
        pcm_hash: output.wav.pcm_hash,
        seed: output.seed,
        sample_rate: output.wav.sample_rate,
        channels: output.wav.channels,
        num_frames: output.wav.num_frames,
    })
}

/// Renders every track on `grid` and runs the master bus.
///
/// Drums, bass, and melody are generated in that order from one random
/// source seeded with `seed`.
pub fn render_grid(
    grid: &TrackGrid,
    genre: Genre,
    instrument: InstrumentKind,
    seed: u32,
) -> AudioResult<WavResult> {
    let scale = Scale::for_genre(genre);
    let profile = InstrumentProfile::for_kind(instrument);
    let mut rng = create_rng(seed);

    let mixer = render_tracks(grid, &scale, profile, &mut rng);
    let mut mix = mixer.mix_down()?;

    let delay = grid.offset(REVERB_DELAY_SECONDS);
    apply_reverb(&mut mix, delay);
    debug!(delay_samples = delay, "applied reverb");

    let mut interleaved = stereo_spread(&mix).interleave();
    let peak = normalize_peak(&mut interleaved, NORMALIZE_TARGET)?;
    debug!(peak, "normalized master");

    let pcm = quantize_pcm16(&interleaved);
    Ok(WavResult::from_interleaved(
        &pcm,
        WavFormat::stereo(grid.sample_rate()),
    ))
}

fn render_tracks(
    grid: &TrackGrid,
    scale: &Scale,
    profile: InstrumentProfile,
    rng: &mut Pcg32,
) -> Mixer {
    let drums = DrumGenerator::new().generate(grid, rng);
    let bass = BassGenerator::new(scale).generate(grid, rng);
    let melody = MelodyGenerator::new(scale, profile).generate(grid, rng);
    debug!(samples = grid.total_samples(), "generated tracks");

    let mut mixer = Mixer::new(grid.total_samples(), grid.sample_rate());
    mixer.add(melody, MELODY_GAIN);
    mixer.add(bass, BASS_GAIN);
    mixer.add(drums, DRUM_GAIN);
    mixer
}

fn write_output(out_dir: &Path, path: &Path, wav_data: &[u8]) -> AudioResult<()> {
    fs::create_dir_all(out_dir).map_err(|e| AudioError::encoding(out_dir, e))?;
    write_or_remove(path, |file| file.write_all(wav_data))
}

/// Creates `path` and fills it with `write`, removing the file if any step fails.
fn write_or_remove<F>(path: &Path, write: F) -> AudioResult<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let result = File::create(path).and_then(|mut file| write(&mut file));
    if let Err(e) = result {
        // Best effort: the file may not exist at all
        let _ = fs::remove_file(path);
        return Err(AudioError::encoding(path, e));
    }
    Ok(())
}
