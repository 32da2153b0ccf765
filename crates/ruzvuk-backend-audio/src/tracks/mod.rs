//! Track generators.
//!
//! Each generator produces one full-length mono track by placing notes or
//! drum hits on a rhythmic grid:
//! - `drums` - kick on every beat, snare between even beats (deterministic)
//! - `bass` - eight-step pattern of random scale notes an octave down
//! - `melody` - root/fifth phrase on a fixed half-second grid
//!
//! Hits are written with [`place`](crate::buffer::place), so a hit that would
//! reach the final sample of the track is dropped.

mod bass;
mod drums;
mod melody;

pub use bass::{BassGenerator, BASS_PATTERN, BASS_VOLUME};
pub use drums::{DrumGenerator, DrumHit, DrumKind};
pub use melody::{MelodyGenerator, MELODY_COMPLEXITY, MELODY_STEP_SECONDS, MELODY_VOLUME};

use rand_pcg::Pcg32;

use crate::buffer::samples_for;
use crate::error::{AudioError, AudioResult};

/// Common trait for all track generators.
pub trait TrackGenerator {
    /// Generates a mono track of exactly `grid.total_samples()` samples.
    ///
    /// # Arguments
    /// * `grid` - Duration, tempo, and sample rate of the render
    /// * `rng` - Random source for any randomness
    fn generate(&self, grid: &TrackGrid, rng: &mut Pcg32) -> Vec<f64>;
}

/// Timing shared by every track of one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGrid {
    duration_seconds: f64,
    tempo_bpm: f64,
    sample_rate: u32,
}

impl TrackGrid {
    /// Creates a grid, rejecting non-positive durations and tempos.
    pub fn new(duration_seconds: f64, tempo_bpm: f64, sample_rate: u32) -> AudioResult<Self> {
        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return Err(AudioError::InvalidDuration {
                duration: duration_seconds,
            });
        }
        if !tempo_bpm.is_finite() || tempo_bpm <= 0.0 {
            return Err(AudioError::invalid_param(
                "tempo_bpm",
                format!("must be positive, got {}", tempo_bpm),
            ));
        }
        if sample_rate == 0 {
            return Err(AudioError::invalid_param("sample_rate", "must be positive"));
        }
        Ok(Self {
            duration_seconds,
            tempo_bpm,
            sample_rate,
        })
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Tempo in BPM.
    pub fn tempo_bpm(&self) -> f64 {
        self.tempo_bpm
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Samples in every track.
    pub fn total_samples(&self) -> usize {
        samples_for(self.duration_seconds, self.sample_rate)
    }

    /// Seconds per beat.
    pub fn beat_duration(&self) -> f64 {
        60.0 / self.tempo_bpm
    }

    /// Whole beats that start inside the duration.
    pub fn beats(&self) -> usize {
        steps_in(self.duration_seconds, self.beat_duration())
    }

    /// Sample offset of a time in seconds (truncated).
    pub fn offset(&self, seconds: f64) -> usize {
        samples_for(seconds, self.sample_rate)
    }
}

/// Number of whole `step`-second steps in `duration` seconds.
fn steps_in(duration: f64, step: f64) -> usize {
    let n = duration / step;
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}
