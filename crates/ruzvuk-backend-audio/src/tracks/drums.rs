//! Drum track: a sine-sweep kick on every beat and a tonal snare on the
//! off-beat after every even beat.

use rand_pcg::Pcg32;

use super::{TrackGenerator, TrackGrid};
use crate::buffer::{linspace, place, samples_for};
use crate::oscillator::TWO_PI;

/// Kick length in seconds.
pub const KICK_SECONDS: f64 = 0.2;
/// Kick base frequency in Hz; each beat adds [`KICK_FREQ_STEP`].
pub const KICK_BASE_FREQ: f64 = 60.0;
/// Kick frequency increment per beat in Hz.
pub const KICK_FREQ_STEP: f64 = 5.0;
/// Kick amplitude decay rate.
pub const KICK_DECAY: f64 = 8.0;
/// Kick gain.
pub const KICK_GAIN: f64 = 0.4;

/// Snare length in seconds.
pub const SNARE_SECONDS: f64 = 0.15;
/// Snare frequency in Hz.
pub const SNARE_FREQ: f64 = 200.0;
/// Snare amplitude decay rate.
pub const SNARE_DECAY: f64 = 10.0;
/// Snare gain.
pub const SNARE_GAIN: f64 = 0.3;

/// Drum voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrumKind {
    /// Kick drum.
    Kick,
    /// Snare drum.
    Snare,
}

/// One scheduled drum hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrumHit {
    /// Voice.
    pub kind: DrumKind,
    /// Beat index the hit belongs to.
    pub beat: usize,
    /// Start offset in samples.
    pub start: usize,
}

/// Deterministic drum track generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrumGenerator;

impl DrumGenerator {
    /// Creates a drum generator.
    pub fn new() -> Self {
        Self
    }

    /// Lists the hits for a grid in placement order (before boundary checks).
    pub fn schedule(&self, grid: &TrackGrid) -> Vec<DrumHit> {
        let beat_duration = grid.beat_duration();
        let mut hits = Vec::with_capacity(grid.beats() * 2);

        for beat in 0..grid.beats() {
            hits.push(DrumHit {
                kind: DrumKind::Kick,
                beat,
                start: grid.offset(beat as f64 * beat_duration),
            });
            if beat % 2 == 0 {
                hits.push(DrumHit {
                    kind: DrumKind::Snare,
                    beat,
                    start: grid.offset((beat as f64 + 0.5) * beat_duration),
                });
            }
        }

        hits
    }

    /// Renders a single hit, gain applied.
    pub fn render_hit(&self, hit: &DrumHit, sample_rate: u32) -> Vec<f64> {
        match hit.kind {
            DrumKind::Kick => kick(hit.beat, sample_rate),
            DrumKind::Snare => snare(sample_rate),
        }
    }
}

impl TrackGenerator for DrumGenerator {
    fn generate(&self, grid: &TrackGrid, _rng: &mut Pcg32) -> Vec<f64> {
        let sample_rate = grid.sample_rate();
        let mut track = vec![0.0; grid.total_samples()];

        for hit in self.schedule(grid) {
            place(&mut track, hit.start, &self.render_hit(&hit, sample_rate));
        }

        track
    }
}

/// Kick for `beat`: `sin(2π(60 + 5·beat)t) · e^(−8t) · 0.4` over 0.2 s.
pub fn kick(beat: usize, sample_rate: u32) -> Vec<f64> {
    let freq = KICK_BASE_FREQ + beat as f64 * KICK_FREQ_STEP;
    decaying_sine(freq, KICK_SECONDS, KICK_DECAY, KICK_GAIN, sample_rate)
}

/// Snare: `sin(2π·200t) · e^(−10t) · 0.3` over 0.15 s.
pub fn snare(sample_rate: u32) -> Vec<f64> {
    decaying_sine(SNARE_FREQ, SNARE_SECONDS, SNARE_DECAY, SNARE_GAIN, sample_rate)
}

// Time axis includes both 0 and `seconds`.
fn decaying_sine(freq: f64, seconds: f64, decay: f64, gain: f64, sample_rate: u32) -> Vec<f64> {
    linspace(0.0, seconds, samples_for(seconds, sample_rate))
        .into_iter()
        .map(|t| (TWO_PI * freq * t).sin() * (-t * decay).exp() * gain)
        .collect()
}
