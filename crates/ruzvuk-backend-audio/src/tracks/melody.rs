//! Melody: one note every second on a half-second grid, alternating between
//! scale degrees taken from a fixed chord table.

use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use super::{steps_in, TrackGenerator, TrackGrid};
use crate::buffer::place;
use crate::instrument::InstrumentProfile;
use crate::note::NoteSynthesizer;
use crate::scale::Scale;

/// Grid unit in seconds (independent of tempo).
pub const MELODY_STEP_SECONDS: f64 = 0.5;

/// Grid units between notes.
pub const MELODY_STRIDE: usize = 2;

/// Scale degrees indexed by `step % 4`: root, fourth, fifth, sixth.
pub const CHORD_DEGREES: [usize; 4] = [0, 3, 4, 5];

/// Octave/fifth multipliers applied to the chosen degree.
pub const FREQ_FACTORS: [f64; 3] = [1.0, 1.5, 2.0];

/// Note length multipliers.
pub const LENGTH_FACTORS: [f64; 3] = [0.8, 1.2, 1.6];

/// Extra length added to every note.
pub const MELODY_COMPLEXITY: f64 = 0.6;

/// Note volume.
pub const MELODY_VOLUME: f64 = 0.45;

/// Melody generator for one instrument.
#[derive(Debug, Clone)]
pub struct MelodyGenerator<'a> {
    scale: &'a Scale,
    profile: InstrumentProfile,
    complexity: f64,
}

impl<'a> MelodyGenerator<'a> {
    /// Creates a melody generator over `scale` played with `profile`.
    pub fn new(scale: &'a Scale, profile: InstrumentProfile) -> Self {
        Self {
            scale,
            profile,
            complexity: MELODY_COMPLEXITY,
        }
    }

    /// Chord degree for a grid step.
    ///
    /// Only even steps are played, so in practice this alternates between
    /// the root and the fifth degree.
    pub fn degree_for_step(step: usize) -> usize {
        CHORD_DEGREES[step % 4 % CHORD_DEGREES.len()]
    }
}

impl TrackGenerator for MelodyGenerator<'_> {
    fn generate(&self, grid: &TrackGrid, rng: &mut Pcg32) -> Vec<f64> {
        let synth = NoteSynthesizer::new(grid.sample_rate());
        let mut track = vec![0.0; grid.total_samples()];
        let steps = steps_in(grid.duration_seconds(), MELODY_STEP_SECONDS);

        for step in (0..steps).step_by(MELODY_STRIDE) {
            let root = self.scale.degree(Self::degree_for_step(step));
            let freq = root * FREQ_FACTORS.choose(rng).copied().unwrap_or(1.0);

            let start = grid.offset(step as f64 * MELODY_STEP_SECONDS);
            let length_factor = LENGTH_FACTORS.choose(rng).copied().unwrap_or(1.0);
            let duration = MELODY_STEP_SECONDS * length_factor * (1.0 + self.complexity);

            let note = synth.note(freq, duration, &self.profile, MELODY_VOLUME);
            place(&mut track, start, &note);
        }

        track
    }
}
