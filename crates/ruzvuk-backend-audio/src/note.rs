//! Additive note synthesis.
//!
//! A note is the sum of up to [`MAX_HARMONICS`] copies of the instrument's
//! waveform at integer multiples of the fundamental, each weighted and shaped
//! by the same envelope, then scaled by `volume × NOTE_GAIN`.

use crate::buffer::{linspace_exclusive, samples_for};
use crate::envelope;
use crate::instrument::InstrumentProfile;

/// Harmonic weights past this index are ignored.
pub const MAX_HARMONICS: usize = 3;

/// Fixed output gain applied to every note.
pub const NOTE_GAIN: f64 = 0.3;

/// Renders single notes at a fixed sample rate.
#[derive(Debug, Clone, Copy)]
pub struct NoteSynthesizer {
    sample_rate: u32,
}

impl NoteSynthesizer {
    /// Creates a synthesizer for `sample_rate`.
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Returns the sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Synthesizes one note.
    ///
    /// The buffer holds `floor(duration × sample_rate)` samples. A zero,
    /// negative, or non-finite frequency gives a silent buffer of that length.
    pub fn note(
        &self,
        frequency: f64,
        duration: f64,
        profile: &InstrumentProfile,
        volume: f64,
    ) -> Vec<f64> {
        let num_samples = samples_for(duration, self.sample_rate);
        let mut output = vec![0.0; num_samples];
        if num_samples == 0 || !(frequency.is_finite() && frequency > 0.0) {
            return output;
        }

        let times = linspace_exclusive(0.0, duration, num_samples);
        let env = envelope::shape(num_samples, &profile.envelope(), self.sample_rate);

        for (i, &weight) in profile.harmonics.iter().take(MAX_HARMONICS).enumerate() {
            let harmonic_freq = frequency * (i + 1) as f64;
            for ((out, &t), &e) in output.iter_mut().zip(&times).zip(&env) {
                *out += profile.waveform.sample(t, harmonic_freq) * weight * e;
            }
        }

        let gain = volume * NOTE_GAIN;
        for sample in output.iter_mut() {
            *sample *= gain;
        }

        output
    }
}
