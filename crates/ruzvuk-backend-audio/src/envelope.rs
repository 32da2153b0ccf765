//! ADSR envelope shaping.
//!
//! The envelope is built by three sequential overwrites of a buffer that
//! starts at the sustain level:
//!
//! 1. the first `attack` samples ramp 0 → 1,
//! 2. the following `decay` samples ramp 1 → sustain,
//! 3. the last `release` samples ramp sustain → 0 (only when the buffer is
//!    longer than the release segment).
//!
//! For buffers shorter than the three segments combined, later writes win.
//! A segment that runs past the end of the buffer is computed over its full
//! length and cut at the buffer end.

use crate::buffer::{linspace, samples_for};

/// Sustain level used for every note.
pub const SUSTAIN_LEVEL: f64 = 0.7;

/// Release time used for every note, in seconds.
pub const RELEASE_SECONDS: f64 = 0.2;

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for AdsrParams {
    fn default() -> Self {
        Self::note(0.01, 0.1)
    }
}

impl AdsrParams {
    /// Creates new ADSR parameters.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }

    /// Envelope for a synthesized note: instrument attack and decay with the
    /// fixed sustain level and release time.
    pub fn note(attack: f64, decay: f64) -> Self {
        Self::new(attack, decay, SUSTAIN_LEVEL, RELEASE_SECONDS)
    }
}

/// Builds an envelope of exactly `num_samples` values in `[0, 1]`.
pub fn shape(num_samples: usize, params: &AdsrParams, sample_rate: u32) -> Vec<f64> {
    let sustain = params.sustain;
    let mut env = vec![sustain; num_samples];

    let attack_samples = samples_for(params.attack, sample_rate);
    let decay_samples = samples_for(params.decay, sample_rate);
    let release_samples = samples_for(params.release, sample_rate);

    if attack_samples > 0 {
        overwrite(&mut env, 0, &linspace(0.0, 1.0, attack_samples));
    }
    if decay_samples > 0 {
        overwrite(&mut env, attack_samples, &linspace(1.0, sustain, decay_samples));
    }
    if release_samples > 0 && num_samples > release_samples {
        overwrite(
            &mut env,
            num_samples - release_samples,
            &linspace(sustain, 0.0, release_samples),
        );
    }

    env
}

fn overwrite(env: &mut [f64], start: usize, segment: &[f64]) {
    if start >= env.len() {
        return;
    }
    for (dst, src) in env[start..].iter_mut().zip(segment) {
        *dst = *src;
    }
}
