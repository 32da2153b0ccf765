//! Master bus processing stages.

use super::types::StereoOutput;
use crate::buffer::{linspace, peak};
use crate::error::{AudioError, AudioResult};

/// Delay of the reverb copy in seconds.
pub const REVERB_DELAY_SECONDS: f64 = 0.1;

/// Level of the reverb copy relative to the dry mix.
pub const REVERB_WET: f64 = 0.2;

/// Reverb gain at the end of the track (it fades from 1.0 at the start).
pub const REVERB_TAIL_GAIN: f64 = 0.2;

/// Gain at the quiet edge of each channel ramp.
pub const STEREO_EDGE_GAIN: f64 = 0.8;

/// Peak level after normalization.
pub const NORMALIZE_TARGET: f64 = 0.92;

/// Adds a delayed copy of `mix` into itself.
///
/// The copy is `mix * REVERB_WET` rotated right by `delay_samples`, so the end
/// of the track wraps around onto its start. It is scaled by a linear fade from
/// 1.0 down to [`REVERB_TAIL_GAIN`] before being added.
pub fn apply_reverb(mix: &mut [f64], delay_samples: usize) {
    let n = mix.len();
    if n == 0 {
        return;
    }
    let mut wet: Vec<f64> = mix.iter().map(|s| s * REVERB_WET).collect();
    wet.rotate_right(delay_samples % n);
    let fade = linspace(1.0, REVERB_TAIL_GAIN, n);

    for ((dst, w), f) in mix.iter_mut().zip(&wet).zip(&fade) {
        *dst += w * f;
    }
}

/// Derives two channels from a mono mix.
///
/// Left ramps from [`STEREO_EDGE_GAIN`] up to 1.0 across the track, right
/// ramps the other way.
pub fn stereo_spread(mix: &[f64]) -> StereoOutput {
    let n = mix.len();
    let rising = linspace(STEREO_EDGE_GAIN, 1.0, n);
    let falling = linspace(1.0, STEREO_EDGE_GAIN, n);

    StereoOutput {
        left: mix.iter().zip(&rising).map(|(s, g)| s * g).collect(),
        right: mix.iter().zip(&falling).map(|(s, g)| s * g).collect(),
    }
}

/// Scales `samples` so the largest magnitude equals `target`.
///
/// Silent input is left untouched. Returns the peak measured before scaling.
/// Fails if any sample is NaN or infinite.
pub fn normalize_peak(samples: &mut [f64], target: f64) -> AudioResult<f64> {
    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(AudioError::degenerate(format!(
            "non-finite sample {} at index {} before normalization",
            samples[index], index
        )));
    }
    let current_peak = peak(samples);

    if current_peak > 0.0 {
        for sample in samples.iter_mut() {
            *sample = *sample / current_peak * target;
        }
    }
    Ok(current_peak)
}

/// Converts samples to signed 16-bit, truncating toward zero.
pub fn quantize_pcm16(samples: &[f64]) -> Vec<i16> {
    samples.iter().map(|&s| (s * 32767.0) as i16).collect()
}
