//! Master bus: track summing, reverb, stereo image, normalization, and
//! 16-bit quantization.
//!
//! The chain runs in a fixed order:
//!
//! 1. [`Mixer::mix_down`] sums the tracks at their gains
//! 2. [`apply_reverb`] adds a wrapped, fading copy of the mix
//! 3. [`stereo_spread`] derives left and right channels with opposite gain ramps
//! 4. [`normalize_peak`] scales the interleaved signal to a fixed peak
//! 5. [`quantize_pcm16`] truncates to signed 16-bit samples

#[allow(clippy::module_inception)]
mod mixer;
mod processing;
mod types;

#[cfg(test)]
mod tests_mixer;
#[cfg(test)]
mod tests_normalization;
#[cfg(test)]
mod tests_reverb;
#[cfg(test)]
mod tests_stereo;

pub use mixer::{Mixer, BASS_GAIN, DRUM_GAIN, MELODY_GAIN};
pub use processing::{
    apply_reverb, normalize_peak, quantize_pcm16, stereo_spread, NORMALIZE_TARGET,
    REVERB_DELAY_SECONDS, REVERB_TAIL_GAIN, REVERB_WET, STEREO_EDGE_GAIN,
};
pub use types::{StereoOutput, Track};
