//! Track summing.

use tracing::debug;

use super::types::Track;
use crate::error::{AudioError, AudioResult};

/// Melody gain on the master bus.
pub const MELODY_GAIN: f64 = 0.5;

/// Bass gain on the master bus.
pub const BASS_GAIN: f64 = 0.4;

/// Drum gain on the master bus.
pub const DRUM_GAIN: f64 = 0.35;

/// Sums equal-length mono tracks into one mono mix.
#[derive(Debug)]
pub struct Mixer {
    /// Output sample length.
    num_samples: usize,
    /// Sample rate.
    sample_rate: u32,
    /// Accumulated tracks, summed in insertion order.
    tracks: Vec<Track>,
}

impl Mixer {
    /// Creates a new mixer.
    ///
    /// # Arguments
    /// * `num_samples` - Number of output samples
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn new(num_samples: usize, sample_rate: u32) -> Self {
        Self {
            num_samples,
            sample_rate,
            tracks: Vec::new(),
        }
    }

    /// Adds a track to the mix.
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Adds samples at `gain`.
    pub fn add(&mut self, samples: Vec<f64>, gain: f64) {
        self.add_track(Track::new(samples, gain));
    }

    /// Output sample length.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of tracks added so far.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Sums every track at its gain.
    ///
    /// Fails when the mix would be empty or a track length differs from the
    /// mixer length.
    pub fn mix_down(&self) -> AudioResult<Vec<f64>> {
        if self.num_samples == 0 {
            return Err(AudioError::degenerate("mix has zero samples"));
        }
        if self.tracks.is_empty() {
            return Err(AudioError::degenerate("mix has no tracks"));
        }

        let mut output = vec![0.0; self.num_samples];
        for (index, track) in self.tracks.iter().enumerate() {
            if track.len() != self.num_samples {
                return Err(AudioError::degenerate(format!(
                    "track {} has {} samples, expected {}",
                    index,
                    track.len(),
                    self.num_samples
                )));
            }
            for (dst, &src) in output.iter_mut().zip(&track.samples) {
                *dst += src * track.gain;
            }
        }

        debug!(
            tracks = self.tracks.len(),
            samples = self.num_samples,
            "mixed down tracks"
        );
        Ok(output)
    }
}
