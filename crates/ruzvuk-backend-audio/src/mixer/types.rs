//! Core types for the master bus.

/// One mono track with its mix gain.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Track samples.
    pub samples: Vec<f64>,
    /// Linear gain applied when summing.
    pub gain: f64,
}

impl Track {
    /// Creates a track.
    pub fn new(samples: Vec<f64>, gain: f64) -> Self {
        Self { samples, gain }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the track has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Stereo audio output.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoOutput {
    /// Left channel samples.
    pub left: Vec<f64>,
    /// Right channel samples.
    pub right: Vec<f64>,
}

impl StereoOutput {
    /// Creates a silent stereo output with the given number of frames.
    pub fn new(num_samples: usize) -> Self {
        Self {
            left: vec![0.0; num_samples],
            right: vec![0.0; num_samples],
        }
    }

    /// Interleaves the channels as `L, R, L, R, ...`.
    pub fn interleave(&self) -> Vec<f64> {
        let mut output = Vec::with_capacity(self.left.len() * 2);
        for (l, r) in self.left.iter().zip(self.right.iter()) {
            output.push(*l);
            output.push(*r);
        }
        output
    }

    /// Gets the number of samples per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}
