//! Bass line: an eight-step on/off pattern over the beat grid, each active
//! step playing a random scale note one octave down.

use rand_pcg::Pcg32;

use super::{TrackGenerator, TrackGrid};
use crate::buffer::place;
use crate::instrument::ELECTRONIC;
use crate::note::NoteSynthesizer;
use crate::scale::Scale;

/// Step pattern, indexed by `beat % 8`.
pub const BASS_PATTERN: [bool; 8] = [false, false, true, false, true, false, false, true];

/// Note volume.
pub const BASS_VOLUME: f64 = 0.35;

/// Note length as a fraction of the beat.
pub const BASS_GATE: f64 = 0.7;

/// Bass line generator.
#[derive(Debug, Clone)]
pub struct BassGenerator<'a> {
    scale: &'a Scale,
}

impl<'a> BassGenerator<'a> {
    /// Creates a bass generator drawing notes from `scale`.
    pub fn new(scale: &'a Scale) -> Self {
        Self { scale }
    }
}

impl TrackGenerator for BassGenerator<'_> {
    fn generate(&self, grid: &TrackGrid, rng: &mut Pcg32) -> Vec<f64> {
        let synth = NoteSynthesizer::new(grid.sample_rate());
        let beat_duration = grid.beat_duration();
        let mut track = vec![0.0; grid.total_samples()];

        for beat in 0..grid.beats() {
            if !BASS_PATTERN[beat % BASS_PATTERN.len()] {
                continue;
            }
            let Some(freq) = self.scale.choose(rng) else {
                break;
            };
            let start = grid.offset(beat as f64 * beat_duration);
            let note = synth.note(
                freq * 0.5,
                beat_duration * BASS_GATE,
                &ELECTRONIC,
                BASS_VOLUME,
            );
            place(&mut track, start, &note);
        }

        track
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use crate::SAMPLE_RATE;
    use ruzvuk_spec::Genre;

    fn grid(duration: f64, tempo: f64) -> TrackGrid {
        TrackGrid::new(duration, tempo, SAMPLE_RATE).unwrap()
    }

    #[test]
    fn test_length_matches_grid() {
        let scale = Scale::for_genre(Genre::Pop);
        let g = grid(5.0, 120.0);
        let track = BassGenerator::new(&scale).generate(&g, &mut create_rng(3));
        assert_eq!(track.len(), g.total_samples());
    }

    #[test]
    fn test_silent_on_inactive_steps() {
        // 120 BPM: beats 0 and 1 are off, beat 2 (sample 44100) is the first note.
        let scale = Scale::for_genre(Genre::Rock);
        let track = BassGenerator::new(&scale).generate(&grid(4.0, 120.0), &mut create_rng(5));
        assert!(track[..44100].iter().all(|&s| s == 0.0));
        // floor(0.35 * 44100) = 15434 samples per note
        assert!(track[44100..44100 + 15434].iter().any(|&s| s != 0.0));
        // beat 3 is off, so the rest of beat 2 and all of beat 3 are silent
        let gap_start = 44100 + 15434;
        assert!(track[gap_start..88200].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_same_seed_same_bass() {
        let scale = Scale::for_genre(Genre::Jazz);
        let g = grid(8.0, 140.0);
        let a = BassGenerator::new(&scale).generate(&g, &mut create_rng(11));
        let b = BassGenerator::new(&scale).generate(&g, &mut create_rng(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_bass() {
        let scale = Scale::for_genre(Genre::Pop);
        let g = grid(16.0, 120.0);
        let a = BassGenerator::new(&scale).generate(&g, &mut create_rng(1));
        let b = BassGenerator::new(&scale).generate(&g, &mut create_rng(2));
        assert_ne!(a, b);
    }
}
