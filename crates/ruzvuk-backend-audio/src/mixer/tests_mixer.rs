//! Tests for track summing.

use super::*;
use crate::error::AudioError;

#[test]
fn test_mix_down_applies_gains() {
    let mut mixer = Mixer::new(3, 44100);
    mixer.add(vec![1.0, 0.0, -1.0], MELODY_GAIN);
    mixer.add(vec![1.0, 1.0, 1.0], BASS_GAIN);
    mixer.add(vec![0.0, 2.0, 0.0], DRUM_GAIN);

    let mix = mixer.mix_down().unwrap();
    assert_eq!(mix.len(), 3);
    assert!((mix[0] - 0.9).abs() < 1e-12);
    assert!((mix[1] - 1.1).abs() < 1e-12);
    assert!((mix[2] - -0.1).abs() < 1e-12);
}

#[test]
fn test_mix_down_rejects_length_mismatch() {
    let mut mixer = Mixer::new(4, 44100);
    mixer.add(vec![0.0; 4], MELODY_GAIN);
    mixer.add(vec![0.0; 3], BASS_GAIN);

    let err = mixer.mix_down().unwrap_err();
    assert!(matches!(err, AudioError::Degenerate { .. }));
    assert!(err.to_string().contains("track 1"));
}

#[test]
fn test_mix_down_rejects_empty_mix() {
    let mixer = Mixer::new(0, 44100);
    assert!(matches!(
        mixer.mix_down(),
        Err(AudioError::Degenerate { .. })
    ));

    let mixer = Mixer::new(10, 44100);
    assert!(mixer.mix_down().is_err());
}

#[test]
fn test_mixer_accessors() {
    let mut mixer = Mixer::new(100, 22050);
    mixer.add_track(Track::new(vec![0.0; 100], 1.0));
    assert_eq!(mixer.num_samples(), 100);
    assert_eq!(mixer.sample_rate(), 22050);
    assert_eq!(mixer.track_count(), 1);
}
