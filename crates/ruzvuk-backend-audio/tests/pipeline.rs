//! Integration tests for the audio backend's public API.

use pretty_assertions::assert_eq;
use ruzvuk_backend_audio::generate::render_grid;
use ruzvuk_backend_audio::rng::create_rng;
use ruzvuk_backend_audio::scale::Scale;
use ruzvuk_backend_audio::tracks::{DrumGenerator, MelodyGenerator, TrackGenerator, TrackGrid};
use ruzvuk_backend_audio::wav::WavInfo;
use ruzvuk_backend_audio::{instrument::InstrumentProfile, SAMPLE_RATE};
use ruzvuk_spec::{Genre, InstrumentKind};

fn grid(seconds: f64, tempo: f64) -> TrackGrid {
    TrackGrid::new(seconds, tempo, SAMPLE_RATE).unwrap()
}

#[test]
fn drums_ignore_the_random_source() {
    let g = grid(4.0, 140.0);
    let a = DrumGenerator::new().generate(&g, &mut create_rng(1));
    let b = DrumGenerator::new().generate(&g, &mut create_rng(2));
    assert_eq!(a, b);
}

#[test]
fn different_seeds_give_different_masters() {
    let g = grid(4.0, 120.0);
    let a = render_grid(&g, Genre::Pop, InstrumentKind::Electronic, 1).unwrap();
    let b = render_grid(&g, Genre::Pop, InstrumentKind::Electronic, 2).unwrap();
    assert_ne!(a.pcm_hash, b.pcm_hash);
}

#[test]
fn unknown_names_fall_back_to_defaults() {
    let g = grid(2.0, 120.0);
    let scale = Scale::resolve("polka");
    assert_eq!(scale, Scale::for_genre(Genre::Pop));

    let profile = InstrumentProfile::resolve("theremin");
    let a = MelodyGenerator::new(&scale, profile).generate(&g, &mut create_rng(3));
    let b = MelodyGenerator::new(&Scale::for_genre(Genre::Pop), InstrumentProfile::default())
        .generate(&g, &mut create_rng(3));
    assert_eq!(a, b);
}

#[test]
fn every_genre_and_instrument_renders() {
    let g = grid(1.5, 180.0);
    for genre in Genre::ALL {
        for instrument in InstrumentKind::ALL {
            let wav = render_grid(&g, genre, instrument, 11).unwrap();
            let info = WavInfo::parse(&wav.wav_data).unwrap();
            assert_eq!(info.num_frames, g.total_samples());
            assert_eq!(info.format.channels, 2);
            assert!(info.peak_sample <= 30146);
        }
    }
}

#[test]
fn extreme_tempo_still_renders() {
    // 1000 BPM: 0.06 s beats, shorter than a kick
    let wav = render_grid(&grid(2.0, 1000.0), Genre::Rock, InstrumentKind::Acoustic, 0).unwrap();
    assert_eq!(wav.num_frames, 88200);
}
