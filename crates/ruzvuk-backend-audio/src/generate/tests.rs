use super::*;
use crate::wav::{compute_pcm_hash, WavInfo};

fn short_grid(seconds: f64) -> TrackGrid {
    TrackGrid::new(seconds, 120.0, SAMPLE_RATE).unwrap()
}

#[test]
fn test_render_grid_sizes() {
    let wav = render_grid(&short_grid(2.0), Genre::Pop, InstrumentKind::Electronic, 1).unwrap();

    assert_eq!(wav.channels, 2);
    assert_eq!(wav.sample_rate, 44100);
    assert_eq!(wav.num_frames, 88200);
    assert_eq!(wav.pcm_bytes(), 88200 * 4);
    assert_eq!(wav.file_bytes(), 88200 * 4 + 44);
}

#[test]
fn test_render_grid_peak_is_normalized() {
    let wav = render_grid(&short_grid(3.0), Genre::Rock, InstrumentKind::Acoustic, 9).unwrap();
    let info = WavInfo::parse(&wav.wav_data).unwrap();

    assert!(info.peak_sample <= 30146);
    // The loudest interleaved sample maps to 0.92 * 32767 before truncation
    assert_eq!(info.peak_sample, 30145);
}

#[test]
fn test_same_seed_same_pcm() {
    let grid = short_grid(2.5);
    let a = render_grid(&grid, Genre::Jazz, InstrumentKind::Orchestral, 123).unwrap();
    let b = render_grid(&grid, Genre::Jazz, InstrumentKind::Orchestral, 123).unwrap();
    assert_eq!(a.pcm_hash, b.pcm_hash);
    assert_eq!(a.wav_data, b.wav_data);
}

#[test]
fn test_hash_matches_written_bytes() {
    let wav = render_grid(&short_grid(1.5), Genre::Ambient, InstrumentKind::Generic, 5).unwrap();
    assert_eq!(compute_pcm_hash(&wav.wav_data).unwrap(), wav.pcm_hash);
}

#[test]
fn test_render_reports_seed_and_filename() {
    let request = GenerationRequest::builder()
        .genre("Jazz")
        .mood("calm")
        .length_minutes(1)
        .tempo_bpm(90)
        .seed(42)
        .build()
        .unwrap();

    let output = render(&request).unwrap();
    assert_eq!(output.seed, 42);
    assert_eq!(output.filename, "master_Jazz_calm_1min_90bpm.wav");
    assert_eq!(output.wav.num_frames, 2_646_000);
}

#[test]
fn test_write_output_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested").join("out");
    let path = out_dir.join("a.wav");

    write_output(&out_dir, &path, b"RIFF").unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"RIFF");
}

#[test]
fn test_write_output_failure_is_encoding_error() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the output directory should be
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"x").unwrap();
    let path = blocker.join("a.wav");

    let err = write_output(&blocker, &path, b"RIFF").unwrap_err();
    assert!(matches!(err, AudioError::Encoding { .. }));
    assert!(!path.exists());
}

#[test]
fn test_failed_write_removes_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.wav");

    let err = write_or_remove(&path, |file| {
        file.write_all(b"RIFF")?;
        Err(io::Error::new(io::ErrorKind::Other, "device full"))
    })
    .unwrap_err();

    assert!(matches!(err, AudioError::Encoding { .. }));
    assert!(!path.exists());
}

#[test]
fn test_write_into_directory_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    // The target name is taken by a directory, so creating the file fails
    let path = dir.path().join("taken.wav");
    fs::create_dir(&path).unwrap();

    let err = write_output(dir.path(), &path, b"RIFF").unwrap_err();
    assert!(matches!(err, AudioError::Encoding { .. }));
    assert!(path.is_dir());
}
