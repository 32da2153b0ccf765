//! The CLI commands read back what they write.

use pretty_assertions::assert_eq;
use ruzvuk_cli::commands::generate::{execute, GenerateArgs};
use ruzvuk_cli::commands::inspect::inspect_file;
use ruzvuk_cli::input::RequestOverrides;
use ruzvuk_tests::harness::TestHarness;
use serde_json::json;

#[test]
fn generate_then_inspect() {
    let harness = TestHarness::new();
    let request_path = harness.write_request(
        "request.json",
        &json!({"genre": "classical", "mood": "calm", "length": 1, "tempo": 80}),
    );

    let result = execute(GenerateArgs {
        request: Some(request_path),
        overrides: RequestOverrides {
            instrument: Some("orchestral".to_string()),
            seed: Some(17),
            ..Default::default()
        },
        out_dir: harness.out_dir(),
    })
    .unwrap();
    assert_eq!(result.filename, "master_classical_calm_1min_80bpm.wav");

    let report = inspect_file(&result.path).unwrap();
    assert_eq!(report.channels, result.channels);
    assert_eq!(report.sample_rate, result.sample_rate);
    assert_eq!(report.bits_per_sample, 16);
    assert_eq!(report.num_frames, result.num_frames);
    assert_eq!(report.pcm_bytes as u64, result.pcm_bytes);
    assert_eq!(report.pcm_hash, result.pcm_hash);
    assert!(report.peak_sample > 0);
    assert!(report.peak_sample <= 30146);
}

#[test]
fn flags_override_request_file() {
    let harness = TestHarness::new();
    let request_path = harness.write_request(
        "request.json",
        &json!({"genre": "jazz", "mood": "joy", "length": "1", "tempo": "150"}),
    );

    let result = execute(GenerateArgs {
        request: Some(request_path),
        overrides: RequestOverrides {
            mood: Some("focus".to_string()),
            tempo: Some(110),
            seed: Some(1),
            ..Default::default()
        },
        out_dir: harness.out_dir(),
    })
    .unwrap();
    assert_eq!(result.filename, "master_jazz_focus_1min_110bpm.wav");
    assert_eq!(
        harness.output_files(),
        vec!["master_jazz_focus_1min_110bpm.wav".to_string()]
    );
}
