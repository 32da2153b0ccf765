//! Tests for normalization and quantization.

use super::*;
use crate::buffer::peak;
use crate::error::AudioError;

#[test]
fn test_normalize_to_target_peak() {
    let mut samples = vec![0.5, -2.0, 1.0, 0.25];
    let before = normalize_peak(&mut samples, NORMALIZE_TARGET).unwrap();

    assert_eq!(before, 2.0);
    assert!((peak(&samples) - NORMALIZE_TARGET).abs() < 1e-12);
    assert!((samples[1] + NORMALIZE_TARGET).abs() < 1e-12);
}

#[test]
fn test_normalize_silent_audio() {
    let mut samples = vec![0.0; 8];
    let before = normalize_peak(&mut samples, NORMALIZE_TARGET).unwrap();

    // Silent audio should remain silent (no division by zero)
    assert_eq!(before, 0.0);
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn test_normalize_rejects_non_finite() {
    let mut samples = vec![0.1, f64::NAN, 0.2];
    assert!(matches!(
        normalize_peak(&mut samples, NORMALIZE_TARGET),
        Err(AudioError::Degenerate { .. })
    ));

    let mut samples = vec![f64::INFINITY];
    assert!(normalize_peak(&mut samples, NORMALIZE_TARGET).is_err());
}

#[test]
fn test_quantize_truncates_toward_zero() {
    let pcm = quantize_pcm16(&[0.0, 1.0, -1.0, 0.5, -0.5, 0.92]);
    // 0.5 * 32767 = 16383.5, 0.92 * 32767 = 30145.64
    assert_eq!(pcm, vec![0, 32767, -32767, 16383, -16383, 30145]);
}

#[test]
fn test_normalized_quantized_stays_below_target() {
    let mut samples: Vec<f64> = (0..1000).map(|i| ((i as f64) * 0.37).sin() * 3.0).collect();
    normalize_peak(&mut samples, NORMALIZE_TARGET).unwrap();
    let pcm = quantize_pcm16(&samples);

    let max = pcm.iter().map(|s| (*s as i32).abs()).max().unwrap();
    assert!(max <= 30146);
    assert!(max >= 30000);
}
