//! Tests for the stereo image.

use super::*;

#[test]
fn test_stereo_spread_ramps() {
    let mix = vec![1.0; 5];
    let stereo = stereo_spread(&mix);

    assert_eq!(stereo.len(), 5);
    assert_eq!(stereo.left[0], STEREO_EDGE_GAIN);
    assert_eq!(stereo.left[4], 1.0);
    assert_eq!(stereo.right[0], 1.0);
    assert_eq!(stereo.right[4], STEREO_EDGE_GAIN);
    assert!((stereo.left[2] - 0.9).abs() < 1e-12);
    assert!((stereo.right[2] - 0.9).abs() < 1e-12);
}

#[test]
fn test_interleave_order() {
    let stereo = StereoOutput {
        left: vec![1.0, 2.0],
        right: vec![-1.0, -2.0],
    };
    assert_eq!(stereo.interleave(), vec![1.0, -1.0, 2.0, -2.0]);
}

#[test]
fn test_single_sample_spread() {
    let stereo = stereo_spread(&[0.5]);
    assert_eq!(stereo.left, vec![0.5 * STEREO_EDGE_GAIN]);
    assert_eq!(stereo.right, vec![0.5]);
}

#[test]
fn test_new_stereo_is_silent() {
    let stereo = StereoOutput::new(3);
    assert!(!stereo.is_empty());
    assert_eq!(stereo.interleave(), vec![0.0; 6]);
}
