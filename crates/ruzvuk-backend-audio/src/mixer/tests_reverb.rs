//! Tests for the wrapped reverb copy.

use super::*;

#[test]
fn test_reverb_offsets_and_fades() {
    // Impulse at 0, delay 2 over 5 samples: fade is [1.0, 0.8, 0.6, 0.4, 0.2]
    let mut mix = vec![1.0, 0.0, 0.0, 0.0, 0.0];
    apply_reverb(&mut mix, 2);

    assert_eq!(mix[0], 1.0);
    assert_eq!(mix[1], 0.0);
    assert!((mix[2] - REVERB_WET * 0.6).abs() < 1e-12);
    assert_eq!(mix[3], 0.0);
    assert_eq!(mix[4], 0.0);
}

#[test]
fn test_reverb_wraps_tail_onto_start() {
    let mut mix = vec![0.0, 0.0, 0.0, 1.0];
    apply_reverb(&mut mix, 2);

    // Sample 3 rotates to index 1, where the fade is 1.0 - 0.8 / 3
    let fade = 1.0 - (1.0 - REVERB_TAIL_GAIN) / 3.0;
    assert!((mix[1] - REVERB_WET * fade).abs() < 1e-12);
    assert_eq!(mix[3], 1.0);
}

#[test]
fn test_reverb_silent_and_empty() {
    let mut silent = vec![0.0; 16];
    apply_reverb(&mut silent, 4);
    assert!(silent.iter().all(|&s| s == 0.0));

    let mut empty: Vec<f64> = Vec::new();
    apply_reverb(&mut empty, 4410);
    assert!(empty.is_empty());
}

#[test]
fn test_reverb_delay_longer_than_mix() {
    // Delay 5 on 3 samples behaves like delay 2
    let mut a = vec![1.0, 0.5, 0.25];
    let mut b = a.clone();
    apply_reverb(&mut a, 5);
    apply_reverb(&mut b, 2);
    assert_eq!(a, b);
}
