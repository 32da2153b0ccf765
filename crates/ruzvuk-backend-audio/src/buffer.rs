//! Sample buffer helpers shared by the synthesis stages.

/// Evenly spaced values over `[start, end]`, both endpoints included.
///
/// A single-element result is `[start]`; the last element is exactly `end`.
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// Evenly spaced values over `[start, end)`, the endpoint excluded.
pub fn linspace_exclusive(start: f64, end: f64, num: usize) -> Vec<f64> {
    if num == 0 {
        return Vec::new();
    }
    let step = (end - start) / num as f64;
    (0..num).map(|i| start + i as f64 * step).collect()
}

/// Number of whole samples in `seconds` (truncated; zero for negative or
/// non-finite input).
#[inline]
pub fn samples_for(seconds: f64, sample_rate: u32) -> usize {
    let n = sample_rate as f64 * seconds;
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Adds `hit` into `track` starting at `start`.
///
/// The hit is written only when `start + hit.len() < track.len()`; a hit whose
/// tail would land on the final sample is dropped. Returns whether it was written.
pub fn place(track: &mut [f64], start: usize, hit: &[f64]) -> bool {
    match start.checked_add(hit.len()) {
        Some(end) if end < track.len() => {
            for (dst, src) in track[start..end].iter_mut().zip(hit) {
                *dst += *src;
            }
            true
        }
        _ => false,
    }
}

/// Largest absolute sample value (0.0 for an empty buffer).
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(1.0, 0.7, 1), vec![1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_linspace_descending_hits_end_exactly() {
        let v = linspace(0.7, 0.0, 8820);
        assert_eq!(v[0], 0.7);
        assert_eq!(*v.last().unwrap(), 0.0);
    }

    #[test]
    fn test_linspace_exclusive() {
        let v = linspace_exclusive(0.0, 1.0, 4);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_samples_for_truncates() {
        assert_eq!(samples_for(0.001, 44100), 44);
        assert_eq!(samples_for(0.2, 44100), 8820);
        assert_eq!(samples_for(0.0, 44100), 0);
        assert_eq!(samples_for(-1.0, 44100), 0);
        assert_eq!(samples_for(f64::NAN, 44100), 0);
    }

    #[test]
    fn test_place_strict_boundary() {
        let mut track = vec![0.0; 10];
        // 6 + 4 == 10 is not < 10: dropped.
        assert!(!place(&mut track, 6, &[1.0; 4]));
        assert!(track.iter().all(|&s| s == 0.0));

        assert!(place(&mut track, 5, &[1.0; 4]));
        assert_eq!(&track[5..9], &[1.0; 4]);
        assert_eq!(track[9], 0.0);
    }

    #[test]
    fn test_place_hit_longer_than_track() {
        let mut track = vec![0.0; 3];
        assert!(!place(&mut track, 0, &[1.0; 8]));
        assert!(!place(&mut track, usize::MAX, &[1.0]));
    }

    #[test]
    fn test_place_accumulates() {
        let mut track = vec![0.5; 6];
        place(&mut track, 1, &[0.25, 0.25]);
        assert_eq!(track, vec![0.5, 0.75, 0.75, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_peak() {
        assert_eq!(peak(&[0.1, -0.9, 0.5]), 0.9);
        assert_eq!(peak(&[]), 0.0);
    }
}
