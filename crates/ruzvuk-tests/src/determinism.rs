//! Determinism checks over repeated runs.

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// Byte offset of the first difference, if any.
    pub first_diff: Option<usize>,
}

/// Runs `generate` `runs` times and compares the outputs byte for byte.
pub fn verify_determinism<F>(mut generate: F, runs: usize) -> DeterminismResult
where
    F: FnMut() -> Vec<u8>,
{
    let first = generate();
    let hash = blake3::hash(&first).to_hex().to_string();

    for _ in 1..runs {
        let next = generate();
        if next != first {
            let first_diff = first
                .iter()
                .zip(&next)
                .position(|(a, b)| a != b)
                .or(Some(first.len().min(next.len())));
            return DeterminismResult {
                is_deterministic: false,
                runs,
                hash,
                first_diff,
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        hash,
        first_diff: None,
    }
}
