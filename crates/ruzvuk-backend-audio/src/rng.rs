//! Seeded PCG32 random source.
//!
//! Randomness never comes from a global generator: every track generator that
//! needs it receives a `&mut Pcg32` created here.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Returns the requested seed, or a fresh one from OS entropy.
pub fn resolve_seed(seed: Option<u32>) -> u32 {
    seed.unwrap_or_else(rand::random::<u32>)
}
