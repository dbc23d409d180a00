//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Every stochastic operation in this crate takes an explicit `&mut Pcg32`;
//! nothing draws from ambient state. Seeds for independent components are
//! derived with BLAKE3 so that, for example, parameter sampling and mod-signal
//! synthesis never share a stream.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a named component from the base seed.
///
/// Hashes the base seed (little-endian) followed by the UTF-8 key and keeps
/// the first four bytes of the digest.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Creates an RNG for a named component.
pub fn create_component_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, key))
}

/// Draws uniformly from `[min, max)`; returns `min` when the range is empty.
pub fn sample_uniform(rng: &mut Pcg32, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// Picks one element uniformly, or `None` for an empty slice.
pub fn choice<'a, T>(rng: &mut Pcg32, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}
