//! Deterministic seed mixer - reproducible randomness from base seeds
//!
//! A distributed search run is reproducible end to end only if every random
//! generator in it is seeded from a small set of base seeds (a run ID, a worker
//! index, an individual index) through one deterministic function. This module
//! is that function. No component should construct a [`RandomSeed`] any other
//! way.
//!
//! The mixer folds an ordered sequence of unsigned integers into 64-bit state
//! (multiply by an odd constant, rotate, add) and finishes with an avalanche
//! pass, so that:
//!
//! - the result is a pure function of the input sequence,
//! - permuting the inputs changes the output (order-sensitive, not a
//!   commutative reduction),
//! - flipping any single input bit scrambles the output thoroughly enough to
//!   seed a generator without visible correlation to the inputs.

use crate::types::RandomSeed;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Incremental hash-mixing state.
///
/// ```
/// use evocore::seed::SeedMixer;
///
/// let mut mixer = SeedMixer::new();
/// mixer.mix(1000); // run id
/// mixer.mix(3);    // worker index
/// let seed = mixer.finish();
/// assert_eq!(seed, { let mut m = SeedMixer::new(); m.mix(1000); m.mix(3); m.finish() });
/// ```
#[derive(Debug, Clone)]
pub struct SeedMixer {
    state: u64,
}

impl SeedMixer {
    /// Odd multiplier; spreads each folded value across the full word.
    const MUL: u64 = 0xdc3e_b94a_f8ab_4c93;

    /// Start a fresh mixer. The initial state is nonzero so that leading
    /// zero inputs still move the state.
    pub fn new() -> Self {
        Self { state: 1 }
    }

    /// Fold one value into the state. Order matters.
    pub fn mix(&mut self, value: u64) {
        self.state = self
            .state
            .wrapping_mul(Self::MUL)
            .rotate_left(19)
            .wrapping_add(value);
    }

    /// Finish with an avalanche pass and return the mixed word.
    ///
    /// Does not consume the mixer; further [`mix`](Self::mix) calls continue
    /// from the pre-finish state.
    pub fn finish(&self) -> u64 {
        let mut z = self.state;
        z ^= z >> 30;
        z = z.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z ^= z >> 27;
        z = z.wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^= z >> 31;
        z
    }
}

impl Default for SeedMixer {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash-mix an ordered sequence of numbers into one 64-bit value.
pub fn hash_mix(numbers: &[u64]) -> u64 {
    let mut mixer = SeedMixer::new();
    for &number in numbers {
        mixer.mix(number);
    }
    mixer.finish()
}

/// Hash-mix exactly two numbers. Convenience form of [`hash_mix`].
pub fn mix_pair(first: u64, second: u64) -> u64 {
    let mut mixer = SeedMixer::new();
    mixer.mix(first);
    mixer.mix(second);
    mixer.finish()
}

/// Derive a generator seed from an ordered sequence of base seeds.
///
/// Narrowing to [`RandomSeed`] width by truncation is deterministic and
/// platform-independent.
pub fn derive_seed(numbers: &[u64]) -> RandomSeed {
    hash_mix(numbers) as RandomSeed
}

/// Construct the engine's pseudo-random generator from a derived seed.
///
/// This is the sole sanctioned seed-to-generator path; routing every
/// generator through it keeps a whole run reproducible from its top-level
/// seeds.
pub fn seeded_rng(seed: RandomSeed) -> StdRng {
    StdRng::seed_from_u64(seed as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_mix_is_deterministic() {
        assert_eq!(mix_pair(17, 91), mix_pair(17, 91));
        assert_eq!(hash_mix(&[1, 2, 3]), hash_mix(&[1, 2, 3]));
    }

    #[test]
    fn test_mix_is_order_sensitive() {
        assert_ne!(mix_pair(17, 91), mix_pair(91, 17));
        assert_ne!(hash_mix(&[1, 2, 3]), hash_mix(&[3, 2, 1]));
    }

    #[test]
    fn test_single_does_not_collapse_to_pair() {
        assert_ne!(hash_mix(&[42]), mix_pair(42, 42));
    }

    #[test]
    fn test_small_input_changes_spread() {
        let a = mix_pair(1, 2);
        let b = mix_pair(1, 3);
        assert_ne!(a, b);
        // A one-bit input change should flip a large share of output bits.
        let differing = (a ^ b).count_ones();
        assert!(differing > 16, "only {} bits changed", differing);
    }

    #[test]
    fn test_incremental_matches_slice_form() {
        let mut mixer = SeedMixer::new();
        mixer.mix(5);
        mixer.mix(6);
        mixer.mix(7);
        assert_eq!(mixer.finish(), hash_mix(&[5, 6, 7]));
    }

    #[test]
    fn test_derive_seed_stable() {
        let seed = derive_seed(&[1000, 3]);
        assert_eq!(seed, derive_seed(&[1000, 3]));
        assert_ne!(seed, derive_seed(&[1000, 4]));
    }

    #[test]
    fn test_seeded_rng_reproducible() {
        let mut a = seeded_rng(12345);
        let mut b = seeded_rng(12345);
        for _ in 0..8 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }
}
