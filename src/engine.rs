//! The bit engine: SFC64 state and the core generator traits.
//!
//! # SFC64 Algorithm
//!
//! SFC64 ("Small Fast Chaotic", Chris Doty-Humphrey, from PractRand) keeps three
//! 64-bit mixing words and a 64-bit counter:
//! - 256 bits of state, producing 64-bit output
//! - Minimum period of 2^64 for every state (the counter never repeats), so there
//!   are no forbidden or weak seeds; seed `0` and seed `u64::MAX` are ordinary
//! - Passes PractRand and TestU01 BigCrush
//! - One add, one xor-shift, one shift-add and one rotate per word
//!
//! NOT cryptographically secure.
//!
//! # Usage
//!
//! ```rust
//! use zigrand::engine::{RngCore, SeedableRng, Sfc64};
//!
//! let mut engine = Sfc64::seed_from_u64(12345);
//! let word = engine.next_u64();
//! let half = engine.next_u32(); // high half of one fresh word
//! # let _ = (word, half);
//! ```

use crate::entropy::{EntropySource, SystemEntropy};
use crate::error::{RandError, RandResult};
use serde::{Deserialize, Serialize};

/// Output rounds discarded after seeding from one word.
const SINGLE_SEED_ROUNDS: u32 = 12;

/// Output rounds discarded after seeding from three words.
const TRIPLE_SEED_ROUNDS: u32 = 18;

/// A source of raw 64-bit pseudo-random words.
///
/// Everything else in the crate (bounded draws, Ziggurat sampling, shuffles) is
/// built on this trait and never touches generator state directly.
pub trait RngCore {
    /// Advances the state and returns the next 64-bit word.
    fn next_u64(&mut self) -> u64;

    /// Returns the high 32 bits of one fresh 64-bit word.
    ///
    /// Always consumes exactly one word, so word economy is predictable.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}

impl<R: RngCore + ?Sized> RngCore for &mut R {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Trait for seeding random number generators.
pub trait SeedableRng: Sized {
    /// Creates a new generator seeded from a 64-bit value.
    ///
    /// Equal seeds always produce equal sequences.
    #[must_use]
    fn seed_from_u64(seed: u64) -> Self;

    /// Creates a new generator seeded from bytes supplied by `source`.
    #[must_use]
    fn from_entropy_source<E: EntropySource + ?Sized>(source: &mut E) -> Self;

    /// Creates a new generator seeded from [`SystemEntropy`].
    ///
    /// Non-deterministic; use [`seed_from_u64`](Self::seed_from_u64) for reproducible runs.
    #[must_use]
    fn from_entropy() -> Self {
        Self::from_entropy_source(&mut SystemEntropy)
    }
}

/// SFC64 generator state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sfc64 {
    a: u64,
    b: u64,
    c: u64,
    w: u64,
}

impl Sfc64 {
    /// Creates a generator from a single seed word.
    ///
    /// All three mixing words start at `seed`; 12 outputs are discarded to diffuse it.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self::with_rounds(seed, seed, seed, SINGLE_SEED_ROUNDS)
    }

    /// Creates a generator from three seed words, discarding 18 outputs.
    #[must_use]
    pub const fn from_seeds(a: u64, b: u64, c: u64) -> Self {
        Self::with_rounds(a, b, c, TRIPLE_SEED_ROUNDS)
    }

    /// Creates a generator from a seed word list of length 1 or 3.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::InvalidSeed`] for any other length.
    pub fn from_seed_words(words: &[u64]) -> RandResult<Self> {
        match *words {
            [seed] => Ok(Self::new(seed)),
            [a, b, c] => Ok(Self::from_seeds(a, b, c)),
            _ => Err(RandError::InvalidSeed {
                words: words.len(),
                info: "expected exactly 1 or 3 seed words".to_owned(),
            }),
        }
    }

    const fn with_rounds(a: u64, b: u64, c: u64, rounds: u32) -> Self {
        let mut engine = Self { a, b, c, w: 1 };
        let mut round = 0;
        while round < rounds {
            let _ = engine.next_u64();
            round += 1;
        }
        engine
    }

    /// Generates the next 64-bit word.
    #[inline]
    #[must_use]
    pub const fn next_u64(&mut self) -> u64 {
        let out = self.a.wrapping_add(self.b).wrapping_add(self.w);
        self.w = self.w.wrapping_add(1);
        self.a = self.b ^ (self.b >> 11);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(24).wrapping_add(out);
        out
    }

    /// Generates the next 32-bit value: the high half of one fresh word.
    #[inline]
    #[must_use]
    pub const fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Returns the raw state words `[a, b, c, counter]`.
    #[must_use]
    pub const fn to_words(&self) -> [u64; 4] {
        [self.a, self.b, self.c, self.w]
    }

    /// Restores a generator from raw state words previously returned by
    /// [`to_words`](Self::to_words). Every combination is a valid SFC64 state.
    #[must_use]
    pub const fn from_words(words: [u64; 4]) -> Self {
        let [a, b, c, w] = words;
        Self { a, b, c, w }
    }
}

impl RngCore for Sfc64 {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        Self::next_u64(self)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        Self::next_u32(self)
    }
}

impl SeedableRng for Sfc64 {
    fn seed_from_u64(seed: u64) -> Self {
        Self::new(seed)
    }

    fn from_entropy_source<E: EntropySource + ?Sized>(source: &mut E) -> Self {
        let [a, b, c] = seed_words_from(source);
        tracing::trace!("seeding engine from entropy source");
        Self::from_seeds(a, b, c)
    }
}

/// Pulls three little-endian seed words out of an entropy source.
pub(crate) fn seed_words_from<E: EntropySource + ?Sized>(source: &mut E) -> [u64; 3] {
    let mut bytes = [0u8; 24];
    source.fill_bytes(&mut bytes);
    let mut words = [0u64; 3];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut le = [0u8; 8];
        le.copy_from_slice(chunk);
        *word = u64::from_le_bytes(le);
    }
    words
}

#[cfg(test)]
#[allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;

    #[test]
    fn test_sfc64_deterministic() {
        let mut e1 = Sfc64::seed_from_u64(12345);
        let mut e2 = Sfc64::seed_from_u64(12345);

        for _ in 0..1000 {
            assert_eq!(e1.next_u64(), e2.next_u64());
        }
    }

    #[test]
    fn test_sfc64_different_seeds() {
        let mut e1 = Sfc64::seed_from_u64(12345);
        let mut e2 = Sfc64::seed_from_u64(54321);

        let same_count = (0..100).filter(|_| e1.next_u64() == e2.next_u64()).count();
        assert!(same_count < 2);
    }

    // Test that known seeds produce the expected sequence (golden test)
    #[test]
    fn test_sfc64_golden_single_seed() {
        let mut engine = Sfc64::new(0);

        // Regression values: guard against accidental changes to the step or seeding.
        let expected = [
            0x3acfa029e3cc6041_u64,
            0xf5b6515bf2ee419c,
            0x1259635894a29b61,
            0x0b6ae75395f8ebd6,
            0x225622285ce302e2,
        ];

        for &exp in &expected {
            assert_eq!(engine.next_u64(), exp, "Golden test failed");
        }
    }

    #[test]
    fn test_sfc64_golden_three_seeds() {
        let mut engine = Sfc64::from_seeds(1, 2, 3);
        assert_eq!(engine.next_u64(), 0xbf36b0b6738f81ed);
        assert_eq!(engine.next_u64(), 0xcd527698dd821546);
        assert_eq!(engine.next_u64(), 0x8db86d5a4db467e8);
    }

    #[test]
    fn test_seed_state_after_warmup() {
        let engine = Sfc64::new(0);
        assert_eq!(
            engine.to_words(),
            [0x2b17c96e0f646e00, 0x0fb7d6bbd467f234, 0x36000574c55015a4, 13]
        );
    }

    #[test]
    fn test_extreme_seeds_are_not_degenerate() {
        for seed in [0, u64::MAX] {
            let mut engine = Sfc64::new(seed);
            let words: Vec<u64> = (0..64).map(|_| engine.next_u64()).collect();
            let mut unique = words.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), words.len(), "seed {seed:#x} repeated a word");

            let ones: u32 = words.iter().map(|w| w.count_ones()).sum();
            // 64 words * 64 bits: expect ~2048 ones
            assert!((1800..2300).contains(&ones), "seed {seed:#x}: {ones} ones");
        }
    }

    #[test]
    fn test_next_u32_is_high_half() {
        let mut e1 = Sfc64::new(7);
        let mut e2 = Sfc64::new(7);
        for _ in 0..100 {
            assert_eq!(u64::from(e1.next_u32()), e2.next_u64() >> 32);
        }
    }

    #[test]
    fn test_from_seed_words_lengths() {
        assert_eq!(Sfc64::from_seed_words(&[9]).unwrap(), Sfc64::new(9));
        assert_eq!(
            Sfc64::from_seed_words(&[1, 2, 3]).unwrap(),
            Sfc64::from_seeds(1, 2, 3)
        );

        for bad in [&[][..], &[1, 2][..], &[1, 2, 3, 4][..]] {
            let err = Sfc64::from_seed_words(bad).unwrap_err();
            assert!(
                matches!(err, RandError::InvalidSeed { words, .. } if words == bad.len()),
                "unexpected error {err:?}"
            );
        }
    }

    #[test]
    fn test_words_roundtrip() {
        let mut engine = Sfc64::new(99);
        let _ = engine.next_u64();
        let mut restored = Sfc64::from_words(engine.to_words());
        for _ in 0..32 {
            assert_eq!(engine.next_u64(), restored.next_u64());
        }
    }

    #[test]
    fn test_counter_wraps() {
        let mut engine = Sfc64::from_words([1, 2, 3, u64::MAX]);
        let _ = engine.next_u64();
        assert_eq!(engine.to_words()[3], 0);
    }

    #[test]
    fn test_from_entropy_source_uses_bytes_little_endian() {
        struct Counting;
        impl EntropySource for Counting {
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                for (i, b) in dest.iter_mut().enumerate() {
                    *b = i as u8;
                }
            }
        }
        let words = seed_words_from(&mut Counting);
        assert_eq!(words[0], 0x0706050403020100);
        assert_eq!(words[2], 0x1716151413121110);
        assert_eq!(
            Sfc64::from_entropy_source(&mut Counting),
            Sfc64::from_seeds(words[0], words[1], words[2])
        );
    }

    #[test]
    fn test_seedable_from_entropy() {
        // Just verify it doesn't panic and yields distinct generators
        let mut e1 = Sfc64::from_entropy();
        let mut e2 = Sfc64::from_entropy();
        assert_ne!(e1.next_u64(), e2.next_u64());
    }

    #[test]
    fn test_rng_core_through_mut_ref() {
        let mut engine = Sfc64::new(5);
        let mut copy = engine.clone();
        let mut by_ref = &mut engine;
        assert_eq!(RngCore::next_u64(&mut by_ref), copy.next_u64());
    }
}

// =============================================================================
// Property-Based Tests
// =============================================================================

#[cfg(test)]
#[allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Same seed always produces identical sequence.
        #[test]
        fn prop_determinism_same_seed_same_sequence(seed in any::<u64>()) {
            let mut e1 = Sfc64::seed_from_u64(seed);
            let mut e2 = Sfc64::seed_from_u64(seed);

            for _ in 0..100 {
                prop_assert_eq!(e1.next_u64(), e2.next_u64());
            }
        }

        /// Property: Different seeds produce different sequences.
        #[test]
        fn prop_different_seeds_different_sequences(seed1 in any::<u64>(), seed2 in any::<u64>()) {
            prop_assume!(seed1 != seed2);

            let mut e1 = Sfc64::seed_from_u64(seed1);
            let mut e2 = Sfc64::seed_from_u64(seed2);

            let seq1: Vec<u64> = (0..8).map(|_| e1.next_u64()).collect();
            let seq2: Vec<u64> = (0..8).map(|_| e2.next_u64()).collect();

            prop_assert_ne!(seq1, seq2);
        }

        /// Property: Clone produces an identical generator from any point.
        #[test]
        fn prop_clone_produces_identical_sequence(seed in any::<u64>(), advance in 0usize..100) {
            let mut e1 = Sfc64::seed_from_u64(seed);
            for _ in 0..advance {
                let _ = e1.next_u64();
            }
            let mut e2 = e1.clone();
            for _ in 0..50 {
                prop_assert_eq!(e1.next_u64(), e2.next_u64());
            }
        }

        /// Property: every bit position is set about half the time.
        ///
        /// 1000 samples: expected 500 per bit, stddev ~15.8; 30% tolerance.
        #[test]
        fn prop_uniform_bit_distribution(seed in any::<u64>()) {
            let mut engine = Sfc64::seed_from_u64(seed);
            let samples = 1000;
            let mut bit_counts = [0u32; 64];

            for _ in 0..samples {
                let val = engine.next_u64();
                for (bit, count) in bit_counts.iter_mut().enumerate() {
                    if (val >> bit) & 1 == 1 {
                        *count += 1;
                    }
                }
            }

            let expected = samples as f64 / 2.0;
            let tolerance = expected * 0.30;
            for (bit, &count) in bit_counts.iter().enumerate() {
                prop_assert!(
                    (count as f64 - expected).abs() < tolerance,
                    "Bit {} has count {} (expected ~{} +/- {})",
                    bit, count, expected, tolerance
                );
            }
        }
    }
}
