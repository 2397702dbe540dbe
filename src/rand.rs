//! The user-facing generator.
//!
//! [`Rand`] owns an [`Sfc64`] engine plus the byte reader's partially consumed word.
//! Every output method draws from the engine through the free functions in
//! [`bounded`](crate::bounded), [`ziggurat`](crate::ziggurat) and [`seq`](crate::seq);
//! the methods here only add the receiver.
//!
//! # Usage
//!
//! ```rust
//! use zigrand::Rand;
//!
//! let mut rng = Rand::new(12345);
//! let die = rng.uint32n(6)? + 1;
//! let coin: bool = rng.gen();
//! let delay = rng.exp_float64() * 0.25;
//! let mut deck: Vec<u8> = (0..52).collect();
//! rng.shuffle_slice(&mut deck);
//! # let _ = (die, coin, delay);
//! # Ok::<(), zigrand::RandError>(())
//! ```
//!
//! # Determinism
//!
//! Two generators built from the same seed words produce identical output for
//! identical call sequences, on every platform. Note that the number of words a
//! bounded draw consumes depends on rejections, so only the same call sequence is
//! guaranteed to reproduce.

use crate::bounded;
use crate::codec::StateRecord;
use crate::engine::{seed_words_from, RngCore, SeedableRng, Sfc64};
use crate::entropy::{EntropySource, SystemEntropy};
use crate::error::RandResult;
use crate::seq;
use crate::ziggurat::{self, Distribution};
use serde::{Deserialize, Serialize};

/// A seedable, serializable pseudo-random generator.
///
/// Not thread-safe by sharing: use one instance per thread, or check instances out of a
/// [`RandPool`](crate::RandPool).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StateRecord", into = "StateRecord")]
pub struct Rand {
    pub(crate) engine: Sfc64,
    /// Word the byte reader is draining, already shifted past the bytes handed out.
    pub(crate) read_val: u64,
    /// Bytes of `read_val` not yet handed out, `0..=7`.
    pub(crate) read_pos: u8,
}

impl Rand {
    /// Creates a generator from a single seed word.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self::from_engine(Sfc64::new(seed))
    }

    /// Creates a generator from three seed words.
    #[must_use]
    pub const fn from_seeds(a: u64, b: u64, c: u64) -> Self {
        Self::from_engine(Sfc64::from_seeds(a, b, c))
    }

    /// Creates a generator from a list of one or three seed words.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::InvalidSeed`](crate::RandError::InvalidSeed) for any other length.
    pub fn from_seed_words(words: &[u64]) -> RandResult<Self> {
        Sfc64::from_seed_words(words).map(Self::from_engine)
    }

    /// Wraps an engine with an empty byte reader.
    #[must_use]
    pub const fn from_engine(engine: Sfc64) -> Self {
        Self {
            engine,
            read_val: 0,
            read_pos: 0,
        }
    }

    /// Creates a generator seeded from [`SystemEntropy`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_entropy_source(&mut SystemEntropy)
    }

    /// Creates a generator from 24 bytes of `source`.
    #[must_use]
    pub fn from_entropy_source<E: EntropySource + ?Sized>(source: &mut E) -> Self {
        let [a, b, c] = seed_words_from(source);
        tracing::trace!("seeding generator from entropy source");
        Self::from_seeds(a, b, c)
    }

    /// A state that is never handed to callers, used to move a generator out of a guard.
    pub(crate) const fn vacant() -> Self {
        Self::from_engine(Sfc64::from_words([0; 4]))
    }

    /// Re-seeds in place from a single word, discarding any buffered read bytes.
    pub fn seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Re-seeds in place from one or three words, discarding any buffered read bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::InvalidSeed`](crate::RandError::InvalidSeed) for any other
    /// length; the generator is left unchanged.
    pub fn seed_words(&mut self, words: &[u64]) -> RandResult<()> {
        *self = Self::from_seed_words(words)?;
        Ok(())
    }

    /// The underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &Sfc64 {
        &self.engine
    }

    /// Returns the next 64-bit word.
    #[inline]
    #[must_use]
    pub fn next_u64(&mut self) -> u64 {
        self.engine.next_u64()
    }

    /// Returns the high 32 bits of the next word.
    #[inline]
    #[must_use]
    pub fn next_u32(&mut self) -> u32 {
        self.engine.next_u32()
    }

    /// Uniform `u32` in `[0, n)`. See [`bounded::uint32n`].
    #[inline]
    pub fn uint32n(&mut self, n: u32) -> RandResult<u32> {
        bounded::uint32n(&mut self.engine, n)
    }

    /// Uniform `u64` in `[0, n)`. See [`bounded::uint64n`].
    #[inline]
    pub fn uint64n(&mut self, n: u64) -> RandResult<u64> {
        bounded::uint64n(&mut self.engine, n)
    }

    /// Uniform `i32` in `[0, n)`; `n` must be positive.
    #[inline]
    pub fn int31n(&mut self, n: i32) -> RandResult<i32> {
        bounded::int31n(&mut self.engine, n)
    }

    /// Uniform `i64` in `[0, n)`; `n` must be positive.
    #[inline]
    pub fn int63n(&mut self, n: i64) -> RandResult<i64> {
        bounded::int63n(&mut self.engine, n)
    }

    /// Uniform `isize` in `[0, n)`; `n` must be positive.
    #[inline]
    pub fn intn(&mut self, n: isize) -> RandResult<isize> {
        bounded::intn(&mut self.engine, n)
    }

    /// Non-negative `i32`.
    #[inline]
    #[must_use]
    pub fn int31(&mut self) -> i32 {
        bounded::int31(&mut self.engine)
    }

    /// Non-negative `i64`.
    #[inline]
    #[must_use]
    pub fn int63(&mut self) -> i64 {
        bounded::int63(&mut self.engine)
    }

    /// Non-negative `isize`.
    #[inline]
    #[must_use]
    pub fn int(&mut self) -> isize {
        bounded::int(&mut self.engine)
    }

    /// Uniform `f64` in `[0, 1)` with 53 bits of precision.
    #[inline]
    #[must_use]
    pub fn float64(&mut self) -> f64 {
        f64::random(&mut self.engine)
    }

    /// Uniform `f32` in `[0, 1)` with 24 bits of precision.
    #[inline]
    #[must_use]
    pub fn float32(&mut self) -> f32 {
        f32::random(&mut self.engine)
    }

    /// Exponential sample with rate 1. See [`ziggurat::exp_float64`].
    #[inline]
    #[must_use]
    pub fn exp_float64(&mut self) -> f64 {
        ziggurat::exp_float64(&mut self.engine)
    }

    /// Standard normal sample. See [`ziggurat::norm_float64`].
    #[inline]
    #[must_use]
    pub fn norm_float64(&mut self) -> f64 {
        ziggurat::norm_float64(&mut self.engine)
    }

    /// Draws one sample from `dist`.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.engine)
    }

    /// Generates a random value of type `T`.
    #[inline]
    pub fn gen<T: RandomValue>(&mut self) -> T {
        T::random(&mut self.engine)
    }

    /// Fills `buf` with random bytes and returns `buf.len()`.
    ///
    /// Bytes leave each word least-significant first. The unread remainder of the last
    /// word is kept, so splitting a read into chunks of any sizes yields exactly the
    /// bytes of one contiguous read.
    pub fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut val = self.read_val;
        let mut pos = self.read_pos;
        for byte in buf.iter_mut() {
            if pos == 0 {
                val = self.engine.next_u64();
                pos = 8;
            }
            *byte = val as u8;
            val >>= 8;
            pos -= 1;
        }
        self.read_val = val;
        self.read_pos = pos;
        buf.len()
    }

    /// Fisher-Yates shuffle over indices `0..len`. See [`seq::shuffle`].
    #[inline]
    pub fn shuffle<F: FnMut(usize, usize)>(&mut self, len: usize, swap: F) {
        seq::shuffle(&mut self.engine, len, swap);
    }

    /// Shuffles a slice in place.
    #[inline]
    pub fn shuffle_slice<T>(&mut self, slice: &mut [T]) {
        seq::shuffle_slice(&mut self.engine, slice);
    }

    /// A uniformly random permutation of `0..n`.
    #[must_use]
    pub fn perm(&mut self, n: usize) -> Vec<usize> {
        seq::perm(&mut self.engine, n)
    }

    /// Derives an independent generator seeded from three words of this one.
    #[must_use]
    pub fn split(&mut self) -> Self {
        let a = self.next_u64();
        let b = self.next_u64();
        let c = self.next_u64();
        Self::from_seeds(a, b, c)
    }
}

impl RngCore for Rand {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.engine.next_u64()
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.engine.next_u32()
    }
}

impl SeedableRng for Rand {
    fn seed_from_u64(seed: u64) -> Self {
        Self::new(seed)
    }

    fn from_entropy_source<E: EntropySource + ?Sized>(source: &mut E) -> Self {
        Self::from_entropy_source(source)
    }
}

impl std::io::Read for Rand {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        Ok(Self::read(self, buf))
    }
}

/// Types that can be drawn uniformly from a generator with [`Rand::gen`].
pub trait RandomValue {
    /// Generates a random value of this type.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! random_from_u32 {
    ($($ty:ty),*) => {$(
        impl RandomValue for $ty {
            #[inline]
            fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
                rng.next_u32() as Self
            }
        }
    )*};
}

macro_rules! random_from_u64 {
    ($($ty:ty),*) => {$(
        impl RandomValue for $ty {
            #[inline]
            fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
                rng.next_u64() as Self
            }
        }
    )*};
}

random_from_u32!(u8, u16, u32, i8, i16, i32);
random_from_u64!(u64, i64, usize, isize);

impl RandomValue for u128 {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let high = Self::from(rng.next_u64());
        let low = Self::from(rng.next_u64());
        (high << 64) | low
    }
}

impl RandomValue for i128 {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        u128::random(rng) as Self
    }
}

impl RandomValue for bool {
    #[inline]
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        rng.next_u64() >> 63 == 1
    }
}

impl RandomValue for f64 {
    /// Uniform in `[0.0, 1.0)` from the top 53 bits of one word.
    #[inline]
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        (rng.next_u64() >> 11) as Self * (1.0 / (1u64 << 53) as Self)
    }
}

impl RandomValue for f32 {
    /// Uniform in `[0.0, 1.0)` from the top 24 bits of one word.
    #[inline]
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        (rng.next_u64() >> 40) as Self * (1.0 / (1u32 << 24) as Self)
    }
}

#[cfg(test)]
#[allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;
    use crate::error::RandError;
    use std::io::Read as _;

    #[test]
    fn test_rand_golden() {
        // Same words as the bare engine: the reader does not touch the word stream.
        let mut rng = Rand::new(0);
        assert_eq!(rng.next_u64(), 0x3acfa029e3cc6041);
        assert_eq!(rng.next_u64(), 0xf5b6515bf2ee419c);
        assert_eq!(rng.next_u32(), 0x12596358);
    }

    #[test]
    fn test_seed_resets_reader() {
        let mut rng = Rand::new(3);
        let mut scratch = [0u8; 3];
        rng.read(&mut scratch);
        assert_eq!(rng.read_pos, 5);

        rng.seed(3);
        assert_eq!(rng, Rand::new(3));
    }

    #[test]
    fn test_seed_words_error_leaves_state() {
        let mut rng = Rand::new(4);
        let _ = rng.next_u64();
        let before = rng.clone();
        let err = rng.seed_words(&[1, 2]).unwrap_err();
        assert!(matches!(err, RandError::InvalidSeed { words: 2, .. }));
        assert_eq!(rng, before);

        rng.seed_words(&[1, 2, 3]).unwrap();
        assert_eq!(rng, Rand::from_seeds(1, 2, 3));
    }

    #[test]
    fn test_read_bytes_are_little_endian_words() {
        let mut rng = Rand::new(5);
        let mut words = Rand::new(5);
        let mut buf = [0u8; 16];
        assert_eq!(rng.read(&mut buf), 16);

        let mut expected = [0u8; 16];
        expected[..8].copy_from_slice(&words.next_u64().to_le_bytes());
        expected[8..].copy_from_slice(&words.next_u64().to_le_bytes());
        assert_eq!(buf, expected);
        assert_eq!(rng.read_pos, 0);
    }

    #[test]
    fn test_read_chunked_equals_contiguous() {
        let mut whole = Rand::new(6);
        let mut contiguous = [0u8; 37];
        whole.read(&mut contiguous);

        let mut chunked = Rand::new(6);
        let mut pieces = Vec::new();
        for size in [1usize, 3, 0, 7, 8, 2, 16] {
            let mut part = vec![0u8; size];
            chunked.read(&mut part);
            pieces.extend_from_slice(&part);
        }
        assert_eq!(pieces, contiguous);
        assert_eq!(chunked, whole);
    }

    #[test]
    fn test_empty_read_draws_nothing() {
        let mut rng = Rand::new(7);
        let before = rng.clone();
        assert_eq!(rng.read(&mut []), 0);
        assert_eq!(rng, before);
    }

    #[test]
    fn test_io_read_matches_inherent_read() {
        let mut a = Rand::new(8);
        let mut b = Rand::new(8);
        let mut via_io = [0u8; 11];
        let mut via_inherent = [0u8; 11];
        assert_eq!(a.read(&mut via_inherent), 11);
        std::io::Read::read_exact(&mut b, &mut via_io).unwrap();
        assert_eq!(via_io, via_inherent);

        let mut taken = Vec::new();
        Rand::new(8).take(11).read_to_end(&mut taken).unwrap();
        assert_eq!(taken, via_inherent);
    }

    #[test]
    fn test_floats_use_top_bits() {
        let mut rng = Rand::new(9);
        let mut words = Sfc64::new(9);
        for _ in 0..1000 {
            let f = rng.float64();
            assert_eq!(f, (words.next_u64() >> 11) as f64 / 9007199254740992.0);
            assert!((0.0..1.0).contains(&f));

            let g = rng.float32();
            assert_eq!(g, (words.next_u64() >> 40) as f32 / 16777216.0);
            assert!((0.0..1.0).contains(&g));
        }
    }

    #[test]
    fn test_float_extremes() {
        struct Fixed(u64);
        impl RngCore for Fixed {
            fn next_u64(&mut self) -> u64 {
                self.0
            }
        }
        assert_eq!(f64::random(&mut Fixed(0)), 0.0);
        assert!(f64::random(&mut Fixed(u64::MAX)) < 1.0);
        assert!(f32::random(&mut Fixed(u64::MAX)) < 1.0);
    }

    #[test]
    fn test_gen_types() {
        let mut rng = Rand::new(10);
        let mut words = Sfc64::new(10);

        let x: u32 = rng.gen();
        assert_eq!(x, words.next_u32());
        let y: u64 = rng.gen();
        assert_eq!(y, words.next_u64());
        let z: u128 = rng.gen();
        let hi = u128::from(words.next_u64());
        let lo = u128::from(words.next_u64());
        assert_eq!(z, hi << 64 | lo);

        let heads = (0..10_000).filter(|_| rng.gen::<bool>()).count();
        assert!((4_500..5_500).contains(&heads), "heads={heads}");
    }

    #[test]
    fn test_bounded_methods_delegate() {
        let mut rng = Rand::new(11);
        let mut engine = Sfc64::new(11);
        for n in [2u32, 3, 10, 1000, u32::MAX] {
            assert_eq!(rng.uint32n(n).unwrap(), bounded::uint32n(&mut engine, n).unwrap());
        }
        assert_eq!(
            rng.int63n(1 << 40).unwrap(),
            bounded::int63n(&mut engine, 1 << 40).unwrap()
        );
        assert!(rng.intn(0).is_err());
        assert!(rng.int31n(-5).is_err());
        assert!(rng.int31() >= 0);
        assert!(rng.int63() >= 0);
        assert!(rng.int() >= 0);
    }

    #[test]
    fn test_split_is_independent() {
        let mut parent = Rand::new(12);
        let mut child = parent.split();
        let mut expected_parent = Rand::new(12);
        let a = expected_parent.next_u64();
        let b = expected_parent.next_u64();
        let c = expected_parent.next_u64();
        assert_eq!(child, Rand::from_seeds(a, b, c));
        assert_eq!(parent, expected_parent);

        let same = (0..100).filter(|_| parent.next_u64() == child.next_u64()).count();
        assert!(same < 2);
    }

    #[test]
    fn test_sample_distribution() {
        let dist = ziggurat::Exp::new(2.0).unwrap();
        let mut rng = Rand::new(13);
        let mut engine = Sfc64::new(13);
        let x: f64 = rng.sample(&dist);
        assert_eq!(x, ziggurat::exp_float64(&mut engine) / 2.0);
    }

    #[test]
    fn test_seedable_rng_impl() {
        assert_eq!(<Rand as SeedableRng>::seed_from_u64(14), Rand::new(14));

        struct Zeros;
        impl EntropySource for Zeros {
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(0);
            }
        }
        assert_eq!(Rand::from_entropy_source(&mut Zeros), Rand::from_seeds(0, 0, 0));
        assert_ne!(Rand::from_entropy(), Rand::from_entropy());
    }

    #[test]
    fn test_generic_consumers_accept_rand() {
        fn draw<R: RngCore>(rng: &mut R) -> u64 {
            bounded::uint64n(rng, 100).unwrap()
        }
        let mut rng = Rand::new(15);
        assert!(draw(&mut rng) < 100);
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
        /// Property: any partition of a byte span reads the same bytes as one read.
        #[test]
        fn prop_chunked_read_law(
            seed in any::<u64>(),
            sizes in prop::collection::vec(0usize..20, 0..12),
        ) {
            let total: usize = sizes.iter().sum();
            let mut whole = Rand::new(seed);
            let mut contiguous = vec![0u8; total];
            whole.read(&mut contiguous);

            let mut chunked = Rand::new(seed);
            let mut joined = Vec::with_capacity(total);
            for size in sizes {
                let mut part = vec![0u8; size];
                chunked.read(&mut part);
                joined.extend_from_slice(&part);
            }
            prop_assert_eq!(joined, contiguous);
            prop_assert!(chunked.read_pos <= 7);
        }

        /// Property: floats stay inside `[0, 1)`.
        #[test]
        fn prop_floats_in_unit_interval(seed in any::<u64>()) {
            let mut rng = Rand::new(seed);
            for _ in 0..100 {
                let f = rng.float64();
                prop_assert!((0.0..1.0).contains(&f));
                let g = rng.float32();
                prop_assert!((0.0..1.0).contains(&g));
            }
        }
    }
}
