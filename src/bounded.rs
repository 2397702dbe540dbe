//! Unbiased bounded integers via Lemire's multiply-and-reject reduction.
//!
//! A raw word `v` is mapped to `[0, n)` by taking the high half of the widening
//! product `v * n`. The low half measures how far `v` sits inside its bucket; the
//! first `2^64 mod n` positions of the low half are over-represented, so draws
//! landing there are rejected. The threshold `(2^64 - n) mod n` is only computed
//! when the low half is already below `n`, keeping the common path division-free.
//!
//! Reference: D. Lemire, "Fast Random Integer Generation in an Interval", ACM TOMACS 2019.
//!
//! # 32-bit fast path
//!
//! For `n < 2^32` the high word of `v * n` is assembled from two 32x32->64
//! multiplies and one carry (see [`mul_hi_u32_fast`]). The upper half of the
//! fraction word is non-zero for all but a `2^-32` share of draws, and whenever
//! it is non-zero the full low half is at least `2^32 > n`, so no rejection is
//! possible and the fast result is returned. Otherwise the exact 64-bit
//! reduction runs on the same `v`. The output and the number of words consumed
//! are therefore identical to the general formulation for every `(n, v)`.

use crate::engine::RngCore;
use crate::error::{RandError, RandResult};

/// Full 128-bit product of `a * b`, returned as `(high, low)`.
#[inline]
#[must_use]
pub const fn mul_wide_u64(a: u64, b: u64) -> (u64, u64) {
    let product = (a as u128) * (b as u128);
    ((product >> 64) as u64, product as u64)
}

/// High 32 bits of the 96-bit product `n * v`, computed with 32-bit halves only.
///
/// Returns `(high, fraction_hi)` where `fraction_hi` is bits 32..64 of the product.
/// `high` always equals `mul_wide_u64(v, n as u64).0`, and the low 64 bits of the
/// product are `fraction_hi << 32 | (n * (v as u32)) as u32`.
#[inline]
#[must_use]
pub const fn mul_hi_u32_fast(n: u32, v: u64) -> (u32, u32) {
    let upper = (n as u64) * (v >> 32);
    let lower = (n as u64) * (v & 0xFFFF_FFFF);
    let (fraction_hi, carry) = (upper as u32).overflowing_add((lower >> 32) as u32);
    ((upper >> 32) as u32 + carry as u32, fraction_hi)
}

/// Exact 64-bit reduction of an already drawn word `v` into `[0, n)`, redrawing on rejection.
#[inline]
fn reduce_u64<R: RngCore + ?Sized>(rng: &mut R, v: u64, n: u64) -> u64 {
    let (mut hi, mut lo) = mul_wide_u64(v, n);
    if lo < n {
        let threshold = n.wrapping_neg() % n;
        while lo < threshold {
            (hi, lo) = mul_wide_u64(rng.next_u64(), n);
        }
    }
    hi
}

/// Returns a uniform `u32` in `[0, n)`.
///
/// `n == 1` returns 0 without consuming a word.
///
/// # Errors
///
/// Returns [`RandError::InvalidArgument`] if `n == 0`.
#[inline]
pub fn uint32n<R: RngCore + ?Sized>(rng: &mut R, n: u32) -> RandResult<u32> {
    match n {
        0 => Err(RandError::invalid_argument("uint32n", "bound must be positive, got 0")),
        1 => Ok(0),
        _ => Ok(uint32n_unchecked(rng, n)),
    }
}

#[inline]
fn uint32n_unchecked<R: RngCore + ?Sized>(rng: &mut R, n: u32) -> u32 {
    let v = rng.next_u64();
    let (hi, fraction_hi) = mul_hi_u32_fast(n, v);
    if fraction_hi != 0 {
        return hi;
    }
    // Low half is below 2^32 and may sit in the rejection zone.
    reduce_u64(rng, v, u64::from(n)) as u32
}

/// Returns a uniform `u64` in `[0, n)`.
///
/// Bounds that fit in 32 bits take the 32-bit fast path, which yields the same value
/// from the same word as the general path would.
///
/// # Errors
///
/// Returns [`RandError::InvalidArgument`] if `n == 0`.
#[inline]
pub fn uint64n<R: RngCore + ?Sized>(rng: &mut R, n: u64) -> RandResult<u64> {
    match n {
        0 => Err(RandError::invalid_argument("uint64n", "bound must be positive, got 0")),
        1 => Ok(0),
        _ => Ok(uint64n_unchecked(rng, n)),
    }
}

#[inline]
pub(crate) fn uint64n_unchecked<R: RngCore + ?Sized>(rng: &mut R, n: u64) -> u64 {
    if n <= u64::from(u32::MAX) {
        return u64::from(uint32n_unchecked(rng, n as u32));
    }
    let v = rng.next_u64();
    reduce_u64(rng, v, n)
}

/// Returns a uniform `i32` in `[0, n)`.
///
/// # Errors
///
/// Returns [`RandError::InvalidArgument`] if `n <= 0`.
#[inline]
pub fn int31n<R: RngCore + ?Sized>(rng: &mut R, n: i32) -> RandResult<i32> {
    if n <= 0 {
        return Err(RandError::invalid_argument(
            "int31n",
            format!("bound must be positive, got {n}"),
        ));
    }
    // Result < n <= i32::MAX, so the cast back is lossless.
    uint32n(rng, n as u32).map(|v| v as i32)
}

/// Returns a uniform `i64` in `[0, n)`.
///
/// # Errors
///
/// Returns [`RandError::InvalidArgument`] if `n <= 0`.
#[inline]
pub fn int63n<R: RngCore + ?Sized>(rng: &mut R, n: i64) -> RandResult<i64> {
    if n <= 0 {
        return Err(RandError::invalid_argument(
            "int63n",
            format!("bound must be positive, got {n}"),
        ));
    }
    uint64n(rng, n as u64).map(|v| v as i64)
}

/// Returns a uniform `isize` in `[0, n)`.
///
/// # Errors
///
/// Returns [`RandError::InvalidArgument`] if `n <= 0`.
#[inline]
pub fn intn<R: RngCore + ?Sized>(rng: &mut R, n: isize) -> RandResult<isize> {
    if n <= 0 {
        return Err(RandError::invalid_argument(
            "intn",
            format!("bound must be positive, got {n}"),
        ));
    }
    uint64n(rng, n as u64).map(|v| v as isize)
}

/// Returns a non-negative `i32` from the top 31 bits of one word.
#[inline]
pub fn int31<R: RngCore + ?Sized>(rng: &mut R) -> i32 {
    (rng.next_u64() >> 33) as i32
}

/// Returns a non-negative `i64` from the top 63 bits of one word.
#[inline]
pub fn int63<R: RngCore + ?Sized>(rng: &mut R) -> i64 {
    (rng.next_u64() >> 1) as i64
}

/// Returns a non-negative `isize` from the top bits of one word.
#[inline]
pub fn int<R: RngCore + ?Sized>(rng: &mut R) -> isize {
    (rng.next_u64() >> (u64::BITS - isize::BITS + 1)) as isize
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
    use crate::engine::Sfc64;

    /// Replays a fixed list of words, then panics if asked for more.
    struct Scripted {
        words: Vec<u64>,
        pos: usize,
    }

    impl Scripted {
        fn new(words: &[u64]) -> Self {
            Self {
                words: words.to_vec(),
                pos: 0,
            }
        }
    }

    impl RngCore for Scripted {
        fn next_u64(&mut self) -> u64 {
            let word = self.words[self.pos];
            self.pos += 1;
            word
        }
    }

    #[test]
    fn test_zero_bound_is_rejected() {
        let mut rng = Sfc64::new(1);
        assert!(matches!(
            uint32n(&mut rng, 0),
            Err(RandError::InvalidArgument { operation: "uint32n", .. })
        ));
        assert!(matches!(
            uint64n(&mut rng, 0),
            Err(RandError::InvalidArgument { operation: "uint64n", .. })
        ));
    }

    #[test]
    fn test_non_positive_signed_bounds_are_rejected() {
        let mut rng = Sfc64::new(1);
        for n in [0, -1, i32::MIN] {
            assert!(int31n(&mut rng, n).is_err(), "int31n({n})");
        }
        for n in [0, -1, i64::MIN] {
            assert!(int63n(&mut rng, n).is_err(), "int63n({n})");
        }
        for n in [0, -1, isize::MIN] {
            assert!(intn(&mut rng, n).is_err(), "intn({n})");
        }
    }

    #[test]
    fn test_bound_one_draws_nothing() {
        let mut rng = Scripted::new(&[]);
        assert_eq!(uint32n(&mut rng, 1).unwrap(), 0);
        assert_eq!(uint64n(&mut rng, 1).unwrap(), 0);
        assert_eq!(int31n(&mut rng, 1).unwrap(), 0);
        assert_eq!(int63n(&mut rng, 1).unwrap(), 0);
        assert_eq!(intn(&mut rng, 1).unwrap(), 0);
        assert_eq!(rng.pos, 0);
    }

    #[test]
    fn test_high_half_is_result() {
        // v = 0.75 * 2^64, so the high half of v * 10 is 7.
        let mut rng = Scripted::new(&[3 << 62]);
        assert_eq!(uint64n(&mut rng, 10).unwrap(), 7);

        let mut rng = Scripted::new(&[u64::MAX]);
        assert_eq!(uint64n(&mut rng, 1 << 40).unwrap(), (1 << 40) - 1);
    }

    #[test]
    fn test_rejection_redraws() {
        // n = 3: 2^64 mod 3 == 1, so threshold is 1 and only lo == 0 is rejected.
        // v = 0 gives lo = 0 -> rejected; next word is accepted.
        let mut rng = Scripted::new(&[0, u64::MAX]);
        assert_eq!(uint64n(&mut rng, 3).unwrap(), 2);
        assert_eq!(rng.pos, 2);

        let mut rng = Scripted::new(&[0, u64::MAX]);
        assert_eq!(uint32n(&mut rng, 3).unwrap(), 2);
        assert_eq!(rng.pos, 2);
    }

    #[test]
    fn test_rejection_for_large_bound() {
        // n = 2^63 + 1: threshold = (2^64 - n) mod n = 2^63 - 1.
        let n = (1u64 << 63) + 1;
        // v = 1: product = n, lo = n > threshold -> accepted with hi = 0.
        let mut rng = Scripted::new(&[1]);
        assert_eq!(uint64n(&mut rng, n).unwrap(), 0);
        // v = 2: lo = 2n mod 2^64 = 2 < threshold -> rejected, then v = 1 accepted.
        let mut rng = Scripted::new(&[2, 1]);
        assert_eq!(uint64n(&mut rng, n).unwrap(), 0);
        assert_eq!(rng.pos, 2);
    }

    #[test]
    fn test_fast_path_agrees_with_wide_multiply() {
        let mut rng = Sfc64::new(0xDEADBEEF);
        for _ in 0..1_000_000 {
            let n = rng.next_u32();
            let v = rng.next_u64();
            let (fast, fraction_hi) = mul_hi_u32_fast(n, v);
            let (hi, lo) = mul_wide_u64(v, u64::from(n));
            assert_eq!(u64::from(fast), hi, "n={n} v={v:#x}");
            assert_eq!(u64::from(fraction_hi), lo >> 32, "n={n} v={v:#x}");
        }
    }

    #[test]
    fn test_fast_path_edges() {
        for (n, v) in [
            (u32::MAX, u64::MAX),
            (u32::MAX, 0),
            (1, u64::MAX),
            (0, u64::MAX),
            (u32::MAX, 0xFFFF_FFFF),
            (u32::MAX, 0xFFFF_FFFF_0000_0000),
        ] {
            let (fast, fraction_hi) = mul_hi_u32_fast(n, v);
            let (hi, lo) = mul_wide_u64(v, u64::from(n));
            assert_eq!(u64::from(fast), hi);
            assert_eq!(u64::from(fraction_hi), lo >> 32);
        }
    }

    #[test]
    fn test_uint64n_small_bound_matches_uint32n() {
        let mut a = Sfc64::new(77);
        let mut b = Sfc64::new(77);
        for n in 2..2000u32 {
            assert_eq!(
                uint64n(&mut a, u64::from(n)).unwrap(),
                u64::from(uint32n(&mut b, n).unwrap())
            );
        }
    }

    #[test]
    fn test_non_negative_full_range_draws() {
        let mut rng = Sfc64::new(3);
        for _ in 0..1000 {
            assert!(int31(&mut rng) >= 0);
            assert!(int63(&mut rng) >= 0);
            assert!(int(&mut rng) >= 0);
        }
    }

    #[test]
    fn test_int63_uses_top_bits() {
        let mut rng = Scripted::new(&[u64::MAX, u64::MAX, u64::MAX]);
        assert_eq!(int63(&mut rng), i64::MAX);
        assert_eq!(int31(&mut rng), i32::MAX);
        assert_eq!(int(&mut rng), isize::MAX);
    }

    #[test]
    fn test_no_modulo_bias_large_bound() {
        // n = 2/3 * 2^64. Reducing modulo n would put 2/3 of draws below n/2;
        // an unbiased draw puts half of them there.
        let n = u64::MAX / 3 * 2;
        let mut rng = Sfc64::new(2024);
        let draws = 200_000;
        let below = (0..draws)
            .filter(|_| uint64n(&mut rng, n).unwrap() < n / 2)
            .count();
        let share = below as f64 / draws as f64;
        assert!((share - 0.5).abs() < 0.01, "share below n/2 was {share}");
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
    use crate::engine::{RngCore, SeedableRng, Sfc64};
    use proptest::prelude::*;

    /// General formulation for a 32-bit bound on a single word, without the fast path.
    fn general_u32(v: u64, n: u32) -> Option<u32> {
        let (hi, lo) = mul_wide_u64(v, u64::from(n));
        let n = u64::from(n);
        (lo >= n.wrapping_neg() % n).then_some(hi as u32)
    }

    proptest! {
        /// Property: the 32-bit fast path and the 128-bit product agree on every input.
        #[test]
        fn prop_fast_path_equals_wide_multiply(n in any::<u32>(), v in any::<u64>()) {
            let (fast, fraction_hi) = mul_hi_u32_fast(n, v);
            let (hi, lo) = mul_wide_u64(u64::from(n), v);
            prop_assert_eq!(u64::from(fast), hi);
            prop_assert_eq!(u64::from(fraction_hi), lo >> 32);
        }

        /// Property: uint32n on one scripted word equals the general accept/reject decision.
        #[test]
        fn prop_uint32n_equals_general_formulation(n in 2u32..=u32::MAX, v in any::<u64>()) {
            if let Some(expected) = general_u32(v, n) {
                let mut rng = std::iter::once(v);
                let mut source = IterRng(&mut rng);
                prop_assert_eq!(uint32n(&mut source, n).unwrap(), expected);
            }
        }

        /// Property: uint32n output is always within [0, n).
        #[test]
        fn prop_uint32n_within_bounds(seed in any::<u64>(), n in 1u32..=u32::MAX) {
            let mut rng = Sfc64::seed_from_u64(seed);
            for _ in 0..100 {
                let v = uint32n(&mut rng, n).unwrap();
                prop_assert!(v < n, "uint32n({}) produced {}", n, v);
            }
        }

        /// Property: uint64n output is always within [0, n).
        #[test]
        fn prop_uint64n_within_bounds(seed in any::<u64>(), n in 1u64..=u64::MAX) {
            let mut rng = Sfc64::seed_from_u64(seed);
            for _ in 0..100 {
                let v = uint64n(&mut rng, n).unwrap();
                prop_assert!(v < n, "uint64n({}) produced {}", n, v);
            }
        }

        /// Property: signed wrappers stay within [0, n).
        #[test]
        fn prop_signed_within_bounds(
            seed in any::<u64>(),
            n31 in 1i32..=i32::MAX,
            n63 in 1i64..=i64::MAX,
            nn in 1isize..=isize::MAX,
        ) {
            let mut rng = Sfc64::seed_from_u64(seed);
            let v = int31n(&mut rng, n31).unwrap();
            prop_assert!((0..n31).contains(&v));
            let v = int63n(&mut rng, n63).unwrap();
            prop_assert!((0..n63).contains(&v));
            let v = intn(&mut rng, nn).unwrap();
            prop_assert!((0..nn).contains(&v));
        }
    }

    struct IterRng<'a, I: Iterator<Item = u64>>(&'a mut I);

    impl<I: Iterator<Item = u64>> RngCore for IterRng<'_, I> {
        fn next_u64(&mut self) -> u64 {
            self.0.next().expect("scripted words exhausted")
        }
    }
}
