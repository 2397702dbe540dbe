//! Metamorphic tests for zigrand.
//!
//! Rather than fixed outputs, these check relationships that must hold between
//! generators driven in different but equivalent ways.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]

use proptest::prelude::*;
use zigrand::__internal::{mul_hi_u32_fast, mul_wide_u64};
use zigrand::bounded;
use zigrand::{Distribution, Exp, Normal, Rand, Sfc64};

proptest! {
    /// Scaling relation: Exp(lambda) is exactly the unit exponential divided by lambda.
    #[test]
    fn prop_exp_scaling(seed in any::<u64>(), lambda in 0.01f64..100.0) {
        let dist = Exp::new(lambda).unwrap();
        let mut a = Rand::new(seed);
        let mut b = Rand::new(seed);
        for _ in 0..20 {
            let x: f64 = a.sample(&dist);
            prop_assert_eq!(x.to_bits(), (b.exp_float64() / lambda).to_bits());
        }
    }

    /// Affine relation: Normal(mean, sd) is mean + sd * standard normal.
    #[test]
    fn prop_normal_affine(seed in any::<u64>(), mean in -1e3f64..1e3, sd in 0.0f64..1e3) {
        let dist = Normal::new(mean, sd).unwrap();
        let mut a = Rand::new(seed);
        let mut b = Rand::new(seed);
        for _ in 0..20 {
            let x: f64 = dist.sample(&mut a);
            prop_assert_eq!(x.to_bits(), (mean + sd * b.norm_float64()).to_bits());
        }
    }

    /// Widening relation: uint64n with a 32-bit bound equals uint32n on the same stream.
    #[test]
    fn prop_uint64n_narrow_equals_uint32n(seed in any::<u64>(), n in 1u32..=u32::MAX) {
        let mut a = Sfc64::new(seed);
        let mut b = Sfc64::new(seed);
        for _ in 0..10 {
            prop_assert_eq!(
                bounded::uint64n(&mut a, u64::from(n)).unwrap(),
                u64::from(bounded::uint32n(&mut b, n).unwrap())
            );
        }
        prop_assert_eq!(a, b);
    }

    /// Sign relation: int63n(n) equals uint64n(n) for positive n.
    #[test]
    fn prop_int63n_equals_uint64n(seed in any::<u64>(), n in 1i64..=i64::MAX) {
        let mut a = Rand::new(seed);
        let mut b = Rand::new(seed);
        prop_assert_eq!(a.int63n(n).unwrap() as u64, b.uint64n(n as u64).unwrap());
    }

    /// The fast multiply is the high word of the exact product.
    #[test]
    fn prop_fast_multiply_matches_wide(n in any::<u32>(), v in any::<u64>()) {
        let (hi, fraction_hi) = mul_hi_u32_fast(n, v);
        let (wide_hi, wide_lo) = mul_wide_u64(v, u64::from(n));
        prop_assert_eq!(u64::from(hi), wide_hi);
        prop_assert_eq!(u64::from(fraction_hi), wide_lo >> 32);
    }

    /// Shuffling a permutation by a second generator still yields a permutation.
    #[test]
    fn prop_shuffle_composition(seed1 in any::<u64>(), seed2 in any::<u64>(), n in 0usize..64) {
        let mut p = Rand::new(seed1).perm(n);
        Rand::new(seed2).shuffle_slice(&mut p);
        p.sort_unstable();
        prop_assert_eq!(p, (0..n).collect::<Vec<_>>());
    }

    /// Split children are deterministic functions of the parent state.
    #[test]
    fn prop_split_deterministic(seed in any::<u64>()) {
        let mut a = Rand::new(seed);
        let mut b = Rand::new(seed);
        let mut child_a = a.split();
        let mut child_b = b.split();
        prop_assert_eq!(child_a.next_u64(), child_b.next_u64());
        prop_assert_eq!(a, b);
    }
}

#[test]
fn shuffle_callback_sees_descending_indices() {
    let mut rng = Rand::new(5);
    let mut seen = Vec::new();
    rng.shuffle(6, |i, j| {
        assert!(j <= i);
        seen.push(i);
    });
    assert_eq!(seen, [5, 4, 3, 2, 1]);
}
