//! Statistical acceptance tests for the samplers.
//!
//! Each test draws a large, fixed-seed sample and compares it with the target
//! distribution using the helpers in `common::stats`.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]

mod common;

use common::stats::{
    chi_square, chi_square_critical, exp_cdf, ks_critical, ks_statistic, normal_cdf,
};
use common::TEST_SEEDS;
use std::collections::BTreeMap;
use zigrand::__internal::{EXP_R, NORM_R};
use zigrand::{Distribution, Exp, Normal, Rand};

// ============================================================================
// Bounded integers
// ============================================================================

#[test]
fn uint32n_small_bounds_are_uniform() {
    for (&seed, n) in TEST_SEEDS.iter().zip([2u32, 6, 10, 1000]) {
        let mut rng = Rand::new(seed);
        let mut counts = vec![0u64; n as usize];
        for _ in 0..(n as usize * 1000).max(200_000) {
            counts[rng.uint32n(n).unwrap() as usize] += 1;
        }
        let stat = chi_square(&counts);
        let critical = chi_square_critical(n as usize - 1);
        assert!(stat < critical, "n={n}: chi2={stat:.1} >= {critical:.1}");
    }
}

#[test]
fn uint64n_large_bound_deciles_are_uniform() {
    // 2/3 of 2^64: a modulo reduction would pile extra mass into the lower half.
    let n = u64::MAX / 3 * 2;
    let mut rng = Rand::new(17);
    let mut deciles = [0u64; 10];
    for _ in 0..200_000 {
        let v = rng.uint64n(n).unwrap();
        assert!(v < n);
        deciles[(u128::from(v) * 10 / u128::from(n)) as usize] += 1;
    }
    let stat = chi_square(&deciles);
    assert!(stat < chi_square_critical(9), "chi2={stat:.1}, deciles {deciles:?}");
}

#[test]
fn signed_bounds_cover_range() {
    let mut rng = Rand::new(18);
    let mut counts = [0u64; 7];
    for _ in 0..70_000 {
        counts[rng.int63n(7).unwrap() as usize] += 1;
        assert!((0..5).contains(&rng.int31n(5).unwrap()));
        assert!((0..3).contains(&rng.intn(3).unwrap()));
    }
    assert!(chi_square(&counts) < chi_square_critical(6));
}

// ============================================================================
// Uniform floats and bytes
// ============================================================================

#[test]
fn float64_histogram_is_flat() {
    let mut rng = Rand::new(19);
    let mut bins = [0u64; 100];
    for _ in 0..500_000 {
        bins[(rng.float64() * 100.0) as usize] += 1;
    }
    assert!(chi_square(&bins) < chi_square_critical(99));
}

#[test]
fn float64_passes_ks() {
    let mut rng = Rand::new(20);
    let mut samples: Vec<f64> = (0..100_000).map(|_| rng.float64()).collect();
    let d = ks_statistic(&mut samples, |x| x.clamp(0.0, 1.0));
    assert!(d < ks_critical(samples.len()), "D={d}");
}

#[test]
fn read_bytes_are_uniform() {
    let mut rng = Rand::new(21);
    let mut buf = vec![0u8; 512_000];
    // Odd chunk sizes exercise the buffered tail word.
    for chunk in buf.chunks_mut(13) {
        rng.read(chunk);
    }
    let mut counts = [0u64; 256];
    for &b in &buf {
        counts[usize::from(b)] += 1;
    }
    assert!(chi_square(&counts) < chi_square_critical(255));
}

// ============================================================================
// Ziggurat samplers
// ============================================================================

#[test]
fn exp_float64_passes_ks() {
    for &seed in &TEST_SEEDS {
        let mut rng = Rand::new(seed);
        let mut samples: Vec<f64> = (0..100_000).map(|_| rng.exp_float64()).collect();
        assert!(samples.iter().all(|&x| x >= 0.0 && x.is_finite()));
        let d = ks_statistic(&mut samples, exp_cdf);
        assert!(d < ks_critical(samples.len()), "seed={seed}: D={d}");
    }
}

#[test]
fn norm_float64_passes_ks() {
    for &seed in &TEST_SEEDS {
        let mut rng = Rand::new(seed);
        let mut samples: Vec<f64> = (0..100_000).map(|_| rng.norm_float64()).collect();
        let d = ks_statistic(&mut samples, normal_cdf);
        assert!(d < ks_critical(samples.len()), "seed={seed}: D={d}");
    }
}

#[test]
fn exp_tail_mass_matches_density() {
    let mut rng = Rand::new(22);
    let count = 1_000_000;
    let tail = (0..count).filter(|_| rng.exp_float64() > EXP_R).count() as f64;
    let expected = count as f64 * (-EXP_R).exp();
    let sigma = expected.sqrt();
    assert!((tail - expected).abs() < 5.0 * sigma, "tail={tail}, expected {expected:.1}");
}

#[test]
fn normal_tail_mass_matches_density() {
    let mut rng = Rand::new(23);
    let count = 1_000_000;
    let mut upper = 0.0;
    let mut lower = 0.0;
    for _ in 0..count {
        let z = rng.norm_float64();
        if z > NORM_R {
            upper += 1.0;
        } else if z < -NORM_R {
            lower += 1.0;
        }
    }
    let expected = count as f64 * (1.0 - normal_cdf(NORM_R));
    let sigma = expected.sqrt();
    assert!((upper - expected).abs() < 5.0 * sigma, "upper={upper}, expected {expected:.1}");
    assert!((lower - expected).abs() < 5.0 * sigma, "lower={lower}, expected {expected:.1}");
}

#[test]
fn normal_is_symmetric() {
    let mut rng = Rand::new(24);
    let count = 400_000;
    let positive = (0..count).filter(|_| rng.norm_float64() > 0.0).count();
    let counts = [positive as u64, (count - positive) as u64];
    assert!(chi_square(&counts) < chi_square_critical(1));
}

#[test]
fn parameterised_distributions_pass_ks() {
    let mut rng = Rand::new(25);

    let exp = Exp::new(3.0).unwrap();
    let mut samples: Vec<f64> = (0..50_000).map(|_| exp.sample(&mut rng)).collect();
    let d = ks_statistic(&mut samples, |x| exp_cdf(3.0 * x));
    assert!(d < ks_critical(samples.len()), "Exp(3): D={d}");

    let normal = Normal::new(-2.0, 0.5).unwrap();
    let mut samples: Vec<f64> = (0..50_000).map(|_| rng.sample(&normal)).collect();
    let d = ks_statistic(&mut samples, |x| normal_cdf((x + 2.0) / 0.5));
    assert!(d < ks_critical(samples.len()), "Normal(-2, 0.5): D={d}");
}

// ============================================================================
// Shuffles
// ============================================================================

#[test]
fn shuffle_of_four_hits_all_permutations_evenly() {
    let mut rng = Rand::new(26);
    let mut seen: BTreeMap<[usize; 4], u64> = BTreeMap::new();
    for _ in 0..240_000 {
        let p = rng.perm(4);
        *seen.entry([p[0], p[1], p[2], p[3]]).or_default() += 1;
    }
    assert_eq!(seen.len(), 24);
    let counts: Vec<u64> = seen.values().copied().collect();
    let stat = chi_square(&counts);
    assert!(stat < chi_square_critical(23), "chi2={stat:.1}");
}

#[test]
fn shuffle_slice_moves_each_element_everywhere() {
    let mut rng = Rand::new(27);
    let len = 8;
    let mut position_counts = vec![0u64; len];
    for _ in 0..80_000 {
        let mut items: Vec<usize> = (0..len).collect();
        rng.shuffle_slice(&mut items);
        let pos = items.iter().position(|&x| x == 0).unwrap();
        position_counts[pos] += 1;
    }
    assert!(chi_square(&position_counts) < chi_square_critical(len - 1));
}
