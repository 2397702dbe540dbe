//! Exponential and normal sampling with the Ziggurat method.
//!
//! The target density is covered by 256 horizontal layers of equal area. One
//! 64-bit word picks a layer `i` (low byte) and a 32-bit magnitude `j`
//! (bits 8..40); the candidate is `x = j * w[i]`.
//!
//! - `j < k[i]`: `x` lies in the part of the layer fully under the curve, accept.
//!   This covers ~99% of draws and costs one multiply and one compare.
//! - `i == 0`: the base strip missed its rectangle, sample the unbounded tail.
//! - otherwise: the wedge test against the density, restarting on failure.
//!
//! The rejection loops have no iteration cap; they terminate with probability 1
//! after a small expected number of rounds. All arithmetic is `f64`.
//!
//! Reference: G. Marsaglia & W. W. Tsang (2000), "The Ziggurat Method for
//! Generating Random Variables", Journal of Statistical Software 5(8).

pub mod tables;

use crate::engine::RngCore;
use crate::error::{RandError, RandResult};
use tables::{EXP_F, EXP_K, EXP_R, EXP_W, NORM_F, NORM_K, NORM_R, NORM_W};

/// Bit of the drawn word carrying the sign of a normal sample.
const NORM_SIGN_BIT: u64 = 1 << 40;

/// Splits a word into `(layer, magnitude)`.
#[inline]
fn split_word(v: u64) -> (usize, u64) {
    (usize::from(v as u8), u64::from((v >> 8) as u32))
}

/// Uniform `f64` on the open interval `(0, 1)`; never 0, so `ln` stays finite.
#[inline]
pub(crate) fn open_float64<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    // 52 bits keeps `m + 0.5` exact; with 53 the top value rounds up to 1.0.
    ((rng.next_u64() >> 12) as f64 + 0.5) * (1.0 / (1u64 << 52) as f64)
}

/// Returns an exponentially distributed `f64` with rate 1 (mean 1), in `[0, +inf)`.
///
/// For rate `λ`, divide the result by `λ` (or use [`Exp`]).
pub fn exp_float64<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let (i, j) = split_word(rng.next_u64());
        let x = j as f64 * EXP_W[i];
        if j < EXP_K[i] {
            return x;
        }
        if i == 0 {
            return EXP_R - open_float64(rng).ln();
        }
        if EXP_F[i] + open_float64(rng) * (EXP_F[i - 1] - EXP_F[i]) < (-x).exp() {
            return x;
        }
    }
}

/// Returns a standard normal `f64` (mean 0, standard deviation 1).
///
/// For other parameters use `mean + std_dev * sample` (or [`Normal`]).
pub fn norm_float64<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let v = rng.next_u64();
        let (i, j) = split_word(v);
        let negative = v & NORM_SIGN_BIT != 0;
        let x = j as f64 * NORM_W[i];
        if j < NORM_K[i] {
            return with_sign(x, negative);
        }
        if i == 0 {
            return with_sign(NORM_R + normal_tail(rng), negative);
        }
        if NORM_F[i] + open_float64(rng) * (NORM_F[i - 1] - NORM_F[i]) < (-0.5 * x * x).exp() {
            return with_sign(x, negative);
        }
    }
}

/// Marsaglia's tail method: excess over `NORM_R` of a normal sample conditioned on `|z| > NORM_R`.
fn normal_tail<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let x = -open_float64(rng).ln() / NORM_R;
        let y = -open_float64(rng).ln();
        if y + y >= x * x {
            return x;
        }
    }
}

#[inline]
fn with_sign(x: f64, negative: bool) -> f64 {
    if negative {
        -x
    } else {
        x
    }
}

/// Types that produce samples of `T` from a generator.
pub trait Distribution<T> {
    /// Draws one sample.
    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> T;
}

/// Exponential distribution with rate `lambda` (mean `1 / lambda`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exp {
    lambda: f64,
}

impl Exp {
    /// Creates an exponential distribution.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::InvalidArgument`] unless `lambda` is finite and positive.
    pub fn new(lambda: f64) -> RandResult<Self> {
        if !(lambda.is_finite() && lambda > 0.0) {
            return Err(RandError::invalid_argument(
                "Exp::new",
                format!("rate must be finite and positive, got {lambda}"),
            ));
        }
        Ok(Self { lambda })
    }

    /// The rate parameter.
    #[must_use]
    pub const fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Distribution<f64> for Exp {
    #[inline]
    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        exp_float64(rng) / self.lambda
    }
}

/// Normal distribution with the given mean and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// Creates a normal distribution.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::InvalidArgument`] unless `mean` is finite and `std_dev` is
    /// finite and non-negative. A zero standard deviation always yields `mean`.
    pub fn new(mean: f64, std_dev: f64) -> RandResult<Self> {
        if !mean.is_finite() {
            return Err(RandError::invalid_argument(
                "Normal::new",
                format!("mean must be finite, got {mean}"),
            ));
        }
        if !(std_dev.is_finite() && std_dev >= 0.0) {
            return Err(RandError::invalid_argument(
                "Normal::new",
                format!("standard deviation must be finite and non-negative, got {std_dev}"),
            ));
        }
        Ok(Self { mean, std_dev })
    }

    /// The mean.
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// The standard deviation.
    #[must_use]
    pub const fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Distribution<f64> for Normal {
    #[inline]
    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> f64 {
        self.mean + self.std_dev * norm_float64(rng)
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
    use crate::engine::Sfc64;

    struct Scripted(Vec<u64>);

    impl RngCore for Scripted {
        fn next_u64(&mut self) -> u64 {
            self.0.remove(0)
        }
    }

    #[test]
    fn test_tables_shape() {
        for (k, w, f, r) in [
            (&EXP_K, &EXP_W, &EXP_F, EXP_R),
            (&NORM_K, &NORM_W, &NORM_F, NORM_R),
        ] {
            assert_eq!(f[0], 1.0);
            assert_eq!(k[1], 0, "layer 1 always takes the wedge test");
            assert!(k.iter().all(|&v| v < 1 << 32));
            assert!(f.windows(2).all(|p| p[0] > p[1]), "f must decrease");
            assert!(f[255] > 0.0 && f[255] < 0.01);
            let top = w[255] * 4294967296.0;
            assert!((top - r).abs() < 1e-9, "w[255] * 2^32 = {top}, expected {r}");
        }
        assert!((EXP_F[255] - (-EXP_R).exp()).abs() < 1e-15);
        assert!((NORM_F[255] - (-0.5 * NORM_R * NORM_R).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_fast_accept_path() {
        // Layer 255, magnitude 1: far below k[255], returns 1 * w[255] without more draws.
        let mut rng = Scripted(vec![0x1FF]);
        assert_eq!(exp_float64(&mut rng), EXP_W[255]);
        assert!(rng.0.is_empty());

        let mut rng = Scripted(vec![0x1FF]);
        assert_eq!(norm_float64(&mut rng), NORM_W[255]);

        let mut rng = Scripted(vec![0x1FF | NORM_SIGN_BIT]);
        assert_eq!(norm_float64(&mut rng), -NORM_W[255]);
    }

    #[test]
    fn test_exp_tail_starts_at_r() {
        // Layer 0 with the largest magnitude misses k[0] and falls into the tail.
        // The tail uniform is 1 - 2^-53, so the result is R plus a tiny excess.
        let mut rng = Scripted(vec![0xFFFF_FFFF_00, u64::MAX]);
        let x = exp_float64(&mut rng);
        assert!(x >= EXP_R && x < EXP_R + 1e-12, "got {x}");
    }

    #[test]
    fn test_normal_tail_exceeds_r() {
        let mut rng = Sfc64::new(11);
        for _ in 0..1000 {
            let excess = normal_tail(&mut rng);
            assert!(excess >= 0.0 && excess.is_finite());
        }
    }

    #[test]
    fn test_open_float64_bounds() {
        let mut rng = Scripted(vec![0, u64::MAX]);
        let lo = open_float64(&mut rng);
        let hi = open_float64(&mut rng);
        assert!(lo > 0.0);
        assert!(hi < 1.0);
        assert!(lo.ln().is_finite());
    }

    #[test]
    fn test_samples_are_finite() {
        let mut rng = Sfc64::new(42);
        for _ in 0..100_000 {
            let e = exp_float64(&mut rng);
            assert!(e >= 0.0 && e.is_finite(), "exp sample {e}");
            let n = norm_float64(&mut rng);
            assert!(n.is_finite(), "normal sample {n}");
        }
    }

    #[test]
    fn test_sample_moments() {
        let mut rng = Sfc64::new(7);
        let count = 200_000;
        let exp_mean = (0..count).map(|_| exp_float64(&mut rng)).sum::<f64>() / count as f64;
        assert!((exp_mean - 1.0).abs() < 0.02, "exp mean {exp_mean}");

        let normals: Vec<f64> = (0..count).map(|_| norm_float64(&mut rng)).collect();
        let mean = normals.iter().sum::<f64>() / count as f64;
        let var = normals.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;
        assert!(mean.abs() < 0.02, "normal mean {mean}");
        assert!((var - 1.0).abs() < 0.02, "normal variance {var}");
    }

    #[test]
    fn test_exp_distribution_rate() {
        let dist = Exp::new(4.0).unwrap();
        assert_eq!(dist.lambda(), 4.0);
        let mut rng = Sfc64::new(8);
        let count = 100_000;
        let mean = (0..count).map(|_| dist.sample(&mut rng)).sum::<f64>() / count as f64;
        assert!((mean - 0.25).abs() < 0.01, "mean {mean}");
    }

    #[test]
    fn test_exp_rejects_bad_rate() {
        for lambda in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(Exp::new(lambda), Err(RandError::InvalidArgument { .. })),
                "lambda={lambda}"
            );
        }
    }

    #[test]
    fn test_normal_distribution_parameters() {
        let dist = Normal::new(10.0, 2.0).unwrap();
        assert_eq!(dist.mean(), 10.0);
        assert_eq!(dist.std_dev(), 2.0);
        let mut rng = Sfc64::new(9);
        let count = 100_000;
        let mean = (0..count).map(|_| dist.sample(&mut rng)).sum::<f64>() / count as f64;
        assert!((mean - 10.0).abs() < 0.05, "mean {mean}");

        let point = Normal::new(3.5, 0.0).unwrap();
        assert_eq!(point.sample(&mut rng), 3.5);
    }

    #[test]
    fn test_normal_rejects_bad_parameters() {
        assert!(Normal::new(f64::NAN, 1.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(0.0, f64::INFINITY).is_err());
    }
}
