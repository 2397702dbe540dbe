//! Goodness-of-fit helpers.
//!
//! Critical values are taken at a significance level of about 1e-4, so with the
//! fixed seeds used by the tests a correct sampler does not fail by chance.

#![allow(dead_code)]

/// Standard normal quantile for an upper-tail probability of 1e-4.
const Z_1E4: f64 = 3.719;

/// Pearson's chi-square statistic for `observed` counts against a uniform expectation.
pub fn chi_square(observed: &[u64]) -> f64 {
    let total: u64 = observed.iter().sum();
    let expected = total as f64 / observed.len() as f64;
    observed
        .iter()
        .map(|&o| {
            let d = o as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// Upper critical value of the chi-square distribution with `df` degrees of freedom
/// (Wilson-Hilferty approximation).
pub fn chi_square_critical(df: usize) -> f64 {
    let k = df as f64;
    let h = 2.0 / (9.0 * k);
    k * (1.0 - h + Z_1E4 * h.sqrt()).powi(3)
}

/// Kolmogorov-Smirnov statistic of `samples` against the continuous `cdf`.
///
/// Sorts `samples` in place.
pub fn ks_statistic(samples: &mut [f64], cdf: impl Fn(f64) -> f64) -> f64 {
    samples.sort_by(f64::total_cmp);
    let n = samples.len() as f64;
    samples
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = cdf(x);
            let above = (i as f64 + 1.0) / n - f;
            let below = f - i as f64 / n;
            above.max(below)
        })
        .fold(0.0, f64::max)
}

/// Asymptotic KS critical value for `n` samples at significance ~1e-4.
pub fn ks_critical(n: usize) -> f64 {
    // sqrt(-ln(alpha / 2) / 2) with alpha = 1e-4
    2.2252 / (n as f64).sqrt()
}

/// CDF of the exponential distribution with rate 1.
pub fn exp_cdf(x: f64) -> f64 {
    if x <= 0.0 {
        0.0
    } else {
        1.0 - (-x).exp()
    }
}

/// CDF of the standard normal distribution.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Complementary error function, Numerical Recipes `erfcc` (relative error < 1.2e-7).
pub fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -z * z - 1.26551223
        + t * (1.00002368
            + t * (0.37409196
                + t * (0.09678418
                    + t * (-0.18628806
                        + t * (0.27886807
                            + t * (-1.13520398
                                + t * (1.48851587 + t * (-0.82215223 + t * 0.17087277))))))));
    let r = t * poly.exp();
    if x >= 0.0 {
        r
    } else {
        2.0 - r
    }
}
