//! Common test infrastructure shared across integration tests.
//!
//! - `stats`: goodness-of-fit statistics (chi-square, Kolmogorov-Smirnov) and
//!   reference distribution functions
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::stats::{chi_square, chi_square_critical};
//! ```

pub mod stats;

/// Seeds used by the statistical tests. Fixed so a failure reproduces exactly.
#[allow(dead_code)]
pub const TEST_SEEDS: [u64; 4] = [0, 1, 0xDEAD_BEEF, u64::MAX];
