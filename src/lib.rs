//! # zigrand
//!
//! Small, fast, reproducible pseudo-random numbers in 100% safe Rust.
//!
//! - [`engine`]: the SFC64 bit engine and the [`RngCore`]/[`SeedableRng`] traits
//! - [`bounded`]: unbiased integers in `[0, n)` (Lemire's method, 32-bit fast path)
//! - [`ziggurat`]: exponential and normal samples (Marsaglia-Tsang Ziggurat)
//! - [`seq`]: Fisher-Yates shuffles and permutations
//! - [`codec`]: exact, versioned binary persistence of generator state
//! - [`pool`]: explicit checkout/return of generators across threads
//!
//! Most code only needs [`Rand`]:
//!
//! ```rust
//! use zigrand::Rand;
//!
//! let mut rng = Rand::new(2024);
//! let index = rng.uint64n(10)?;
//! let gaussian = rng.norm_float64();
//! let saved = rng.marshal()?;
//!
//! let mut replay = Rand::unmarshal(&saved)?;
//! assert_eq!(rng.next_u64(), replay.next_u64());
//! # let _ = (index, gaussian);
//! # Ok::<(), zigrand::RandError>(())
//! ```
//!
//! NOT cryptographically secure. Do not use for keys, tokens or anything an
//! adversary must not predict.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use codec::{StateRecord, STATE_LEN};
pub use engine::{RngCore, SeedableRng, Sfc64};
pub use entropy::{EntropySource, SystemEntropy};
pub use error::{FormatErrorReason, RandError, RandResult};
pub use pool::{PoolConfig, PoolSeeding, PooledRand, RandPool};
pub use rand::{Rand, RandomValue};
pub use ziggurat::{Distribution, Exp, Normal};

pub mod bounded;
pub mod codec;
pub mod engine;
pub mod entropy;
pub mod error;
pub mod pool;
pub mod prelude;
pub mod rand;
pub mod seq;
pub mod ziggurat;

/// Internal module exposing implementation details for testing and benchmarking.
///
/// # ⚠️ WARNING: No Stability Guarantees
///
/// **This module is NOT part of the public API.** Everything here may change
/// without notice and is not covered by semver.
///
/// It exists so integration tests and benchmarks can check the widening-multiply
/// helpers and the Ziggurat tables directly instead of only through sampled output.
#[doc(hidden)]
pub mod __internal {
    pub use crate::bounded::{mul_hi_u32_fast, mul_wide_u64};
    pub use crate::codec::{MAGIC, VERSION};
    pub use crate::ziggurat::tables::{
        EXP_F, EXP_K, EXP_R, EXP_W, NORM_F, NORM_K, NORM_R, NORM_W,
    };
}
