//! Convenient re-exports for common usage.
//!
//! ```rust
//! use zigrand::prelude::*;
//!
//! let mut rng = Rand::new(1);
//! let normal = Normal::new(100.0, 15.0)?;
//! let iq = rng.sample(&normal);
//! # let _ = iq;
//! # Ok::<(), RandError>(())
//! ```

pub use crate::engine::{RngCore, SeedableRng};
pub use crate::entropy::EntropySource;
pub use crate::error::{RandError, RandResult};
pub use crate::pool::{PoolConfig, RandPool};
pub use crate::rand::{Rand, RandomValue};
pub use crate::ziggurat::{Distribution, Exp, Normal};
