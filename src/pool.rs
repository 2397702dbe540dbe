//! A pool of generators with explicit checkout and return.
//!
//! There is no process-wide generator in this crate. Code that wants "a generator,
//! right now" from several threads checks one out of a [`RandPool`], uses it
//! exclusively, and gives it back by dropping the [`PooledRand`] guard. The lock is
//! held only while moving an instance in or out of the idle list, never while the
//! generator is in use.
//!
//! # Example
//!
//! ```
//! use zigrand::{PoolConfig, RandPool};
//!
//! let pool = RandPool::new(PoolConfig::deterministic(42))?;
//! std::thread::scope(|s| {
//!     for _ in 0..4 {
//!         s.spawn(|| {
//!             let mut rng = pool.checkout();
//!             let roll = rng.uint32n(6).map(|r| r + 1);
//!             assert!(matches!(roll, Ok(1..=6)));
//!         });
//!     }
//! });
//! # Ok::<(), zigrand::RandError>(())
//! ```

use crate::error::{RandError, RandResult};
use crate::rand::Rand;
use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};

/// Default number of idle instances a pool keeps.
pub const DEFAULT_MAX_IDLE: usize = 64;

/// Upper limit for [`PoolConfig::max_idle`].
pub const MAX_IDLE_LIMIT: usize = 1 << 16;

/// How a pool seeds the instances it creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PoolSeeding {
    /// Each new instance is seeded from [`SystemEntropy`](crate::SystemEntropy).
    #[default]
    Entropy,
    /// New instances are split from a seeder generator built from `base_seed`, so the
    /// n-th created instance is the same on every run.
    ///
    /// Which thread receives which instance still depends on scheduling.
    Deterministic {
        /// Seed of the pool's seeder generator.
        base_seed: u64,
    },
}

/// Configuration for a [`RandPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    /// Instances kept after being returned. Returns beyond this are dropped;
    /// `0` means the pool never retains anything.
    ///
    /// Default: 64
    pub max_idle: usize,
    /// Seeding of newly created instances.
    ///
    /// Default: [`PoolSeeding::Entropy`]
    pub seeding: PoolSeeding,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle: DEFAULT_MAX_IDLE,
            seeding: PoolSeeding::Entropy,
        }
    }
}

impl PoolConfig {
    /// Creates a `PoolConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration preset for reproducible instance creation from `base_seed`.
    #[must_use]
    pub fn deterministic(base_seed: u64) -> Self {
        Self {
            seeding: PoolSeeding::Deterministic { base_seed },
            ..Self::default()
        }
    }

    /// Sets the idle limit.
    #[must_use]
    pub fn with_max_idle(mut self, max_idle: usize) -> Self {
        self.max_idle = max_idle;
        self
    }

    /// Sets the seeding mode.
    #[must_use]
    pub fn with_seeding(mut self, seeding: PoolSeeding) -> Self {
        self.seeding = seeding;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::InvalidArgument`] if `max_idle` exceeds [`MAX_IDLE_LIMIT`].
    pub fn validate(&self) -> RandResult<()> {
        if self.max_idle > MAX_IDLE_LIMIT {
            return Err(RandError::invalid_argument(
                "PoolConfig::validate",
                format!(
                    "max_idle must be at most {}, got {}",
                    MAX_IDLE_LIMIT, self.max_idle
                ),
            ));
        }
        Ok(())
    }
}

#[derive(Debug)]
struct PoolState {
    idle: Vec<Rand>,
    seeder: Option<Rand>,
}

/// A thread-safe pool of [`Rand`] instances.
#[derive(Debug)]
pub struct RandPool {
    max_idle: usize,
    state: Mutex<PoolState>,
}

impl RandPool {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// Returns [`RandError::InvalidArgument`] if `config` fails [`PoolConfig::validate`].
    pub fn new(config: PoolConfig) -> RandResult<Self> {
        config.validate()?;
        let seeder = match config.seeding {
            PoolSeeding::Entropy => None,
            PoolSeeding::Deterministic { base_seed } => Some(Rand::new(base_seed)),
        };
        Ok(Self {
            max_idle: config.max_idle,
            state: Mutex::new(PoolState {
                idle: Vec::new(),
                seeder,
            }),
        })
    }

    /// Takes an idle instance, or creates one if none is idle.
    ///
    /// The instance goes back to the pool when the guard is dropped.
    #[must_use]
    pub fn checkout(&self) -> PooledRand<'_> {
        let rand = {
            let mut state = self.state.lock();
            match state.idle.pop() {
                Some(rand) => {
                    tracing::trace!(idle = state.idle.len(), "reusing pooled generator");
                    rand
                },
                None => {
                    let rand = match state.seeder.as_mut() {
                        Some(seeder) => seeder.split(),
                        None => Rand::from_entropy(),
                    };
                    tracing::debug!(
                        deterministic = state.seeder.is_some(),
                        "created pooled generator"
                    );
                    rand
                },
            }
        };
        PooledRand {
            pool: self,
            rand,
            detached: false,
        }
    }

    /// Number of instances currently waiting to be checked out.
    #[must_use]
    pub fn idle_count(&self) -> usize {
        self.state.lock().idle.len()
    }

    fn give_back(&self, rand: Rand) {
        let mut state = self.state.lock();
        if state.idle.len() < self.max_idle {
            state.idle.push(rand);
            tracing::trace!(idle = state.idle.len(), "returned generator to pool");
        } else {
            tracing::trace!(max_idle = self.max_idle, "pool full, dropping generator");
        }
    }
}

/// Exclusive access to a pooled [`Rand`]; returns it to the pool on drop.
#[derive(Debug)]
pub struct PooledRand<'p> {
    pool: &'p RandPool,
    rand: Rand,
    detached: bool,
}

impl PooledRand<'_> {
    /// Keeps the generator instead of returning it to the pool.
    #[must_use]
    pub fn detach(mut self) -> Rand {
        self.detached = true;
        std::mem::replace(&mut self.rand, Rand::vacant())
    }
}

impl Deref for PooledRand<'_> {
    type Target = Rand;

    fn deref(&self) -> &Rand {
        &self.rand
    }
}

impl DerefMut for PooledRand<'_> {
    fn deref_mut(&mut self) -> &mut Rand {
        &mut self.rand
    }
}

impl Drop for PooledRand<'_> {
    fn drop(&mut self) {
        if !self.detached {
            self.pool
                .give_back(std::mem::replace(&mut self.rand, Rand::vacant()));
        }
    }
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
    fn test_config_defaults_and_builders() {
        let config = PoolConfig::new();
        assert_eq!(config.max_idle, DEFAULT_MAX_IDLE);
        assert_eq!(config.seeding, PoolSeeding::Entropy);

        let config = PoolConfig::new()
            .with_max_idle(3)
            .with_seeding(PoolSeeding::Deterministic { base_seed: 9 });
        assert_eq!(config.max_idle, 3);
        assert_eq!(config, PoolConfig::deterministic(9).with_max_idle(3));
    }

    #[test]
    fn test_validate_rejects_huge_idle_limit() {
        let config = PoolConfig::new().with_max_idle(MAX_IDLE_LIMIT + 1);
        assert!(matches!(
            config.validate(),
            Err(RandError::InvalidArgument { .. })
        ));
        assert!(RandPool::new(config).is_err());
        assert!(PoolConfig::new().with_max_idle(0).validate().is_ok());
    }

    #[test]
    fn test_deterministic_creation_order() {
        let pool = RandPool::new(PoolConfig::deterministic(5)).unwrap();
        let first = pool.checkout().detach();
        let second = pool.checkout().detach();

        let mut seeder = Rand::new(5);
        assert_eq!(first, seeder.split());
        assert_eq!(second, seeder.split());
        assert_ne!(first, second);
    }

    #[test]
    fn test_returned_instance_is_reused() {
        let pool = RandPool::new(PoolConfig::deterministic(6)).unwrap();
        let state_after_use = {
            let mut rng = pool.checkout();
            let _ = rng.next_u64();
            (*rng).clone()
        };
        assert_eq!(pool.idle_count(), 1);

        let rng = pool.checkout();
        assert_eq!(*rng, state_after_use);
        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn test_max_idle_caps_retention() {
        let pool = RandPool::new(PoolConfig::deterministic(7).with_max_idle(2)).unwrap();
        {
            let _a = pool.checkout();
            let _b = pool.checkout();
            let _c = pool.checkout();
        }
        assert_eq!(pool.idle_count(), 2);

        let none = RandPool::new(PoolConfig::deterministic(7).with_max_idle(0)).unwrap();
        drop(none.checkout());
        assert_eq!(none.idle_count(), 0);
    }

    #[test]
    fn test_detach_does_not_return() {
        let pool = RandPool::new(PoolConfig::new()).unwrap();
        let mut kept = pool.checkout().detach();
        let _ = kept.next_u64();
        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn test_entropy_pool_instances_differ() {
        let pool = RandPool::new(PoolConfig::new()).unwrap();
        let mut a = pool.checkout();
        let mut b = pool.checkout();
        assert_ne!(a.next_u64(), b.next_u64());
    }
}
