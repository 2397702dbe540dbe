//! Entropy used only for initial seeding.
//!
//! The engine never needs entropy after construction; it only consumes seed words.
//! [`EntropySource`] is the seam for callers who want to bring their own byte provider
//! (an OS RNG, a hardware source, a fixed buffer in tests).
//!
//! # Non-Determinism Warning
//!
//! [`SystemEntropy`] is intentionally non-deterministic. For reproducible behaviour,
//! seed generators explicitly with [`Rand::new`](crate::Rand::new) or
//! [`Rand::from_seeds`](crate::Rand::from_seeds) instead.
//!
//! This is NOT cryptographically secure.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use web_time::{Instant, SystemTime, UNIX_EPOCH};

/// An opaque provider of raw seed bytes.
pub trait EntropySource {
    /// Fills `dest` entirely with entropy bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest);
    }
}

/// Default entropy source built from process-local, non-deterministic inputs.
///
/// Combines:
/// - wall-clock time and a monotonic clock reading via `web_time`
/// - thread identity for cross-thread uniqueness
/// - a process-wide call counter, so back-to-back calls on one thread never repeat
/// - the random keys of a std `RandomState` hasher
///
/// The mixed 64-bit value is expanded to the requested length with a SplitMix64 stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut stream = SplitMix64::new(system_seed());
        for chunk in dest.chunks_mut(8) {
            let bytes = stream.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

static CALL_COUNTER: AtomicU64 = AtomicU64::new(0);
static PROCESS_ANCHOR: OnceLock<Instant> = OnceLock::new();

fn system_seed() -> u64 {
    let anchor = *PROCESS_ANCHOR.get_or_init(Instant::now);

    let mut hasher = RandomState::new().build_hasher();
    std::thread::current().id().hash(&mut hasher);
    CALL_COUNTER.fetch_add(1, Ordering::Relaxed).hash(&mut hasher);
    anchor.elapsed().as_nanos().hash(&mut hasher);
    // A clock set before the epoch only loses this one input.
    if let Ok(since_epoch) = SystemTime::now().duration_since(UNIX_EPOCH) {
        since_epoch.as_nanos().hash(&mut hasher);
    }
    hasher.finish()
}

/// SplitMix64 (Steele, Lea & Flood), used to stretch one mixed word into many bytes.
#[derive(Debug, Clone)]
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
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
    fn test_system_entropy_fills_odd_lengths() {
        for len in [0usize, 1, 7, 8, 9, 24, 31] {
            let mut buf = vec![0u8; len];
            SystemEntropy.fill_bytes(&mut buf);
            if len >= 8 {
                assert!(buf.iter().any(|&b| b != 0), "len={len} left all zeros");
            }
        }
    }

    #[test]
    fn test_system_entropy_differs_between_calls() {
        let mut a = [0u8; 24];
        let mut b = [0u8; 24];
        SystemEntropy.fill_bytes(&mut a);
        SystemEntropy.fill_bytes(&mut b);
        assert_ne!(a, b, "two entropy draws should not repeat");
    }

    #[test]
    fn test_splitmix_golden() {
        // Reference outputs of SplitMix64 seeded with 0.
        let mut sm = SplitMix64::new(0);
        assert_eq!(sm.next_u64(), 0xe220a8397b1dcdaf);
        assert_eq!(sm.next_u64(), 0x6e789e6aa1b965f4);
        assert_eq!(sm.next_u64(), 0x06c45d188009454f);
    }

    #[test]
    fn test_entropy_source_through_mut_ref() {
        struct Constant(u8);
        impl EntropySource for Constant {
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(self.0);
            }
        }

        let mut source = Constant(0xAB);
        let by_ref = &mut source;
        let mut buf = [0u8; 5];
        by_ref.fill_bytes(&mut buf);
        assert_eq!(buf, [0xAB; 5]);
    }
}
