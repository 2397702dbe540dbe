//! Shuffles and permutations.

use crate::bounded::uint64n_unchecked;
use crate::engine::RngCore;

/// Fisher-Yates shuffle over the index range `0..len`.
///
/// For `i` from `len - 1` down to `1`, picks `j` uniformly in `[0, i]` and calls
/// `swap(i, j)`; `j == i` is passed through, so `swap` must tolerate equal indices.
/// A `len` of 0 or 1 draws nothing.
pub fn shuffle<R, F>(rng: &mut R, len: usize, mut swap: F)
where
    R: RngCore + ?Sized,
    F: FnMut(usize, usize),
{
    for i in (1..len).rev() {
        let j = uint64n_unchecked(rng, i as u64 + 1) as usize;
        swap(i, j);
    }
}

/// Shuffles `slice` in place.
pub fn shuffle_slice<R: RngCore + ?Sized, T>(rng: &mut R, slice: &mut [T]) {
    shuffle(rng, slice.len(), |i, j| slice.swap(i, j));
}

/// Returns a uniformly random permutation of `0..n`.
#[must_use]
pub fn perm<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut out: Vec<usize> = (0..n).collect();
    shuffle_slice(rng, &mut out);
    out
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
    use crate::bounded::uint64n;
    use crate::engine::Sfc64;

    #[test]
    fn test_short_lengths_draw_nothing() {
        let mut rng = Sfc64::new(1);
        let before = rng.clone();
        shuffle(&mut rng, 0, |_, _| panic!("no swaps for len 0"));
        shuffle(&mut rng, 1, |_, _| panic!("no swaps for len 1"));
        assert_eq!(rng, before);
        assert!(perm(&mut rng, 0).is_empty());
        assert_eq!(perm(&mut rng, 1), vec![0]);
        assert_eq!(rng, before);
    }

    #[test]
    fn test_swap_sequence() {
        let mut rng = Sfc64::new(2);
        let mut reference = rng.clone();

        let mut calls = Vec::new();
        shuffle(&mut rng, 5, |i, j| calls.push((i, j)));

        let expected: Vec<(usize, usize)> = (1..5)
            .rev()
            .map(|i| (i, uint64n(&mut reference, i as u64 + 1).unwrap() as usize))
            .collect();
        assert_eq!(calls, expected);
        assert!(calls.iter().all(|&(i, j)| j <= i));
        assert_eq!(rng, reference);
    }

    #[test]
    fn test_perm_is_permutation() {
        let mut rng = Sfc64::new(3);
        for n in [2, 3, 10, 257] {
            let mut p = perm(&mut rng, n);
            p.sort_unstable();
            assert_eq!(p, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_shuffle_slice_keeps_elements() {
        let mut rng = Sfc64::new(4);
        let mut words = vec!["a", "b", "c", "d", "e", "f"];
        shuffle_slice(&mut rng, &mut words);
        let mut sorted = words.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_perm_matches_shuffle_slice() {
        let mut a = Sfc64::new(5);
        let mut b = Sfc64::new(5);
        let mut identity: Vec<usize> = (0..20).collect();
        shuffle_slice(&mut b, &mut identity);
        assert_eq!(perm(&mut a, 20), identity);
    }

    #[test]
    fn test_every_position_reachable() {
        // Element 0 of a 3-element shuffle must land everywhere.
        let mut rng = Sfc64::new(6);
        let mut seen = [0u32; 3];
        for _ in 0..3000 {
            let p = perm(&mut rng, 3);
            let pos = p.iter().position(|&x| x == 0).unwrap();
            seen[pos] += 1;
        }
        assert!(seen.iter().all(|&c| c > 800), "positions {seen:?}");
    }
}

#[cfg(test)]
#[allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]
mod property_tests {
    use super::*;
    use crate::engine::Sfc64;
    use proptest::prelude::*;

    proptest! {
        /// Property: perm(n) always contains each of 0..n exactly once.
        #[test]
        fn prop_perm_is_bijection(seed in any::<u64>(), n in 0usize..200) {
            let mut rng = Sfc64::new(seed);
            let p = perm(&mut rng, n);
            let mut hit = vec![false; n];
            for &x in &p {
                prop_assert!(x < n);
                prop_assert!(!hit[x], "{} repeated", x);
                hit[x] = true;
            }
            prop_assert_eq!(p.len(), n);
        }
    }
}
