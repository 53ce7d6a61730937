//! Partial presorting of sequences.
//!
//! A workload that is "X% sorted" is built by fully sorting the sequence and
//! then displacing a controlled number of elements: a seeded shuffle picks
//! `shuffle_count` positions and the values at those positions are cyclically
//! rotated by one slot. Everything else stays exactly sorted.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Presort `slice` by `cmp`, then displace `shuffle_count` elements.
///
/// `shuffle_count <= 1` leaves the sequence fully sorted. `shuffle_count`
/// beyond the sequence length is a caller error; callers derive it as
/// `floor(len * fraction)`.
pub fn presort_by<T, F>(slice: &mut [T], shuffle_count: usize, seed: u64, mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(shuffle_count <= slice.len());

    slice.sort_by(&mut cmp);

    if shuffle_count <= 1 {
        return;
    }

    let mut indices: Vec<usize> = (0..slice.len()).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(seed));

    // Swap chain rotates the values at the first shuffle_count shuffled
    // positions by one slot.
    for i in 1..shuffle_count {
        slice.swap(indices[i - 1], indices[i]);
    }
}

/// [`presort_by`] with the natural order.
pub fn presort<T: Ord>(slice: &mut [T], shuffle_count: usize, seed: u64) {
    presort_by(slice, shuffle_count, seed, T::cmp);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn displaced(sequence: &[i32]) -> usize {
        let mut sorted = sequence.to_vec();
        sorted.sort_unstable();
        sequence
            .iter()
            .zip(&sorted)
            .filter(|(a, b)| a != b)
            .count()
    }

    #[test]
    fn test_zero_count_sorts_fully() {
        let mut v = vec![5, 1, 4, 2, 3];
        presort(&mut v, 0, 99);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_count_one_is_noop() {
        let mut v: Vec<i32> = (0..64).rev().collect();
        presort(&mut v, 1, 99);
        assert_eq!(v, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn test_displaces_at_most_count() {
        let mut v: Vec<i32> = (0..1000).rev().collect();
        presort(&mut v, 100, 7);
        let moved = displaced(&v);
        assert!(moved <= 100, "{moved} elements displaced");
        // The rotation can land a value back on an equal neighbor, but with
        // distinct values nearly all picked positions must move.
        assert!(moved >= 90, "only {moved} elements displaced");
    }

    #[test]
    fn test_multiset_is_preserved() {
        let mut v: Vec<i32> = (0..500).map(|i| (i * 37) % 250).collect();
        let mut expected = v.clone();
        expected.sort_unstable();
        presort(&mut v, 50, 3);
        let mut got = v.clone();
        got.sort_unstable();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_same_seed_same_result() {
        let mut a: Vec<i32> = (0..200).rev().collect();
        let mut b = a.clone();
        presort(&mut a, 40, 1234);
        presort(&mut b, 40, 1234);
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_comparator_descending() {
        let mut v = vec![1, 3, 2];
        presort_by(&mut v, 0, 0, |a, b| b.cmp(a));
        assert_eq!(v, vec![3, 2, 1]);
    }
}
