//! Seeded input generators.
//!
//! Same seed, same output: every generator draws from a `StdRng` seeded
//! with the caller's value.

use crate::util::floor_log2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Value range for a sequence of `size` elements: `(max, shift)` such that
/// values fall in `[-shift, max - shift)`.
fn value_range(size: usize) -> (i64, i64) {
    let max = (size * floor_log2(size)).max(1) as i64;
    (max, max >> 2)
}

/// Uniformly random values, with ties likely only for tiny inputs.
pub fn uniform_data(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (max, shift) = value_range(size);
    (0..size).map(|_| rng.gen_range(0..max) - shift).collect()
}

/// A random walk with steps of exactly ±1.
pub fn plus_minus_data(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (max, shift) = value_range(size);

    let mut data = Vec::with_capacity(size);
    if size == 0 {
        return data;
    }
    let mut value = rng.gen_range(0..max) - shift;
    data.push(value);
    for _ in 1..size {
        value += if rng.gen::<bool>() { 1 } else { -1 };
        data.push(value);
    }
    data
}

/// Parent array of a random recursive tree with `size` nodes and shuffled
/// labels. Exactly one entry is `None`.
pub fn random_tree(size: usize, seed: u64) -> Vec<Option<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut labels: Vec<usize> = (0..size).collect();
    labels.shuffle(&mut rng);

    let mut parents = vec![None; size];
    for k in 1..size {
        let parent = rng.gen_range(0..k);
        parents[labels[k]] = Some(labels[parent]);
    }
    parents
}

/// A random range `(i, j)` with `i <= j < n`.
pub fn sample_range<R: Rng + ?Sized>(rng: &mut R, n: usize) -> (usize, usize) {
    let a = rng.gen_range(0..n);
    let b = rng.gen_range(0..n);
    (a.min(b), a.max(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_reproducible() {
        assert_eq!(uniform_data(100, 7), uniform_data(100, 7));
        assert_ne!(uniform_data(100, 7), uniform_data(100, 8));
        assert_eq!(plus_minus_data(100, 7), plus_minus_data(100, 7));
        assert_eq!(random_tree(100, 7), random_tree(100, 7));
    }

    #[test]
    fn uniform_values_stay_in_range() {
        let size = 1000;
        let (max, shift) = value_range(size);
        assert!(uniform_data(size, 1)
            .iter()
            .all(|&v| (-shift..max - shift).contains(&v)));
    }

    #[test]
    fn plus_minus_steps_by_one() {
        let data = plus_minus_data(5000, 3);
        assert_eq!(data.len(), 5000);
        assert!(data.windows(2).all(|w| (w[0] - w[1]).abs() == 1));
        assert!(plus_minus_data(0, 3).is_empty());
    }

    #[test]
    fn random_tree_has_one_root() {
        let parents = random_tree(500, 11);
        assert_eq!(parents.iter().filter(|p| p.is_none()).count(), 1);
        assert!(parents.iter().flatten().all(|&p| p < 500));
    }

    #[test]
    fn sampled_ranges_are_ordered() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let (i, j) = sample_range(&mut rng, 17);
            assert!(i <= j && j < 17);
        }
        assert_eq!(sample_range(&mut rng, 1), (0, 0));
    }
}
