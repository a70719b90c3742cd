//! General RMQ through the Cartesian tree. O(n) | O(1).
//!
//! Closes the reduction loop RMQ → Cartesian tree → LCA → Euler tour →
//! ±1 RMQ. The tree itself is only needed to produce the tour and is
//! dropped at the end of preprocessing.

use super::RangeMinimum;
use crate::tree::{cartesian_tree, LcaIndex};
use tracing::debug;

/// RMQ answered as the LCA of `i` and `j` in the Cartesian tree of the data.
#[derive(Debug, Clone)]
pub struct CartesianTreeRmq<'a, T> {
    data: &'a [T],
    lca: LcaIndex,
}

impl<'a, T: Ord> CartesianTreeRmq<'a, T> {
    /// Wrap `data`; tables are built by [`RangeMinimum::preprocess`].
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            lca: LcaIndex::default(),
        }
    }
}

impl<T: Ord> RangeMinimum for CartesianTreeRmq<'_, T> {
    fn preprocess(&mut self) {
        let tree = cartesian_tree(self.data);
        debug!(n = self.data.len(), root = tree.root(), "cartesian tree built");
        self.lca = LcaIndex::build(&tree);
    }

    #[inline]
    fn query(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= j && j < self.data.len(), "invalid range [{}, {}]", i, j);
        self.lca.query(i, j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_sequence() {
        let data = [5, 2, 4, 1, 3];
        let mut rmq = CartesianTreeRmq::new(&data);
        rmq.preprocess();
        assert_eq!(rmq.query(1, 3), 3);
        assert_eq!(rmq.query(0, 4), 3);
        assert_eq!(rmq.query(0, 1), 1);
        for i in 0..data.len() {
            assert_eq!(rmq.query(i, i), i);
        }
    }

    #[test]
    fn leftmost_of_equal_minima() {
        let data = [3, 1, 2, 1, 1, 4];
        let mut rmq = CartesianTreeRmq::new(&data);
        rmq.preprocess();
        assert_eq!(rmq.query(0, 5), 1);
        assert_eq!(rmq.query(2, 5), 3);
        assert_eq!(rmq.query(4, 5), 4);
    }

    #[test]
    fn matches_scan_on_every_range() {
        let data: Vec<i64> = (0..300).map(|k: i64| (k * 7919) % 257 - 100).collect();
        let mut rmq = CartesianTreeRmq::new(&data);
        rmq.preprocess();
        for i in 0..data.len() {
            for j in i..data.len() {
                let expected = (i..=j).min_by_key(|&k| (data[k], k)).unwrap();
                assert_eq!(rmq.query(i, j), expected, "[{}, {}]", i, j);
            }
        }
    }
}
