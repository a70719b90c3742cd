//! Reference strategy: no tables, scan the range on every query.

use super::{min_index, RangeMinimum};

/// RMQ without preprocessing. O(1) | O(j - i).
#[derive(Debug, Clone, Copy)]
pub struct NoPreRmq<'a, T> {
    data: &'a [T],
}

impl<'a, T: Ord> NoPreRmq<'a, T> {
    /// Wrap `data`.
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }
}

impl<T: Ord> RangeMinimum for NoPreRmq<'_, T> {
    fn preprocess(&mut self) {}

    fn query(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= j && j < self.data.len(), "invalid range [{}, {}]", i, j);
        (i + 1..=j).fold(i, |best, idx| min_index(self.data, best, idx))
    }
}
