//! Sparse table. O(n log n) | O(1).
//!
//! Level `k` stores, for every start `i`, the index of the minimum of
//! `data[i..i + 2^k]`. A query for `[i, j]` covers the range with the two
//! (possibly overlapping) blocks of length `2^floor(log2(j - i + 1))` that
//! start at `i` and end at `j`.
//!
//! [`SparseTable`] holds only indices and takes the values at query time, so
//! the same table type serves the borrowed input ([`SparseTableRmq`]) and
//! owned copies inside the ±1 RMQ.

use super::{min_index, RangeMinimum};
use crate::util::floor_log2;
use tracing::debug;

/// Index tables of a sparse table, detached from the values they describe.
#[derive(Debug, Clone, Default)]
pub struct SparseTable {
    /// `levels[k][i]` = argmin of `data[i..i + 2^k]`.
    levels: Vec<Vec<usize>>,
}

impl SparseTable {
    /// Build the table over `data`.
    pub fn build<T: Ord>(data: &[T]) -> Self {
        let n = data.len();
        if n == 0 {
            return Self::default();
        }

        let height = floor_log2(n) + 1;
        let mut levels: Vec<Vec<usize>> = Vec::with_capacity(height);
        levels.push((0..n).collect());

        for k in 1..height {
            let half = 1 << (k - 1);
            let below = &levels[k - 1];
            let level: Vec<usize> = (0..=n - (1 << k))
                .map(|i| min_index(data, below[i], below[i + half]))
                .collect();
            levels.push(level);
        }

        Self { levels }
    }

    /// Number of levels, `floor(log2 n) + 1` for non-empty input.
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    /// Argmin of `data[i..=j]`; `data` must be the slice the table was built
    /// from (or an equal copy of it).
    #[inline]
    pub fn query<T: Ord>(&self, data: &[T], i: usize, j: usize) -> usize {
        debug_assert!(i <= j, "invalid range [{}, {}]", i, j);
        let k = floor_log2(j - i + 1);
        let level = &self.levels[k];
        min_index(data, level[i], level[j + 1 - (1 << k)])
    }
}

/// Sparse-table RMQ over a borrowed sequence.
#[derive(Debug, Clone)]
pub struct SparseTableRmq<'a, T> {
    data: &'a [T],
    table: SparseTable,
}

impl<'a, T: Ord> SparseTableRmq<'a, T> {
    /// Wrap `data`; tables are built by [`RangeMinimum::preprocess`].
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            table: SparseTable::default(),
        }
    }
}

impl<T: Ord> RangeMinimum for SparseTableRmq<'_, T> {
    fn preprocess(&mut self) {
        self.table = SparseTable::build(self.data);
        debug!(n = self.data.len(), levels = self.table.height(), "sparse table built");
    }

    #[inline]
    fn query(&self, i: usize, j: usize) -> usize {
        self.table.query(self.data, i, j)
    }
}
