//! Full pairwise table. O(n²) | O(1).

use super::{min_index, RangeMinimum};
use tracing::debug;

/// RMQ that precomputes the answer for every pair `(i, j)`.
///
/// The table is mirrored so `table[i][j] == table[j][i]`; memory grows with
/// n², which is why drivers cap the sizes this strategy runs on.
#[derive(Debug, Clone)]
pub struct NaiveRmq<'a, T> {
    data: &'a [T],
    table: Vec<Vec<usize>>,
}

impl<'a, T: Ord> NaiveRmq<'a, T> {
    /// Wrap `data`; tables are built by [`RangeMinimum::preprocess`].
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            table: Vec::new(),
        }
    }
}

impl<T: Ord> RangeMinimum for NaiveRmq<'_, T> {
    fn preprocess(&mut self) {
        let n = self.data.len();
        let mut table = vec![vec![0usize; n]; n];

        for i in 0..n {
            table[i][i] = i;
            for j in i + 1..n {
                let best = min_index(self.data, table[i][j - 1], j);
                table[i][j] = best;
                table[j][i] = best;
            }
        }

        debug!(n, "naive table built");
        self.table = table;
    }

    #[inline]
    fn query(&self, i: usize, j: usize) -> usize {
        self.table[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_symmetric() {
        let data = [7, 3, 9, 3, 1, 8];
        let mut rmq = NaiveRmq::new(&data);
        rmq.preprocess();
        for i in 0..data.len() {
            for j in 0..data.len() {
                assert_eq!(rmq.table[i][j], rmq.table[j][i]);
            }
        }
        assert_eq!(rmq.query(0, 3), 1);
        assert_eq!(rmq.query(2, 5), 4);
    }
}
