//! Range minimum query strategies
//!
//! Every strategy borrows an immutable sequence, builds its tables once in
//! [`RangeMinimum::preprocess`], and then answers [`RangeMinimum::query`]
//! for any closed range `[i, j]`.
//!
//! | strategy            | preprocessing | query       |
//! |---------------------|---------------|-------------|
//! | [`NoPreRmq`]        | O(1)          | O(j - i)    |
//! | [`NaiveRmq`]        | O(n²)         | O(1)        |
//! | [`SparseTableRmq`]  | O(n log n)    | O(1)        |
//! | [`SegTreeRmq`]      | O(n)          | O(log n)    |
//! | [`SegTreeCacheRmq`] | O(n)          | O(log n)    |
//! | [`PlusMinusRmq`]    | O(n)          | O(1)        |
//! | [`CartesianTreeRmq`]| O(n)          | O(1)        |
//!
//! [`PlusMinusRmq`] only accepts sequences whose neighbours differ by exactly
//! one. [`CartesianTreeRmq`] lifts that restriction by going through a
//! Cartesian tree and its Euler tour.
//!
//! All strategies return the left-most minimum of the range.

mod cartesian;
mod naive;
mod no_pre;
mod plus_minus;
mod seg_tree;
mod seg_tree_cache;
mod sparse_table;

pub use cartesian::CartesianTreeRmq;
pub use naive::NaiveRmq;
pub use no_pre::NoPreRmq;
pub use plus_minus::{PlusMinusIndex, PlusMinusRmq};
pub use seg_tree::SegTreeRmq;
pub use seg_tree_cache::SegTreeCacheRmq;
pub use sparse_table::{SparseTable, SparseTableRmq};

use std::cmp::Ordering;
use std::fmt;

/// Capability shared by every RMQ strategy.
///
/// `query` is only meaningful after `preprocess` ran exactly once and only
/// for `i <= j < n`. Violations are programmer errors: they panic on an
/// out-of-bounds access or a debug assertion and are never reported as
/// values.
pub trait RangeMinimum {
    /// Build the auxiliary tables.
    fn preprocess(&mut self);

    /// Index of the left-most minimum of `data[i..=j]`.
    fn query(&self, i: usize, j: usize) -> usize;
}

/// Pick the index holding the smaller value; ties go to the smaller index.
#[inline]
pub(crate) fn min_index<T: Ord>(data: &[T], a: usize, b: usize) -> usize {
    match data[a].cmp(&data[b]) {
        Ordering::Less => a,
        Ordering::Greater => b,
        Ordering::Equal => a.min(b),
    }
}

/// The closed set of strategies, for drivers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum RmqKind {
    /// Linear scan per query.
    NoPre,
    /// Full pairwise table.
    Naive,
    /// Power-of-two sparse table.
    SparseTable,
    /// Layered segment tree.
    SegTree,
    /// Segment tree in van Emde Boas layout.
    SegTreeCache,
    /// Block-decomposed RMQ for ±1 sequences.
    PlusMinus,
    /// Cartesian tree + LCA.
    Cartesian,
}

impl RmqKind {
    /// Every strategy, cheapest preprocessing first.
    pub const ALL: [RmqKind; 7] = [
        RmqKind::NoPre,
        RmqKind::Naive,
        RmqKind::SparseTable,
        RmqKind::SegTree,
        RmqKind::SegTreeCache,
        RmqKind::PlusMinus,
        RmqKind::Cartesian,
    ];

    /// Whether the strategy is only valid on ±1 sequences.
    pub fn requires_plus_minus(self) -> bool {
        matches!(self, RmqKind::PlusMinus)
    }

    /// Construct the strategy over `data`. Preprocessing is left to the
    /// caller so that it can be timed separately.
    pub fn instantiate<'a, T: Ord + Clone>(self, data: &'a [T]) -> Box<dyn RangeMinimum + 'a> {
        match self {
            RmqKind::NoPre => Box::new(NoPreRmq::new(data)),
            RmqKind::Naive => Box::new(NaiveRmq::new(data)),
            RmqKind::SparseTable => Box::new(SparseTableRmq::new(data)),
            RmqKind::SegTree => Box::new(SegTreeRmq::new(data)),
            RmqKind::SegTreeCache => Box::new(SegTreeCacheRmq::new(data)),
            RmqKind::PlusMinus => Box::new(PlusMinusRmq::new(data)),
            RmqKind::Cartesian => Box::new(CartesianTreeRmq::new(data)),
        }
    }
}

impl fmt::Display for RmqKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RmqKind::NoPre => "No Pre-Processing",
            RmqKind::Naive => "Naive",
            RmqKind::SparseTable => "Sparse Table",
            RmqKind::SegTree => "Segment Tree",
            RmqKind::SegTreeCache => "Cache-Aware Segment Tree",
            RmqKind::PlusMinus => "Plus-Minus",
            RmqKind::Cartesian => "Cartesian Tree",
        };
        f.write_str(name)
    }
}
