//! # Range Minimum Queries via the LCA Reduction
//!
//! This library implements the O(n) preprocessing / O(1) query range
//! minimum algorithm of Bender & Farach-Colton ("The LCA Problem
//! Revisited", LATIN 2000), together with the simpler strategies it is
//! usually compared against.
//!
//! ## Core Algorithm
//!
//! 1. **Cartesian tree**: RMQ on a sequence is LCA on its Cartesian tree
//! 2. **Euler tour**: LCA on a tree is RMQ on the depths of its Euler tour
//! 3. **±1 RMQ**: tour depths change by exactly one per step, so blocks of
//!    `~log(n)/4` elements fall into few shapes that share lookup tables
//! 4. **Sparse table**: whole blocks are combined in O(1)
//!
//! ## Usage Example
//!
//! ```
//! use lca_rmq::{CartesianTreeRmq, RangeMinimum};
//!
//! let data = [5, 2, 4, 1, 3];
//! let mut rmq = CartesianTreeRmq::new(&data);
//! rmq.preprocess();
//! assert_eq!(rmq.query(1, 3), 3);
//! assert_eq!(rmq.query(0, 1), 1);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod bench; // Benchmark and verification driver
pub mod rmq; // RMQ strategies
pub mod tree; // Rooted trees, Euler tours, LCA
pub mod util; // Integer logarithms

// Re-exports for convenience
pub use rmq::{
    CartesianTreeRmq, NaiveRmq, NoPreRmq, PlusMinusRmq, RangeMinimum, RmqKind, SegTreeCacheRmq,
    SegTreeRmq, SparseTableRmq,
};
pub use tree::{cartesian_tree, EulerTour, Lca, RootedTree, TreeError};
