//! Lowest common ancestors through the Euler tour
//!
//! Between the first visits of `u` and `v` the tour passes through every
//! node on the path between them and through nothing shallower than their
//! LCA, which it must visit. So
//! `LCA(u, v) = E[rmq_L(min(R[u], R[v]), max(R[u], R[v]))]`, and since `L`
//! is a ±1 sequence the RMQ is answered by [`PlusMinusIndex`].

use super::{EulerTour, RootedTree};
use crate::rmq::PlusMinusIndex;
use tracing::debug;

/// Euler tour and ±1 index of one tree, owning everything it needs.
#[derive(Debug, Clone, Default)]
pub struct LcaIndex {
    tour: EulerTour,
    depths: PlusMinusIndex<usize>,
}

impl LcaIndex {
    /// Compute the tour of `tree` and index its depth sequence.
    pub fn build(tree: &RootedTree) -> Self {
        let tour = tree.euler_tour();
        let depths = PlusMinusIndex::build(tour.depths());
        debug!(nodes = tree.len(), tour = tour.len(), "lca index built");
        Self { tour, depths }
    }

    /// Lowest common ancestor of `u` and `v`.
    #[inline]
    pub fn query(&self, u: usize, v: usize) -> usize {
        let first = self.tour.first_visit();
        let (ru, rv) = (first[u], first[v]);
        let (i, j) = if ru <= rv { (ru, rv) } else { (rv, ru) };
        self.tour.nodes()[self.depths.query(self.tour.depths(), i, j)]
    }

    /// The Euler tour the index was built from.
    pub fn tour(&self) -> &EulerTour {
        &self.tour
    }
}

/// LCA queries over a borrowed tree.
///
/// Mirrors the RMQ strategies: construct, run [`Lca::preprocess`] once,
/// then query.
#[derive(Debug, Clone)]
pub struct Lca<'t> {
    tree: &'t RootedTree,
    index: LcaIndex,
}

impl<'t> Lca<'t> {
    /// Wrap `tree`; nothing is computed until [`Lca::preprocess`].
    pub fn new(tree: &'t RootedTree) -> Self {
        Self {
            tree,
            index: LcaIndex::default(),
        }
    }

    /// Build the Euler tour and the ±1 index over its depths.
    pub fn preprocess(&mut self) {
        self.index = LcaIndex::build(self.tree);
    }

    /// Lowest common ancestor of `u` and `v`.
    #[inline]
    pub fn query(&self, u: usize, v: usize) -> usize {
        self.index.query(u, v)
    }

    /// The tree being queried.
    pub fn tree(&self) -> &'t RootedTree {
        self.tree
    }

    /// Euler tour from the last preprocessing pass.
    pub fn tour(&self) -> &EulerTour {
        self.index.tour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_tree() {
        let tree = RootedTree::new(vec![None, Some(0), Some(0), Some(1), Some(1)]).unwrap();
        let mut lca = Lca::new(&tree);
        lca.preprocess();
        assert_eq!(lca.query(3, 4), 1);
        assert_eq!(lca.query(3, 2), 0);
        assert_eq!(lca.query(2, 3), 0);
        assert_eq!(lca.query(1, 4), 1);
        assert_eq!(lca.query(4, 4), 4);
        assert_eq!(lca.tour().len(), 9);
    }

    #[test]
    fn ancestor_is_its_own_answer_on_a_path() {
        let parents: Vec<Option<usize>> =
            (0..40).map(|u| if u == 0 { None } else { Some(u - 1) }).collect();
        let tree = RootedTree::new(parents).unwrap();
        let mut lca = Lca::new(&tree);
        lca.preprocess();
        for u in 0..40 {
            for v in 0..40 {
                assert_eq!(lca.query(u, v), u.min(v));
            }
        }
    }
}
