//! Euler tour of a rooted tree
//!
//! The tour lists a node every time the walk arrives at it, either going
//! down from its parent or coming back up from a child, so it has
//! `2n - 1` entries. Consecutive depths differ by exactly one, which is what
//! makes LCA a ±1 RMQ.

use super::RootedTree;

/// Euler tour encoding: `E`, `L` and `R` in the usual notation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EulerTour {
    /// Node visited at each step (`E`).
    nodes: Vec<usize>,
    /// Depth of that node, the root having depth 1 (`L`).
    depths: Vec<usize>,
    /// Tour index of each node's first visit (`R`).
    first_visit: Vec<usize>,
}

impl EulerTour {
    /// Node visited at each step.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Depth at each step.
    pub fn depths(&self) -> &[usize] {
        &self.depths
    }

    /// First tour index of every node.
    pub fn first_visit(&self) -> &[usize] {
        &self.first_visit
    }

    /// Number of tour steps.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True only for the tour of an empty tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl RootedTree {
    /// Walk the tree depth-first and record the tour.
    ///
    /// The walk is iterative: an explicit stack holds the current path and a
    /// cursor per node remembers the next child to descend into, so deep
    /// (path-like) trees cannot overflow the call stack.
    pub fn euler_tour(&self) -> EulerTour {
        let n = self.len();
        let steps = (2 * n).saturating_sub(1);
        let mut tour = EulerTour {
            nodes: Vec::with_capacity(steps),
            depths: Vec::with_capacity(steps),
            first_visit: vec![0; n],
        };
        if n == 0 {
            return tour;
        }

        let mut cursor = vec![0usize; n];
        let mut path = Vec::with_capacity(n);

        path.push(self.root());
        tour.first_visit[self.root()] = 0;
        tour.nodes.push(self.root());
        tour.depths.push(1);

        while let Some(&u) = path.last() {
            let children = self.children(u);
            if let Some(&child) = children.get(cursor[u]) {
                cursor[u] += 1;
                path.push(child);
                tour.first_visit[child] = tour.nodes.len();
                tour.nodes.push(child);
                tour.depths.push(path.len());
            } else {
                path.pop();
                if let Some(&parent) = path.last() {
                    tour.nodes.push(parent);
                    tour.depths.push(path.len());
                }
            }
        }

        debug_assert_eq!(tour.nodes.len(), steps);
        tour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RootedTree {
        RootedTree::new(vec![None, Some(0), Some(0), Some(1), Some(1)]).unwrap()
    }

    #[test]
    fn tour_of_sample_tree() {
        let tour = sample().euler_tour();
        assert_eq!(tour.nodes(), &[0, 1, 3, 1, 4, 1, 0, 2, 0]);
        assert_eq!(tour.depths(), &[1, 2, 3, 2, 3, 2, 1, 2, 1]);
        assert_eq!(tour.first_visit(), &[0, 1, 7, 2, 4]);
    }

    #[test]
    fn single_node() {
        let tour = RootedTree::new(vec![None]).unwrap().euler_tour();
        assert_eq!(tour.nodes(), &[0]);
        assert_eq!(tour.depths(), &[1]);
        assert_eq!(tour.first_visit(), &[0]);
    }

    #[test]
    fn deep_path_does_not_recurse() {
        let n = 200_000;
        let parents: Vec<Option<usize>> =
            (0..n).map(|u| if u == 0 { None } else { Some(u - 1) }).collect();
        let tour = RootedTree::new(parents).unwrap().euler_tour();
        assert_eq!(tour.len(), 2 * n - 1);
        assert_eq!(tour.depths()[n - 1], n);
        assert!(tour
            .depths()
            .windows(2)
            .all(|w| w[0].abs_diff(w[1]) == 1));
    }
}
