//! Segment tree. O(n) | O(log n).
//!
//! Nodes live in one arena. The leaves occupy the tail in input order; each
//! layer above pairs up neighbours of the layer below from the left, so the
//! last node of a layer may have a single child. The root sits at index 0.

use super::{min_index, RangeMinimum};
use tracing::debug;

const ROOT: usize = 0;

#[derive(Debug, Clone, Copy, Default)]
struct Node {
    left: Option<usize>,
    right: Option<usize>,
    /// First input index covered.
    from: usize,
    /// Last input index covered.
    to: usize,
    /// Argmin over `from..=to`.
    min: usize,
}

/// Segment-tree RMQ over a borrowed sequence.
#[derive(Debug, Clone)]
pub struct SegTreeRmq<'a, T> {
    data: &'a [T],
    nodes: Vec<Node>,
}

impl<'a, T: Ord> SegTreeRmq<'a, T> {
    /// Wrap `data`; the tree is built by [`RangeMinimum::preprocess`].
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            nodes: Vec::new(),
        }
    }

    /// Total number of nodes, leaves included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Fold the node's argmin into `best`.
    #[inline]
    fn take(&self, best: usize, node: usize) -> usize {
        min_index(self.data, best, self.nodes[node].min)
    }
}

/// Number of nodes of a tree over `n` leaves.
fn tree_size(n: usize) -> usize {
    let mut size = n;
    let mut layer = n;
    while layer > 1 {
        layer = (layer + 1) >> 1;
        size += layer;
    }
    size
}

impl<T: Ord> RangeMinimum for SegTreeRmq<'_, T> {
    fn preprocess(&mut self) {
        let n = self.data.len();
        let size = tree_size(n);
        let mut nodes = vec![Node::default(); size];

        let leaves = size - n;
        for i in 0..n {
            nodes[leaves + i] = Node {
                left: None,
                right: None,
                from: i,
                to: i,
                min: i,
            };
        }

        // lower: width of the layer below, start: its first node.
        let (mut lower, mut start) = (n, leaves);
        while lower > 1 {
            let width = (lower + 1) >> 1;
            let first = start - width;

            for k in 0..width {
                let l = start + 2 * k;
                let r = (2 * k + 1 < lower).then_some(l + 1);

                let mut node = Node {
                    left: Some(l),
                    right: r,
                    from: nodes[l].from,
                    to: nodes[l].to,
                    min: nodes[l].min,
                };
                if let Some(r) = r {
                    node.to = nodes[r].to;
                    node.min = min_index(self.data, node.min, nodes[r].min);
                }
                nodes[first + k] = node;
            }

            lower = width;
            start = first;
        }

        debug!(n, nodes = size, "segment tree built");
        self.nodes = nodes;
    }

    fn query(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= j && j < self.data.len(), "invalid range [{}, {}]", i, j);

        // Walk down until the paths to i and j split.
        let mut node = ROOT;
        let (split_left, split_right) = loop {
            let cur = &self.nodes[node];
            if cur.from == i && cur.to == j {
                return cur.min;
            }
            let Some(left) = cur.left else {
                return cur.min;
            };
            let left_to = self.nodes[left].to;
            match cur.right {
                Some(right) if i > left_to => node = right,
                Some(right) if j > left_to => break (left, right),
                _ => node = left,
            }
        };

        let mut best = i;

        // Left boundary: everything right of the path to i is inside.
        let mut node = split_left;
        loop {
            let cur = &self.nodes[node];
            if cur.from == i {
                best = self.take(best, node);
                break;
            }
            let (Some(left), Some(right)) = (cur.left, cur.right) else {
                best = self.take(best, node);
                break;
            };
            if i <= self.nodes[left].to {
                best = self.take(best, right);
                node = left;
            } else {
                node = right;
            }
        }

        // Right boundary: everything left of the path to j is inside.
        let mut node = split_right;
        loop {
            let cur = &self.nodes[node];
            if cur.to == j {
                best = self.take(best, node);
                break;
            }
            let Some(left) = cur.left else {
                best = self.take(best, node);
                break;
            };
            match cur.right {
                Some(right) if j > self.nodes[left].to => {
                    best = self.take(best, left);
                    node = right;
                }
                _ => node = left,
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_size_counts_every_layer() {
        assert_eq!(tree_size(1), 1);
        assert_eq!(tree_size(2), 3);
        assert_eq!(tree_size(5), 5 + 3 + 2 + 1);
        assert_eq!(tree_size(8), 15);
    }

    #[test]
    fn root_spans_the_input() {
        let data = [4, 8, 1, 9, 2];
        let mut rmq = SegTreeRmq::new(&data);
        rmq.preprocess();
        let root = rmq.nodes[ROOT];
        assert_eq!((root.from, root.to, root.min), (0, 4, 2));
        assert_eq!(rmq.node_count(), 11);
    }

    #[test]
    fn matches_scan_for_odd_layers() {
        for n in 1..=17 {
            let data: Vec<u32> = (0..n).map(|k| (k * 7 + 3) % 11).collect();
            let mut rmq = SegTreeRmq::new(&data);
            rmq.preprocess();
            for i in 0..n as usize {
                for j in i..n as usize {
                    let expected = (i..=j).min_by_key(|&k| (data[k], k)).unwrap();
                    assert_eq!(rmq.query(i, j), expected, "n={} [{}, {}]", n, i, j);
                }
            }
        }
    }
}
