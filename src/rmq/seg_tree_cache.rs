//! Cache-aware segment tree. O(n) | O(log n).
//!
//! Same query shape as [`SegTreeRmq`](super::SegTreeRmq), but the nodes of a
//! full binary tree of height `ceil(log2 n) + 1` are placed in van Emde Boas
//! order: the top half of the levels is laid out first, followed by each
//! bottom subtree, recursively. Parents therefore always precede their
//! children in the arena, which lets the bottom-up pass run over the arena
//! in reverse.
//!
//! Leaves past `n` are dead. A node whose subtree holds no live leaf is
//! dead too, and a dead right child is unlinked from its parent.

use super::{min_index, RangeMinimum};
use crate::util::ceil_log2;
use bitvec::prelude::*;
use tracing::debug;

const ROOT: usize = 0;

#[derive(Debug, Clone, Copy, Default)]
struct Node {
    left: Option<usize>,
    right: Option<usize>,
    /// Last input index covered.
    to: usize,
    /// Argmin over the covered range.
    min: usize,
}

/// Segment-tree RMQ in van Emde Boas layout over a borrowed sequence.
#[derive(Debug, Clone)]
pub struct SegTreeCacheRmq<'a, T> {
    data: &'a [T],
    nodes: Vec<Node>,
}

impl<'a, T: Ord> SegTreeCacheRmq<'a, T> {
    /// Wrap `data`; the tree is built by [`RangeMinimum::preprocess`].
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            nodes: Vec::new(),
        }
    }

    #[inline]
    fn take(&self, best: usize, node: usize) -> usize {
        min_index(self.data, best, self.nodes[node].min)
    }
}

/// Arena builder for the recursive layout.
struct Layout {
    nodes: Vec<Node>,
    /// Leaves of the subtrees laid out so far, left to right.
    leaves: Vec<usize>,
}

impl Layout {
    fn new(height: usize) -> Self {
        let size = (1usize << height) - 1;
        Self {
            nodes: vec![Node::default(); size],
            leaves: Vec::with_capacity((size + 1) / 2),
        }
    }

    /// Lay out a complete subtree of `height` levels rooted at arena slot
    /// `root`, occupying `root..root + 2^height - 1`.
    fn place(&mut self, root: usize, height: usize) {
        if height == 1 {
            self.leaves.push(root);
            return;
        }

        let top_height = height >> 1;
        let bottom_height = (height + 1) >> 1;
        self.place(root, top_height);

        let top_size = (1usize << top_height) - 1;
        let bottom_size = (1usize << bottom_height) - 1;

        // The top subtree's leaves become inner nodes; replace them by the
        // leaves of the bottom subtrees hanging below them.
        let top_leaves = 1usize << (top_height - 1);
        let parents = self.leaves.split_off(self.leaves.len() - top_leaves);

        let mut child = root + top_size;
        for parent in parents {
            let (left, right) = (child, child + bottom_size);
            child += 2 * bottom_size;

            self.nodes[parent].left = Some(left);
            self.nodes[parent].right = Some(right);

            self.place(left, bottom_height);
            self.place(right, bottom_height);
        }
    }
}

impl<T: Ord> RangeMinimum for SegTreeCacheRmq<'_, T> {
    fn preprocess(&mut self) {
        let n = self.data.len();
        let height = ceil_log2(n) + 1;

        let mut layout = Layout::new(height);
        layout.place(ROOT, height);
        let Layout { mut nodes, leaves } = layout;

        let mut live: BitVec = bitvec![0; nodes.len()];
        for (i, &slot) in leaves.iter().take(n).enumerate() {
            nodes[slot].to = i;
            nodes[slot].min = i;
            live.set(slot, true);
        }

        for idx in (0..nodes.len()).rev() {
            let Some(left) = nodes[idx].left else {
                continue;
            };
            if !live[left] {
                continue;
            }
            live.set(idx, true);

            let mut node = nodes[idx];
            node.to = nodes[left].to;
            node.min = nodes[left].min;
            match node.right {
                Some(right) if live[right] => {
                    node.to = nodes[right].to;
                    node.min = min_index(self.data, node.min, nodes[right].min);
                }
                _ => node.right = None,
            }
            nodes[idx] = node;
        }

        debug!(
            n,
            height,
            nodes = nodes.len(),
            live = live.count_ones(),
            "cache-aware segment tree built"
        );
        self.nodes = nodes;
    }

    fn query(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= j && j < self.data.len(), "invalid range [{}, {}]", i, j);

        // Walk down until the paths to i and j split.
        let mut node = ROOT;
        let (split_left, split_right) = loop {
            let cur = &self.nodes[node];
            let Some(left) = cur.left else {
                // Only reachable for single-element ranges.
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

        // Left boundary: subtrees of split_left are complete, so descend to
        // the leaf of i collecting right siblings.
        let mut node = split_left;
        loop {
            let cur = &self.nodes[node];
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

        // Right boundary.
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
