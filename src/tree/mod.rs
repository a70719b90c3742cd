//! Rooted trees and the LCA ⇄ RMQ reductions
//!
//! - [`RootedTree`]: parent array plus derived child lists, validated once.
//! - [`EulerTour`]: node/depth/first-visit sequences of a depth-first walk.
//! - [`Lca`]: lowest common ancestors as ±1 RMQ over the tour depths.
//! - [`cartesian_tree`]: the min-heap ordered tree of a sequence, whose LCAs
//!   are range minima.

mod cartesian;
mod euler;
mod lca;

pub use cartesian::cartesian_tree;
pub use euler::EulerTour;
pub use lca::{Lca, LcaIndex};

use thiserror::Error;

/// Reasons a parent array does not describe a rooted tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// No node is marked as root (this includes the empty array).
    #[error("invalid tree: no root")]
    NoRoot,

    /// More than one node is marked as root.
    #[error("invalid tree: nodes {first} and {second} are both roots")]
    MultipleRoots {
        /// First root seen.
        first: usize,
        /// Second root seen.
        second: usize,
    },

    /// A parent entry points outside the node range.
    #[error("invalid tree: node {node} has parent {parent} out of range")]
    ParentOutOfRange {
        /// Offending node.
        node: usize,
        /// Its parent entry.
        parent: usize,
    },

    /// A node cannot be reached from the root (it sits on a cycle).
    #[error("invalid tree: node {node} is not reachable from the root")]
    Unreachable {
        /// First unreachable node.
        node: usize,
    },
}

/// Rooted tree given by parent pointers.
///
/// Both arrays are owned and immutable after construction. Children are
/// listed in ascending node order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootedTree {
    root: usize,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
}

impl RootedTree {
    /// Build a tree from its parent array; `None` marks the root.
    pub fn new(parents: Vec<Option<usize>>) -> Result<Self, TreeError> {
        let n = parents.len();
        let mut root = None;

        for (node, &parent) in parents.iter().enumerate() {
            match parent {
                None => match root {
                    None => root = Some(node),
                    Some(first) => {
                        return Err(TreeError::MultipleRoots {
                            first,
                            second: node,
                        })
                    }
                },
                Some(parent) if parent >= n => {
                    return Err(TreeError::ParentOutOfRange { node, parent })
                }
                Some(_) => {}
            }
        }

        let root = root.ok_or(TreeError::NoRoot)?;
        let tree = Self::from_parts(root, parents);

        // With one root and in-range parents, the only remaining defect is a
        // cycle detached from the root.
        let mut seen = vec![false; n];
        let mut stack = vec![tree.root];
        while let Some(u) = stack.pop() {
            seen[u] = true;
            stack.extend_from_slice(&tree.children[u]);
        }
        if let Some(node) = seen.iter().position(|&s| !s) {
            return Err(TreeError::Unreachable { node });
        }

        Ok(tree)
    }

    /// Build from a parent array already known to be a valid tree.
    pub(crate) fn from_parts(root: usize, parents: Vec<Option<usize>>) -> Self {
        debug_assert_eq!(parents[root], None);
        let mut children = vec![Vec::new(); parents.len()];
        for (node, parent) in parents.iter().enumerate() {
            if let Some(parent) = *parent {
                children[parent].push(node);
            }
        }
        Self {
            root,
            parents,
            children,
        }
    }

    /// The root node.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Always false: a valid tree has a root.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Parent of `node`, `None` for the root.
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parents[node]
    }

    /// Children of `node` in ascending order.
    pub fn children(&self, node: usize) -> &[usize] {
        &self.children[node]
    }

    /// The parent array the tree was built from.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }
}
