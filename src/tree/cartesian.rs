//! Cartesian tree construction
//!
//! The Cartesian tree of a sequence has the minimum as root and the
//! Cartesian trees of the parts left and right of it as subtrees. Its
//! in-order traversal is the sequence and its values are min-heap ordered,
//! so the minimum of `data[i..=j]` is the LCA of nodes `i` and `j`.

use super::RootedTree;

/// Build the Cartesian tree of `data` in linear time.
///
/// Scans left to right keeping the rightmost path on a stack. Each new
/// element pops every path node with a strictly greater value; the last one
/// popped becomes its left child, and it hangs below whatever remains on top
/// of the stack. Equal values are not popped, so among equal minima the
/// left-most one ends up as the ancestor.
///
/// `data` must be non-empty.
pub fn cartesian_tree<T: Ord>(data: &[T]) -> RootedTree {
    debug_assert!(!data.is_empty(), "cartesian tree of an empty sequence");

    let mut parents: Vec<Option<usize>> = vec![None; data.len()];
    let mut path: Vec<usize> = Vec::with_capacity(data.len());

    for (i, value) in data.iter().enumerate() {
        let mut popped = None;
        while let Some(&top) = path.last() {
            if data[top] > *value {
                popped = path.pop();
            } else {
                break;
            }
        }
        if let Some(child) = popped {
            parents[child] = Some(i);
        }
        parents[i] = path.last().copied();
        path.push(i);
    }

    let root = path.first().copied().unwrap_or(0);
    RootedTree::from_parts(root, parents)
}
