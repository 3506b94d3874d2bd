//! Height-balanced binary search tree construction from sorted input.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::TreeArena;

/// Builds a height-balanced BST from an ascending slice of unique values.
///
/// The recursion works on index ranges, never sub-slice copies. For
/// even-length ranges the lower middle becomes the root, so several equally
/// balanced trees are possible but the output here is deterministic.
/// In-order traversal of the result reproduces the input exactly.
#[instrument(level = "debug", skip(values))]
pub fn from_sorted(values: &[i64]) -> TreeArena {
    let mut tree = TreeArena::new();
    if values.is_empty() {
        return tree;
    }
    let root = build_range(&mut tree, values, 0, values.len() - 1);
    tree.set_root(root);
    tree
}

/// Builds the subtree for the inclusive range `lo..=hi` and returns its root.
/// Children are built first so the root is inserted fully linked.
fn build_range(tree: &mut TreeArena, values: &[i64], lo: usize, hi: usize) -> Option<Index> {
    if lo > hi {
        return None;
    }

    let mid = lo + (hi - lo) / 2;

    // hi is inclusive, so guard the unsigned edges of both sub-ranges
    let left = if mid > lo {
        build_range(tree, values, lo, mid - 1)
    } else {
        None
    };
    let right = if mid < hi {
        build_range(tree, values, mid + 1, hi)
    } else {
        None
    };

    Some(tree.insert(values[mid], left, right))
}
