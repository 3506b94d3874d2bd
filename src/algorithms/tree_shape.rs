//! Shape analysis over binary trees: depth, balance, symmetry, equality,
//! root-to-leaf path sums.
//!
//! Production implementations are iterative (explicit queue/stack) so that
//! degenerate, very tall trees cannot exhaust the call stack. The one
//! exception is the balance check, whose recursion depth is bounded by the
//! height it is measuring and which short-circuits on the first imbalance.

use std::collections::VecDeque;

use generational_arena::Index;

use crate::domain::TreeArena;

/// Number of nodes on the longest root-to-leaf path. Empty tree: 0.
pub fn max_depth(tree: &TreeArena) -> usize {
    let mut max_depth = 0;
    let mut queue = VecDeque::new();
    if let Some(root) = tree.root() {
        queue.push_back((root, 1));
    }

    while let Some((idx, depth)) = queue.pop_front() {
        if depth > max_depth {
            max_depth = depth;
        }
        if let Some(node) = tree.node(idx) {
            if let Some(left) = node.left {
                queue.push_back((left, depth + 1));
            }
            if let Some(right) = node.right {
                queue.push_back((right, depth + 1));
            }
        }
    }

    max_depth
}

/// Number of nodes on the shortest root-to-leaf path. Empty tree: 0.
///
/// A node with exactly one child is not a leaf: the missing side does not
/// terminate a path, so the answer follows the present child. Breadth-first
/// search returns at the first leaf encountered.
pub fn min_depth(tree: &TreeArena) -> usize {
    let mut queue = VecDeque::new();
    if let Some(root) = tree.root() {
        queue.push_back((root, 1));
    }

    while let Some((idx, depth)) = queue.pop_front() {
        if let Some(node) = tree.node(idx) {
            if node.left.is_none() && node.right.is_none() {
                return depth;
            }
            if let Some(left) = node.left {
                queue.push_back((left, depth + 1));
            }
            if let Some(right) = node.right {
                queue.push_back((right, depth + 1));
            }
        }
    }

    0
}

/// A tree is balanced iff for every node the heights of its subtrees differ
/// by at most 1.
pub fn is_balanced(tree: &TreeArena) -> bool {
    balanced_height(tree, tree.root()).is_some()
}

/// Height of the subtree at `idx`, or None as soon as any imbalance is found.
/// The None return is what stops further descent.
fn balanced_height(tree: &TreeArena, idx: Option<Index>) -> Option<usize> {
    let idx = match idx {
        Some(idx) => idx,
        None => return Some(0),
    };
    let node = tree.node(idx)?;

    let left = balanced_height(tree, node.left)?;
    let right = balanced_height(tree, node.right)?;

    if left.abs_diff(right) > 1 {
        return None;
    }
    Some(1 + left.max(right))
}

/// A tree is symmetric iff its left and right subtrees are mirror images.
/// Empty tree: true.
pub fn is_symmetric(tree: &TreeArena) -> bool {
    let root = match tree.root().and_then(|idx| tree.node(idx)) {
        Some(node) => node,
        None => return true,
    };

    let mut stack = vec![(root.left, root.right)];
    while let Some(pair) = stack.pop() {
        match pair {
            (None, None) => {}
            (Some(a), Some(b)) => {
                let (left, right) = match (tree.node(a), tree.node(b)) {
                    (Some(left), Some(right)) => (left, right),
                    _ => return false,
                };
                if left.value != right.value {
                    return false;
                }
                // Mirror pairing: outer against outer, inner against inner
                stack.push((left.left, right.right));
                stack.push((left.right, right.left));
            }
            _ => return false,
        }
    }

    true
}

/// Structural and value equality of two trees.
pub fn is_same_tree(a: &TreeArena, b: &TreeArena) -> bool {
    let mut stack = vec![(a.root(), b.root())];
    while let Some(pair) = stack.pop() {
        match pair {
            (None, None) => {}
            (Some(ia), Some(ib)) => {
                let (na, nb) = match (a.node(ia), b.node(ib)) {
                    (Some(na), Some(nb)) => (na, nb),
                    _ => return false,
                };
                if na.value != nb.value {
                    return false;
                }
                stack.push((na.left, nb.left));
                stack.push((na.right, nb.right));
            }
            _ => return false,
        }
    }

    true
}

/// True iff some root-to-leaf path sums to `target`. Partial paths do not
/// count; the empty tree has no paths at all.
pub fn has_path_sum(tree: &TreeArena, target: i64) -> bool {
    let mut stack = Vec::new();
    if let Some(root) = tree.root() {
        stack.push((root, 0i64));
    }

    while let Some((idx, sum)) = stack.pop() {
        if let Some(node) = tree.node(idx) {
            let sum = sum + node.value;
            if node.left.is_none() && node.right.is_none() && sum == target {
                return true;
            }
            if let Some(left) = node.left {
                stack.push((left, sum));
            }
            if let Some(right) = node.right {
                stack.push((right, sum));
            }
        }
    }

    false
}
