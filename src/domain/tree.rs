//! Arena-based binary trees with iterative traversal iterators.
//!
//! Trees are built either from level-order literals (`"3,9,20,null,null,15,7"`,
//! the fixture notation of the problem statements) or programmatically by
//! builder algorithms. All four traversals are explicit stack/queue
//! implementations; the recursive forms exist only as test oracles.

use std::collections::VecDeque;

use generational_arena::{Arena, Index};
use regex::Regex;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

/// Node of a binary tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Payload value
    pub value: i64,
    /// Handle of the left child, if any
    pub left: Option<Index>,
    /// Handle of the right child, if any
    pub right: Option<Index>,
}

/// Arena storage for one binary tree.
///
/// Uses a generational arena for memory-safe node references and O(1) lookups.
/// Every node except the root is referenced by exactly one parent; trees are
/// never cyclic.
#[derive(Debug, Default)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Allocates a detached leaf node and returns its handle.
    pub fn alloc(&mut self, value: i64) -> Index {
        self.insert(value, None, None)
    }

    /// Allocates a node with the given children already attached.
    pub fn insert(&mut self, value: i64, left: Option<Index>, right: Option<Index>) -> Index {
        self.arena.insert(TreeNode { value, left, right })
    }

    pub fn node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn set_root(&mut self, root: Option<Index>) {
        self.root = root;
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Builds a tree from a level-order sequence with `None` holes.
    ///
    /// Children tokens are consumed only for present parents, matching the
    /// fixture notation of the problem statements. A leading `None` (or an
    /// empty slice) yields the empty tree.
    #[instrument(level = "debug", skip(values))]
    pub fn from_level_order(values: &[Option<i64>]) -> Self {
        let mut tree = Self::new();
        let mut tokens = values.iter().copied();

        let root_value = match tokens.next() {
            Some(Some(value)) => value,
            _ => return tree,
        };
        let root = tree.alloc(root_value);
        tree.root = Some(root);

        let mut queue = VecDeque::from([root]);
        while let Some(parent) = queue.pop_front() {
            for side in [Side::Left, Side::Right] {
                match tokens.next() {
                    Some(Some(value)) => {
                        let child = tree.alloc(value);
                        if let Some(node) = tree.arena.get_mut(parent) {
                            match side {
                                Side::Left => node.left = Some(child),
                                Side::Right => node.right = Some(child),
                            }
                        }
                        queue.push_back(child);
                    }
                    Some(None) => {}
                    None => return tree,
                }
            }
        }

        tree
    }

    /// Parses a level-order literal like `3,9,20,null,null,15,7`.
    #[instrument(level = "debug")]
    pub fn from_literal(literal: &str) -> DomainResult<Self> {
        let separator = Regex::new(r"\s*,\s*").unwrap();
        let trimmed = literal.trim();
        if trimmed.is_empty() {
            return Ok(Self::new());
        }

        let tokens = separator
            .split(trimmed)
            .map(|token| match token {
                "null" => Ok(None),
                _ => token
                    .parse::<i64>()
                    .map(Some)
                    .map_err(|_| DomainError::InvalidToken {
                        token: token.to_string(),
                    }),
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self::from_level_order(&tokens))
    }

    /// Renders the tree back into its level-order literal, trailing holes trimmed.
    pub fn to_literal(&self) -> String {
        let mut tokens: Vec<String> = Vec::new();
        let mut queue: VecDeque<Option<Index>> = VecDeque::new();
        queue.push_back(self.root);

        while let Some(slot) = queue.pop_front() {
            match slot.and_then(|idx| self.node(idx)) {
                Some(node) => {
                    tokens.push(node.value.to_string());
                    queue.push_back(node.left);
                    queue.push_back(node.right);
                }
                None => tokens.push("null".to_string()),
            }
        }

        while tokens.last().map(String::as_str) == Some("null") {
            tokens.pop();
        }
        tokens.join(",")
    }

    /// Root-left-right traversal (explicit stack; right child pushed first so
    /// the left subtree is processed first when popped).
    pub fn preorder(&self) -> PreorderIter<'_> {
        PreorderIter {
            arena: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Left-root-right traversal (explicit stack plus descend cursor).
    pub fn inorder(&self) -> InorderIter<'_> {
        InorderIter {
            arena: self,
            stack: Vec::new(),
            current: self.root,
        }
    }

    /// Left-right-root traversal (explicit stack of visited-flagged handles).
    pub fn postorder(&self) -> PostorderIter<'_> {
        PostorderIter {
            arena: self,
            stack: self.root.map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Strict level-by-level traversal (queue).
    pub fn level_order(&self) -> LevelOrderIter<'_> {
        LevelOrderIter {
            arena: self,
            queue: self.root.into_iter().collect(),
        }
    }

    pub fn preorder_values(&self) -> Vec<i64> {
        self.preorder().map(|(_, node)| node.value).collect()
    }

    pub fn inorder_values(&self) -> Vec<i64> {
        self.inorder().map(|(_, node)| node.value).collect()
    }

    pub fn postorder_values(&self) -> Vec<i64> {
        self.postorder().map(|(_, node)| node.value).collect()
    }

    pub fn level_order_values(&self) -> Vec<i64> {
        self.level_order().map(|(_, node)| node.value).collect()
    }
}

enum Side {
    Left,
    Right,
}

pub struct PreorderIter<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.arena.node(idx)?;
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(left) = node.left {
            self.stack.push(left);
        }
        Some((idx, node))
    }
}

pub struct InorderIter<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
    current: Option<Index>,
}

impl<'a> Iterator for InorderIter<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.current {
            self.stack.push(idx);
            self.current = self.arena.node(idx).and_then(|node| node.left);
        }
        let idx = self.stack.pop()?;
        let node = self.arena.node(idx)?;
        self.current = node.right;
        Some((idx, node))
    }
}

pub struct PostorderIter<'a> {
    arena: &'a TreeArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> Iterator for PostorderIter<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, visited)) = self.stack.pop() {
            let node = self.arena.node(idx)?;
            if visited {
                return Some((idx, node));
            }
            self.stack.push((idx, true));
            if let Some(right) = node.right {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left {
                self.stack.push((left, false));
            }
        }
        None
    }
}

pub struct LevelOrderIter<'a> {
    arena: &'a TreeArena,
    queue: VecDeque<Index>,
}

impl<'a> Iterator for LevelOrderIter<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.queue.pop_front()?;
        let node = self.arena.node(idx)?;
        if let Some(left) = node.left {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right {
            self.queue.push_back(right);
        }
        Some((idx, node))
    }
}
