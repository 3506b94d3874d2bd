//! Arena-based singly linked lists.
//!
//! A list is identified by an optional head handle into a [`ListArena`]. Several
//! lists may live in the same arena, which is how shared-tail fixtures for
//! intersection problems are built. Cyclic lists are built by relinking a tail
//! node back to an earlier handle via [`ListArena::set_next`].

use generational_arena::{Arena, Index};
use regex::Regex;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

/// Node of a singly linked list.
#[derive(Debug, Clone)]
pub struct ListNode {
    /// Payload value
    pub value: i64,
    /// Handle of the successor node, None at the end of an acyclic list
    pub next: Option<Index>,
}

/// Arena storage for linked-list nodes.
///
/// Uses a generational arena for memory-safe node references and O(1) lookups.
/// Handles are opaque; node identity is handle equality.
#[derive(Debug, Default)]
pub struct ListArena {
    nodes: Arena<ListNode>,
}

impl ListArena {
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
        }
    }

    /// Number of live nodes in the arena (across all lists).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocates a detached node and returns its handle.
    pub fn alloc(&mut self, value: i64) -> Index {
        self.nodes.insert(ListNode { value, next: None })
    }

    pub fn node(&self, idx: Index) -> Option<&ListNode> {
        self.nodes.get(idx)
    }

    /// Successor handle of `idx`, or None at the end of the list.
    pub fn next(&self, idx: Index) -> Option<Index> {
        self.nodes.get(idx).and_then(|node| node.next)
    }

    pub fn value(&self, idx: Index) -> Option<i64> {
        self.nodes.get(idx).map(|node| node.value)
    }

    /// Relinks `idx` to point at `next`. Linking back to an earlier node
    /// deliberately creates a cycle (cycle-detection fixtures).
    pub fn set_next(&mut self, idx: Index, next: Option<Index>) -> DomainResult<()> {
        let node = self
            .nodes
            .get_mut(idx)
            .ok_or(DomainError::NodeNotFound(idx))?;
        node.next = next;
        Ok(())
    }

    /// Returns a spliced-out node to the arena. Its handle becomes stale.
    pub fn remove(&mut self, idx: Index) -> Option<ListNode> {
        self.nodes.remove(idx)
    }

    /// Builds an acyclic list from `values` and returns its head handle,
    /// or None for an empty slice.
    #[instrument(level = "debug", skip(self))]
    pub fn chain(&mut self, values: &[i64]) -> Option<Index> {
        let mut head = None;
        let mut tail: Option<Index> = None;

        for &value in values {
            let idx = self.alloc(value);
            match tail {
                Some(prev) => {
                    if let Some(node) = self.nodes.get_mut(prev) {
                        node.next = Some(idx);
                    }
                }
                None => head = Some(idx),
            }
            tail = Some(idx);
        }

        head
    }

    /// Parses a list literal like `1 -> 2 -> 3` (or `1,2,3`) into a new list.
    ///
    /// An empty or all-whitespace literal is the empty list.
    #[instrument(level = "debug", skip(self))]
    pub fn from_literal(&mut self, literal: &str) -> DomainResult<Option<Index>> {
        let values = parse_values(literal)?;
        Ok(self.chain(&values))
    }

    /// Handle of the `n`-th node (0-based) of the list starting at `head`.
    pub fn nth(&self, head: Option<Index>, n: usize) -> Option<Index> {
        let mut current = head;
        for _ in 0..n {
            current = current.and_then(|idx| self.next(idx));
        }
        current
    }

    /// Number of nodes in the acyclic list starting at `head`.
    pub fn len(&self, head: Option<Index>) -> usize {
        self.iter(head).count()
    }

    /// Values of the acyclic list starting at `head`, front to back.
    pub fn values(&self, head: Option<Index>) -> Vec<i64> {
        self.iter(head).map(|(_, node)| node.value).collect()
    }

    /// Iterates the list starting at `head`. The input list must be acyclic;
    /// iterating a cyclic list never terminates.
    pub fn iter(&self, head: Option<Index>) -> ListIter<'_> {
        ListIter {
            arena: self,
            current: head,
        }
    }
}

pub struct ListIter<'a> {
    arena: &'a ListArena,
    current: Option<Index>,
}

impl<'a> Iterator for ListIter<'a> {
    type Item = (Index, &'a ListNode);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let node = self.arena.node(idx)?;
        self.current = node.next;
        Some((idx, node))
    }
}

/// Splits a literal on `->` or `,` separators and parses the integer tokens.
pub(crate) fn parse_values(literal: &str) -> DomainResult<Vec<i64>> {
    let separator = Regex::new(r"\s*(?:->|,)\s*").unwrap();
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    separator
        .split(trimmed)
        .map(|token| {
            token.parse::<i64>().map_err(|_| DomainError::InvalidToken {
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_links_values_in_order() {
        let mut arena = ListArena::new();
        let head = arena.chain(&[1, 2, 3]);
        assert_eq!(arena.values(head), vec![1, 2, 3]);
        assert_eq!(arena.len(head), 3);
    }

    #[test]
    fn test_from_literal_accepts_arrow_and_comma() {
        let mut arena = ListArena::new();
        let a = arena.from_literal("1 -> 2 -> 3").unwrap();
        let b = arena.from_literal("1,2,3").unwrap();
        assert_eq!(arena.values(a), arena.values(b));
    }

    #[test]
    fn test_from_literal_empty_is_empty_list() {
        let mut arena = ListArena::new();
        let head = arena.from_literal("  ").unwrap();
        assert!(head.is_none());
    }

    #[test]
    fn test_from_literal_rejects_bad_token() {
        let mut arena = ListArena::new();
        let result = arena.from_literal("1 -> x -> 3");
        assert!(matches!(result, Err(DomainError::InvalidToken { .. })));
    }

    #[test]
    fn test_set_next_creates_cycle() {
        let mut arena = ListArena::new();
        let head = arena.chain(&[1, 2, 3]);
        let tail = arena.nth(head, 2).unwrap();
        let target = arena.nth(head, 1).unwrap();
        arena.set_next(tail, Some(target)).unwrap();
        assert_eq!(arena.next(tail), Some(target));
    }
}
