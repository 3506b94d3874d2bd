//! Linked-list algorithms: cycle detection, intersection, merge, dedup.
//!
//! All node comparisons here are handle comparisons; two nodes are "the same"
//! iff their arena handles are equal, regardless of payload values.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::ListArena;

/// Floyd cycle detection: two pointers advancing at rates 1 and 2.
///
/// O(n) time, O(1) extra space. A cycle exists iff the fast pointer catches
/// the slow one; reaching the end of the chain proves the list acyclic.
pub fn has_cycle(list: &ListArena, head: Option<Index>) -> bool {
    let mut slow = head;
    let mut fast = head;

    loop {
        let step = match fast {
            Some(idx) => list.next(idx),
            None => return false,
        };
        fast = match step {
            Some(idx) => list.next(idx),
            None => return false,
        };
        slow = match slow {
            Some(idx) => list.next(idx),
            None => return false,
        };
        if slow == fast {
            return true;
        }
    }
}

/// First node shared by both lists, or None.
///
/// Each pointer advances one step at a time and wraps to the *other* list's
/// head exactly once upon reaching its own end. After at most lenA + lenB
/// steps the pointers are equal: at the intersection node, or both at the
/// terminal None when the lists are disjoint.
pub fn intersection(
    list: &ListArena,
    head_a: Option<Index>,
    head_b: Option<Index>,
) -> Option<Index> {
    let mut a = head_a;
    let mut b = head_b;

    while a != b {
        a = match a {
            Some(idx) => list.next(idx),
            None => head_b,
        };
        b = match b {
            Some(idx) => list.next(idx),
            None => head_a,
        };
    }

    a
}

/// Two-way merge of two sorted lists by relinking their existing nodes.
///
/// A sentinel head unifies the empty-prefix case; it is allocated from the
/// arena and returned to it before the merged head is handed back. Ties take
/// the left list's node first, which keeps the merge stable.
#[instrument(level = "debug", skip(list))]
pub fn merge_sorted(
    list: &mut ListArena,
    mut a: Option<Index>,
    mut b: Option<Index>,
) -> DomainResult<Option<Index>> {
    let sentinel = list.alloc(0);
    let mut tail = sentinel;

    while let (Some(ia), Some(ib)) = (a, b) {
        let va = list.value(ia).ok_or(DomainError::NodeNotFound(ia))?;
        let vb = list.value(ib).ok_or(DomainError::NodeNotFound(ib))?;

        if va <= vb {
            list.set_next(tail, Some(ia))?;
            tail = ia;
            a = list.next(ia);
        } else {
            list.set_next(tail, Some(ib))?;
            tail = ib;
            b = list.next(ib);
        }
    }
    list.set_next(tail, a.or(b))?;

    let head = list.next(sentinel);
    list.remove(sentinel);
    Ok(head)
}

/// Collapses consecutive equal values of a sorted list to a single node.
///
/// One forward pass splicing out duplicate successors; the first occurrence
/// keeps its node identity and the relative order is untouched. Spliced-out
/// nodes are returned to the arena.
#[instrument(level = "debug", skip(list))]
pub fn dedup_sorted(list: &mut ListArena, head: Option<Index>) -> DomainResult<()> {
    let mut current = head;

    while let Some(idx) = current {
        let value = list.value(idx).ok_or(DomainError::NodeNotFound(idx))?;
        let next = list.next(idx);

        match next {
            Some(dup) if list.value(dup) == Some(value) => {
                let rest = list.next(dup);
                list.set_next(idx, rest)?;
                list.remove(dup);
            }
            _ => current = next,
        }
    }

    Ok(())
}
