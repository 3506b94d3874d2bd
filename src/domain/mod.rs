//! Domain layer: arena-backed data structures and their contracts
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).
//! Nodes are arena entries addressed by opaque handles; identity comparisons
//! (cycle detection, intersection) compare handles, never payload values.

pub mod error;
pub mod list;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use list::{ListArena, ListNode};
pub use tree::{TreeArena, TreeNode};
