//! # algokata
//!
//! Classic interview-algorithm katas, implemented once each over two
//! arena-backed data structures (singly linked lists and binary trees) plus
//! plain slices and strings.
//!
//! The `domain` layer holds the data model: nodes live in generational
//! arenas and are addressed by opaque handles, so node identity is handle
//! equality. The `algorithms` layer groups the katas by technique family:
//! tree traversal and shape analysis, BST construction, linked-list
//! pointer work, array two-pointer scans, binary search, string scanning,
//! and small dynamic-programming tables. The `cli` layer runs any kata on
//! literal inputs from the command line.

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{ListArena, TreeArena};
