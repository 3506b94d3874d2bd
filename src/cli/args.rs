//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Classic algorithm katas: arena-backed trees and lists, two-pointer, string scanning, and dynamic programming
#[derive(Parser, Debug)]
#[command(name = "algokata")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Binary tree traversal and shape katas
    Tree {
        #[command(subcommand)]
        command: TreeCommands,
    },

    /// Linked-list katas
    List {
        #[command(subcommand)]
        command: ListCommands,
    },

    /// Array two-pointer and binary-search katas
    Array {
        #[command(subcommand)]
        command: ArrayCommands,
    },

    /// String scanning and conversion katas
    Text {
        #[command(subcommand)]
        command: TextCommands,
    },

    /// Dynamic-programming katas
    Dp {
        #[command(subcommand)]
        command: DpCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Tree katas. Trees are given as level-order literals with `null` holes,
/// e.g. `3,9,20,null,null,15,7`.
#[derive(Subcommand, Debug)]
pub enum TreeCommands {
    /// Root-left-right traversal
    Preorder { tree: String },

    /// Left-root-right traversal
    Inorder { tree: String },

    /// Left-right-root traversal
    Postorder { tree: String },

    /// Strict level-by-level traversal
    Levels { tree: String },

    /// Node count of the longest root-to-leaf path
    Depth { tree: String },

    /// Node count of the shortest root-to-leaf path
    MinDepth { tree: String },

    /// Height-balance check
    Balanced { tree: String },

    /// Mirror-symmetry check
    Symmetric { tree: String },

    /// Structural and value equality of two trees
    Same { a: String, b: String },

    /// Root-to-leaf path-sum existence
    PathSum { tree: String, target: i64 },

    /// Build a height-balanced BST from ascending values
    FromSorted { values: String },
}

/// List katas. Lists are given as `1 -> 2 -> 3` (or comma) literals.
#[derive(Subcommand, Debug)]
pub enum ListCommands {
    /// Merge two sorted lists
    Merge { a: String, b: String },

    /// Collapse consecutive duplicates of a sorted list
    Dedup { list: String },

    /// Floyd cycle check; --pos links the tail back to that 0-based node
    Cycle {
        list: String,
        #[arg(long)]
        pos: Option<usize>,
    },

    /// First shared node of two lists joined onto --tail
    Intersect {
        a: String,
        b: String,
        #[arg(long)]
        tail: Option<String>,
    },
}

/// Array katas. Arrays are comma-separated integers.
#[derive(Subcommand, Debug)]
pub enum ArrayCommands {
    /// Best single-transaction profit
    MaxProfit { prices: String },

    /// Container with most water
    MaxArea { heights: String },

    /// In-place dedup of a sorted array; prints the kept prefix
    RemoveDuplicates { values: String },

    /// In-place removal of a value; prints the kept prefix
    RemoveElement { values: String, target: i64 },

    /// Merge two sorted arrays (back-to-front, in place)
    MergeSorted { a: String, b: String },

    /// First index with value >= target in a sorted array
    SearchInsert { values: String, target: i64 },

    /// Floor square root
    Isqrt { x: u64 },

    /// Indices of the two values summing to target
    TwoSum { values: String, target: i64 },

    /// The value appearing once when all others appear twice
    SingleNumber { values: String },

    /// Increment a digit vector, e.g. `9,9,9`
    PlusOne { digits: String },
}

#[derive(Subcommand, Debug)]
pub enum TextCommands {
    /// Alphanumeric palindrome check
    Palindrome { text: String },

    /// Length of the longest substring without repeats
    LongestUnique { text: String },

    /// Longest palindromic substring
    LongestPalindrome { text: String },

    /// Longest prefix common to all given strings
    CommonPrefix {
        #[arg(num_args = 1..)]
        strings: Vec<String>,
    },

    /// Bracket validity over ()[]{}
    Brackets { text: String },

    /// Length of the last word
    LastWord { text: String },

    /// Index of the first occurrence of a needle
    Find { haystack: String, needle: String },

    /// Parse a roman numeral
    RomanToInt { numeral: String },

    /// Render 1..=3999 as a roman numeral
    IntToRoman { value: u32 },

    /// Add two binary strings
    AddBinary { a: String, b: String },

    /// Excel column title for a 1-indexed column
    ColumnTitle { column: u32 },

    /// Decimal palindrome check without string conversion
    PalindromeNumber { value: i64 },
}

#[derive(Subcommand, Debug)]
pub enum DpCommands {
    /// First rows of Pascal's triangle
    Pascal { rows: usize },

    /// Single row of Pascal's triangle, O(k) space
    PascalRow { index: usize },

    /// Ways to climb n steps taking 1 or 2 at a time
    ClimbStairs { steps: u32 },
}
