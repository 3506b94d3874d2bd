//! Command dispatch: one thin handler per kata family.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use generational_arena::Index;
use itertools::Itertools;
use serde_json::json;
use tracing::{debug, instrument};

use crate::algorithms::{
    bst, digits, dp, list_ops, roman, search, strings, tree_shape, two_pointer,
};
use crate::cli::args::{
    ArrayCommands, Cli, Commands, DpCommands, ListCommands, TextCommands, TreeCommands,
};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::list::parse_values;
use crate::domain::{DomainError, ListArena, TreeArena};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load()?;
    if let Some(format) = cli.format {
        settings.format = format;
    }
    settings.apply_color();
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Tree { command }) => tree_command(&settings, command),
        Some(Commands::List { command }) => list_command(&settings, command),
        Some(Commands::Array { command }) => array_command(&settings, command),
        Some(Commands::Text { command }) => text_command(&settings, command),
        Some(Commands::Dp { command }) => dp_command(&settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "algokata", &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

fn join<T: std::fmt::Display>(values: &[T]) -> String {
    values.iter().join(",")
}

#[instrument(level = "debug", skip(settings))]
fn tree_command(settings: &Settings, command: &TreeCommands) -> CliResult<()> {
    match command {
        TreeCommands::Preorder { tree } => {
            let tree = TreeArena::from_literal(tree)?;
            let values = tree.preorder_values();
            output::emit(
                settings,
                &join(&values),
                json!({"op": "preorder", "values": values}),
            );
        }
        TreeCommands::Inorder { tree } => {
            let tree = TreeArena::from_literal(tree)?;
            let values = tree.inorder_values();
            output::emit(
                settings,
                &join(&values),
                json!({"op": "inorder", "values": values}),
            );
        }
        TreeCommands::Postorder { tree } => {
            let tree = TreeArena::from_literal(tree)?;
            let values = tree.postorder_values();
            output::emit(
                settings,
                &join(&values),
                json!({"op": "postorder", "values": values}),
            );
        }
        TreeCommands::Levels { tree } => {
            let tree = TreeArena::from_literal(tree)?;
            let values = tree.level_order_values();
            output::emit(
                settings,
                &join(&values),
                json!({"op": "levels", "values": values}),
            );
        }
        TreeCommands::Depth { tree } => {
            let tree = TreeArena::from_literal(tree)?;
            let depth = tree_shape::max_depth(&tree);
            output::emit(settings, &depth, json!({"op": "depth", "depth": depth}));
        }
        TreeCommands::MinDepth { tree } => {
            let tree = TreeArena::from_literal(tree)?;
            let depth = tree_shape::min_depth(&tree);
            output::emit(settings, &depth, json!({"op": "min-depth", "depth": depth}));
        }
        TreeCommands::Balanced { tree } => {
            let tree = TreeArena::from_literal(tree)?;
            let balanced = tree_shape::is_balanced(&tree);
            output::emit(
                settings,
                &balanced,
                json!({"op": "balanced", "result": balanced}),
            );
        }
        TreeCommands::Symmetric { tree } => {
            let tree = TreeArena::from_literal(tree)?;
            let symmetric = tree_shape::is_symmetric(&tree);
            output::emit(
                settings,
                &symmetric,
                json!({"op": "symmetric", "result": symmetric}),
            );
        }
        TreeCommands::Same { a, b } => {
            let a = TreeArena::from_literal(a)?;
            let b = TreeArena::from_literal(b)?;
            let same = tree_shape::is_same_tree(&a, &b);
            output::emit(settings, &same, json!({"op": "same", "result": same}));
        }
        TreeCommands::PathSum { tree, target } => {
            let tree = TreeArena::from_literal(tree)?;
            let found = tree_shape::has_path_sum(&tree, *target);
            output::emit(
                settings,
                &found,
                json!({"op": "path-sum", "target": target, "result": found}),
            );
        }
        TreeCommands::FromSorted { values } => {
            let values = parse_values(values)?;
            let tree = bst::from_sorted(&values);
            let literal = tree.to_literal();
            output::emit(
                settings,
                &literal,
                json!({"op": "from-sorted", "tree": literal, "inorder": tree.inorder_values()}),
            );
        }
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn list_command(settings: &Settings, command: &ListCommands) -> CliResult<()> {
    match command {
        ListCommands::Merge { a, b } => {
            let mut arena = ListArena::new();
            let a = arena.from_literal(a)?;
            let b = arena.from_literal(b)?;
            let merged = list_ops::merge_sorted(&mut arena, a, b)?;
            let values = arena.values(merged);
            output::emit(
                settings,
                &join(&values),
                json!({"op": "merge", "values": values}),
            );
        }
        ListCommands::Dedup { list } => {
            let mut arena = ListArena::new();
            let head = arena.from_literal(list)?;
            list_ops::dedup_sorted(&mut arena, head)?;
            let values = arena.values(head);
            output::emit(
                settings,
                &join(&values),
                json!({"op": "dedup", "values": values}),
            );
        }
        ListCommands::Cycle { list, pos } => {
            let mut arena = ListArena::new();
            let head = arena.from_literal(list)?;
            if let Some(pos) = pos {
                link_tail_to(&mut arena, head, *pos)?;
            }
            let cyclic = list_ops::has_cycle(&arena, head);
            output::emit(settings, &cyclic, json!({"op": "cycle", "result": cyclic}));
        }
        ListCommands::Intersect { a, b, tail } => {
            let mut arena = ListArena::new();
            let shared = match tail {
                Some(tail) => arena.from_literal(tail)?,
                None => None,
            };
            let a = chain_onto(&mut arena, a, shared)?;
            let b = chain_onto(&mut arena, b, shared)?;
            let value = list_ops::intersection(&arena, a, b).and_then(|idx| arena.value(idx));
            let plain = match value {
                Some(value) => format!("intersect at {value}"),
                None => "none".to_string(),
            };
            output::emit(settings, &plain, json!({"op": "intersect", "value": value}));
        }
    }
    Ok(())
}

/// Links the list's tail back to its `pos`-th node, creating a cycle.
fn link_tail_to(arena: &mut ListArena, head: Option<Index>, pos: usize) -> CliResult<()> {
    let len = arena.len(head);
    if pos >= len {
        return Err(DomainError::PositionOutOfBounds { position: pos, len }.into());
    }
    if let (Some(tail), Some(target)) = (arena.nth(head, len - 1), arena.nth(head, pos)) {
        arena.set_next(tail, Some(target))?;
    }
    Ok(())
}

/// Builds a list from `literal` whose last node continues into `tail`.
fn chain_onto(
    arena: &mut ListArena,
    literal: &str,
    tail: Option<Index>,
) -> CliResult<Option<Index>> {
    let head = arena.from_literal(literal)?;
    match head {
        Some(first) => {
            let len = arena.len(Some(first));
            if let Some(last) = arena.nth(Some(first), len - 1) {
                arena.set_next(last, tail)?;
            }
            Ok(Some(first))
        }
        None => Ok(tail),
    }
}

#[instrument(level = "debug", skip(settings))]
fn array_command(settings: &Settings, command: &ArrayCommands) -> CliResult<()> {
    match command {
        ArrayCommands::MaxProfit { prices } => {
            let prices = parse_values(prices)?;
            let profit = two_pointer::max_profit(&prices);
            output::emit(
                settings,
                &profit,
                json!({"op": "max-profit", "profit": profit}),
            );
        }
        ArrayCommands::MaxArea { heights } => {
            let heights = parse_values(heights)?;
            let area = two_pointer::max_area(&heights);
            output::emit(settings, &area, json!({"op": "max-area", "area": area}));
        }
        ArrayCommands::RemoveDuplicates { values } => {
            let mut values = parse_values(values)?;
            let kept = two_pointer::remove_duplicates(&mut values);
            values.truncate(kept);
            output::emit(
                settings,
                &join(&values),
                json!({"op": "remove-duplicates", "count": kept, "values": values}),
            );
        }
        ArrayCommands::RemoveElement { values, target } => {
            let mut values = parse_values(values)?;
            let kept = two_pointer::remove_element(&mut values, *target);
            values.truncate(kept);
            output::emit(
                settings,
                &join(&values),
                json!({"op": "remove-element", "count": kept, "values": values}),
            );
        }
        ArrayCommands::MergeSorted { a, b } => {
            let a = parse_values(a)?;
            let b = parse_values(b)?;
            let len_a = a.len();
            let mut merged = a;
            merged.resize(len_a + b.len(), 0);
            two_pointer::merge_in_place(&mut merged, len_a, &b);
            output::emit(
                settings,
                &join(&merged),
                json!({"op": "merge-sorted", "values": merged}),
            );
        }
        ArrayCommands::SearchInsert { values, target } => {
            let values = parse_values(values)?;
            let index = search::search_insert(&values, *target);
            output::emit(
                settings,
                &index,
                json!({"op": "search-insert", "index": index}),
            );
        }
        ArrayCommands::Isqrt { x } => {
            let root = search::isqrt(*x);
            output::emit(settings, &root, json!({"op": "isqrt", "root": root}));
        }
        ArrayCommands::TwoSum { values, target } => {
            let values = parse_values(values)?;
            let pair = digits::two_sum(&values, *target);
            let plain = match pair {
                Some((i, j)) => format!("{i},{j}"),
                None => "none".to_string(),
            };
            output::emit(settings, &plain, json!({"op": "two-sum", "indices": pair}));
        }
        ArrayCommands::SingleNumber { values } => {
            let values = parse_values(values)?;
            let single = digits::single_number(&values);
            output::emit(
                settings,
                &single,
                json!({"op": "single-number", "value": single}),
            );
        }
        ArrayCommands::PlusOne { digits: literal } => {
            let parsed = parse_digits(literal)?;
            let incremented = digits::plus_one(&parsed);
            output::emit(
                settings,
                &join(&incremented),
                json!({"op": "plus-one", "digits": incremented}),
            );
        }
    }
    Ok(())
}

/// Parses a comma literal into decimal digits 0..=9.
fn parse_digits(literal: &str) -> CliResult<Vec<u8>> {
    parse_values(literal)?
        .into_iter()
        .map(|value| {
            u8::try_from(value)
                .ok()
                .filter(|digit| *digit <= 9)
                .ok_or_else(|| CliError::InvalidArgs(format!("not a decimal digit: {value}")))
        })
        .collect()
}

#[instrument(level = "debug", skip(settings))]
fn text_command(settings: &Settings, command: &TextCommands) -> CliResult<()> {
    match command {
        TextCommands::Palindrome { text } => {
            let result = strings::is_palindrome(text);
            output::emit(
                settings,
                &result,
                json!({"op": "palindrome", "result": result}),
            );
        }
        TextCommands::LongestUnique { text } => {
            let length = strings::longest_unique_substring(text);
            output::emit(
                settings,
                &length,
                json!({"op": "longest-unique", "length": length}),
            );
        }
        TextCommands::LongestPalindrome { text } => {
            let longest = strings::longest_palindrome(text);
            output::emit(
                settings,
                &longest,
                json!({"op": "longest-palindrome", "substring": longest}),
            );
        }
        TextCommands::CommonPrefix { strings: inputs } => {
            let refs: Vec<&str> = inputs.iter().map(String::as_str).collect();
            let prefix = strings::longest_common_prefix(&refs);
            output::emit(
                settings,
                &prefix,
                json!({"op": "common-prefix", "prefix": prefix}),
            );
        }
        TextCommands::Brackets { text } => {
            let valid = strings::is_valid_brackets(text);
            output::emit(settings, &valid, json!({"op": "brackets", "result": valid}));
        }
        TextCommands::LastWord { text } => {
            let length = strings::length_of_last_word(text);
            output::emit(
                settings,
                &length,
                json!({"op": "last-word", "length": length}),
            );
        }
        TextCommands::Find { haystack, needle } => {
            let index = strings::find_substring(haystack, needle);
            let plain = match index {
                Some(index) => index.to_string(),
                None => "none".to_string(),
            };
            output::emit(settings, &plain, json!({"op": "find", "index": index}));
        }
        TextCommands::RomanToInt { numeral } => {
            let value = roman::roman_to_int(numeral)?;
            output::emit(
                settings,
                &value,
                json!({"op": "roman-to-int", "value": value}),
            );
        }
        TextCommands::IntToRoman { value } => {
            if !(1..=3999).contains(value) {
                return Err(CliError::InvalidArgs(format!(
                    "value out of range 1..=3999: {value}"
                )));
            }
            let numeral = roman::int_to_roman(*value);
            output::emit(
                settings,
                &numeral,
                json!({"op": "int-to-roman", "numeral": numeral}),
            );
        }
        TextCommands::AddBinary { a, b } => {
            if let Some(bad) = format!("{a}{b}").chars().find(|c| *c != '0' && *c != '1') {
                return Err(CliError::InvalidArgs(format!("not a binary digit: {bad}")));
            }
            let sum = digits::add_binary(a, b);
            output::emit(settings, &sum, json!({"op": "add-binary", "sum": sum}));
        }
        TextCommands::ColumnTitle { column } => {
            let title = digits::column_title(*column);
            output::emit(
                settings,
                &title,
                json!({"op": "column-title", "title": title}),
            );
        }
        TextCommands::PalindromeNumber { value } => {
            let result = digits::is_palindrome_number(*value);
            output::emit(
                settings,
                &result,
                json!({"op": "palindrome-number", "result": result}),
            );
        }
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn dp_command(settings: &Settings, command: &DpCommands) -> CliResult<()> {
    match command {
        DpCommands::Pascal { rows } => {
            let triangle = dp::pascal_triangle(*rows);
            let plain = triangle.iter().map(|row| join(row)).join("\n");
            output::emit(settings, &plain, json!({"op": "pascal", "rows": triangle}));
        }
        DpCommands::PascalRow { index } => {
            let row = dp::pascal_row(*index);
            output::emit(
                settings,
                &join(&row),
                json!({"op": "pascal-row", "row": row}),
            );
        }
        DpCommands::ClimbStairs { steps } => {
            let ways = dp::climb_stairs(*steps);
            output::emit(
                settings,
                &ways,
                json!({"op": "climb-stairs", "ways": ways}),
            );
        }
    }
    Ok(())
}
