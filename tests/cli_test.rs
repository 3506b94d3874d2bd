//! Tests for CLI dispatch and error-to-exit-code mapping.

use clap::CommandFactory;
use clap::Parser;

use algokata::cli::args::{ArrayCommands, ListCommands, TextCommands, TreeCommands};
use algokata::cli::commands::execute_command;
use algokata::cli::error::CliError;
use algokata::cli::{Cli, Commands};
use algokata::exitcode;
use algokata::util::testing::init_test_setup;

fn cli(command: Commands) -> Cli {
    Cli {
        verbose: 0,
        format: None,
        command: Some(command),
    }
}

#[test]
fn given_derive_definition_when_asserting_then_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn given_full_command_line_when_parsing_then_accepted() {
    let parsed = Cli::try_parse_from(["algokata", "tree", "preorder", "3,9,20,null,null,15,7"]);
    assert!(parsed.is_ok());

    let parsed = Cli::try_parse_from(["algokata", "--format", "json", "dp", "pascal", "5"]);
    assert!(parsed.is_ok());
}

#[test]
fn given_valid_tree_command_when_executing_then_ok() {
    init_test_setup();

    let cli = cli(Commands::Tree {
        command: TreeCommands::Preorder {
            tree: "1,2,3".into(),
        },
    });

    assert!(execute_command(&cli).is_ok());
}

#[test]
fn given_bad_literal_when_executing_then_data_error() {
    let cli = cli(Commands::Tree {
        command: TreeCommands::Depth {
            tree: "1,x".into(),
        },
    });

    let err = execute_command(&cli).expect_err("literal must be rejected");
    assert!(matches!(err, CliError::Domain(_)));
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_cycle_position_past_end_when_executing_then_data_error() {
    let cli = cli(Commands::List {
        command: ListCommands::Cycle {
            list: "1,2,3".into(),
            pos: Some(5),
        },
    });

    let err = execute_command(&cli).expect_err("position must be rejected");
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_out_of_range_roman_value_when_executing_then_usage_error() {
    let cli = cli(Commands::Text {
        command: TextCommands::IntToRoman { value: 0 },
    });

    let err = execute_command(&cli).expect_err("range must be enforced");
    assert!(matches!(err, CliError::InvalidArgs(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_non_digit_plus_one_input_when_executing_then_usage_error() {
    let cli = cli(Commands::Array {
        command: ArrayCommands::PlusOne {
            digits: "9,12".into(),
        },
    });

    let err = execute_command(&cli).expect_err("digits must be 0..=9");
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_no_subcommand_when_executing_then_noop_ok() {
    let cli = Cli {
        verbose: 0,
        format: None,
        command: None,
    };

    assert!(execute_command(&cli).is_ok());
}
