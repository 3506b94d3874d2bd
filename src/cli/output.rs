//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use serde_json::Value;

use crate::config::{OutputFormat, Settings};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print an algorithm result in the configured format: the plain rendering,
/// or the JSON document describing the operation and its result.
pub fn emit(settings: &Settings, plain: &(impl std::fmt::Display + ?Sized), json: Value) {
    match settings.format {
        OutputFormat::Plain => println!("{}", plain),
        OutputFormat::Json => println!("{}", json),
    }
}
