//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/algokata/algokata.toml`
//! 3. Environment variables: `ALGOKATA_*` prefix

use std::path::PathBuf;

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("config error: {message}")]
pub struct SettingsError {
    pub message: String,
}

/// How algorithm results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

/// When to colorize terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Result rendering on stdout
    pub format: OutputFormat,
    /// Color handling for status output
    pub color: ColorMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            color: ColorMode::Auto,
        }
    }
}

pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "algokata").map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("algokata.toml"))
}

impl Settings {
    /// Loads settings: defaults, then the global file, then env overrides.
    pub fn load() -> Result<Self, SettingsError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let content =
                    std::fs::read_to_string(&global_path).map_err(|e| SettingsError {
                        message: format!("read {}: {}", global_path.display(), e),
                    })?;
                current = toml::from_str(&content).map_err(|e| SettingsError {
                    message: format!("parse {}: {}", global_path.display(), e),
                })?;
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Applies ALGOKATA_* environment variables as explicit overrides.
    ///
    /// Env vars replace values (not merge) - they are explicit user overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, SettingsError> {
        let builder = Config::builder().add_source(Environment::with_prefix("ALGOKATA"));
        let config = builder.build().map_err(|e| SettingsError {
            message: e.to_string(),
        })?;

        if let Ok(val) = config.get_string("format") {
            settings.format = parse_variant(
                &val,
                &[("plain", OutputFormat::Plain), ("json", OutputFormat::Json)],
            )?;
        }
        if let Ok(val) = config.get_string("color") {
            settings.color = parse_variant(
                &val,
                &[
                    ("auto", ColorMode::Auto),
                    ("always", ColorMode::Always),
                    ("never", ColorMode::Never),
                ],
            )?;
        }

        Ok(settings)
    }

    /// Applies the configured color policy to the global colored state.
    pub fn apply_color(&self) {
        match self.color {
            ColorMode::Auto => {}
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

fn parse_variant<T: Copy>(value: &str, table: &[(&str, T)]) -> Result<T, SettingsError> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|&(_, variant)| variant)
        .ok_or_else(|| SettingsError {
            message: format!("unknown value: {value}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.format, OutputFormat::Plain);
        assert_eq!(settings.color, ColorMode::Auto);
    }

    #[test]
    fn given_toml_content_when_parsing_then_overrides_defaults() {
        let settings: Settings = toml::from_str("format = \"json\"\ncolor = \"never\"").unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.color, ColorMode::Never);
    }

    #[test]
    fn given_partial_toml_when_parsing_then_keeps_remaining_defaults() {
        let settings: Settings = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.color, ColorMode::Auto);
    }

    #[test]
    fn given_unknown_variant_when_parsing_env_value_then_errors() {
        let result = parse_variant("sometimes", &[("auto", ColorMode::Auto)]);
        assert!(result.is_err());
    }
}
