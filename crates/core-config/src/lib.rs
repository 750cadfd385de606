//! Configuration loading and parsing.
//!
//! Parses `vix.toml` (or an explicit override path). Every field is
//! defaulted and unknown fields are ignored, so an absent or partial file
//! is never an error; only an explicitly named file that fails to read or
//! parse is.
//!
//! ```toml
//! [editor]
//! default_file_name = "noname.txt"
//!
//! [undo]
//! branch = "insert-shift"   # or "truncate"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

pub const DEFAULT_CONFIG_NAME: &str = "vix.toml";

fn default_file_name() -> String {
    "noname.txt".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    /// File name used when the session is started without a path argument.
    #[serde(default = "default_file_name")]
    pub default_file_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_file_name: default_file_name(),
        }
    }
}

/// Undo history branching rule; mirrors `core_state::BranchPolicy` without
/// depending on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UndoBranch {
    /// Insert after the current index, keeping the redo tail (historical).
    #[default]
    InsertShift,
    /// Conventional truncate-on-branch.
    Truncate,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct UndoConfig {
    #[serde(default)]
    pub branch: UndoBranch,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub undo: UndoConfig,
}

impl Config {
    pub fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("parse config")
    }
}

/// Load configuration. An explicit `override_path` must exist and parse; a
/// missing discovery-path `vix.toml` silently yields defaults.
pub fn load_from(override_path: Option<&Path>) -> Result<Config> {
    match override_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            let config = Config::parse(&raw)?;
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(config)
        }
        None => match std::fs::read_to_string(DEFAULT_CONFIG_NAME) {
            Ok(raw) => {
                let config = Config::parse(&raw)?;
                info!(target: "config", path = DEFAULT_CONFIG_NAME, "config_loaded");
                Ok(config)
            }
            Err(_) => Ok(Config::default()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        let c = Config::parse("").unwrap();
        assert_eq!(c.editor.default_file_name, "noname.txt");
        assert_eq!(c.undo.branch, UndoBranch::InsertShift);
    }

    #[test]
    fn parses_known_fields() {
        let c = Config::parse(
            r#"
            [editor]
            default_file_name = "scratch.md"

            [undo]
            branch = "truncate"
            "#,
        )
        .unwrap();
        assert_eq!(c.editor.default_file_name, "scratch.md");
        assert_eq!(c.undo.branch, UndoBranch::Truncate);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let c = Config::parse(
            r#"
            [editor]
            future_knob = 3

            [colors]
            theme = "dark"
            "#,
        )
        .unwrap();
        assert_eq!(c.editor.default_file_name, "noname.txt");
    }

    #[test]
    fn bad_branch_value_is_an_error() {
        assert!(Config::parse("[undo]\nbranch = \"sideways\"\n").is_err());
    }
}
