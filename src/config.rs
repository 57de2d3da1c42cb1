//! Session configuration
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags.

use crate::storage::DEFAULT_FILE;
use crate::tasks::EditMode;
use crate::validation::DateRule;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the task data file
    pub file: PathBuf,
    /// Rule used to validate due dates
    pub date_rule: DateRule,
    /// Whether a rejected due date also rejects the other edited fields
    pub atomic_edit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            date_rule: DateRule::default(),
            atomic_edit: false,
        }
    }
}

impl Config {
    /// Load a config file, falling back to defaults when it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn edit_mode(&self) -> EditMode {
        if self.atomic_edit {
            EditMode::Atomic
        } else {
            EditMode::Partial
        }
    }
}
