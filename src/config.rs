//! # Configuration Persistence
//!
//! Manages user configuration stored in `~/.config/listpair/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. Every field has a default, so an empty
//! object (or no file at all) is a valid configuration.
//!
//! ## File Location
//!
//! ```text
//! ~/.config/listpair/config.json
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// State file used when `--state` is not given. Falls back to the XDG
    /// data directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,

    /// Default `tracing` filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Refuse to sort lists whose values lack the composite key segment
    /// being sorted on.
    #[serde(default)]
    pub strict_sort_keys: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: None,
            log_level: default_log_level(),
            strict_sort_keys: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location. Returns
    /// `Config::default()` if the file does not exist.
    ///
    /// A file that cannot be read or parsed also yields the defaults, paired
    /// with the error so the caller can report it once logging is up.
    pub fn load() -> (Self, Option<anyhow::Error>) {
        match Self::config_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// Like [`Config::load`], for a specific path.
    pub fn load_or_default(path: &Path) -> (Self, Option<anyhow::Error>) {
        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Return the path to the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "listpair")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
