//! # Pair State Storage
//!
//! Persists a left/right list pair as JSON using XDG-compliant paths.
//!
//! ## Storage Location
//!
//! ```text
//! ~/.local/share/listpair/
//! └── pair.json
//! ```
//!
//! Any other file can be used with `--state`.

use crate::engine::{Entry, ListPairEngine, Side};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the default state file inside the data directory
pub const DEFAULT_STATE_FILE: &str = "pair.json";

/// The two option lists, as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairState {
    /// Entries of the left list, in display order
    pub left: Vec<Entry>,
    /// Entries of the right list, in display order
    pub right: Vec<Entry>,
    /// When the state was last written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PairState {
    pub fn new(left: Vec<Entry>, right: Vec<Entry>) -> Self {
        Self {
            left,
            right,
            updated_at: None,
        }
    }

    /// Load a pair from `path`. A missing file yields an empty pair.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "state file missing, starting empty");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read state file: {}", path.display()))?;

        let state: PairState = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse state file: {}", path.display()))?;

        Ok(state)
    }

    /// Write the pair to `path`, stamping `updated_at`.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create state directory: {}", parent.display())
                })?;
            }
        }

        self.updated_at = Some(Utc::now());
        let json = serde_json::to_string_pretty(self).context("Failed to serialize pair state")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write state file: {}", path.display()))?;

        debug!(
            path = %path.display(),
            left = self.left.len(),
            right = self.right.len(),
            "saved state"
        );
        Ok(())
    }

    /// Lend both lists to an engine.
    pub fn engine(&mut self) -> ListPairEngine<'_> {
        ListPairEngine::new(&mut self.left, &mut self.right)
    }

    /// The list for `side`.
    pub fn entries(&self, side: Side) -> &[Entry] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Append an entry to the list for `side`.
    pub fn push(&mut self, side: Side, entry: Entry) {
        match side {
            Side::Left => self.left.push(entry),
            Side::Right => self.right.push(entry),
        }
    }
}

/// Get the XDG-compliant path of the default state file
pub fn default_state_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", "listpair")
        .context("Failed to determine application data directory")?;

    Ok(proj_dirs.data_dir().join(DEFAULT_STATE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> PairState {
        PairState::new(
            vec![Entry::new("One", "1|one"), Entry::new("Two", "2|two").selected()],
            vec![Entry::new("Three", "3|three")],
        )
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let state = PairState::load(&temp_dir.path().join("missing.json")).expect("load");
        assert!(state.left.is_empty());
        assert!(state.right.is_empty());
        assert!(state.updated_at.is_none());
    }

    #[test]
    fn test_save_and_load_persists_lists_and_selection() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("nested").join("pair.json");

        let mut state = sample();
        state.save(&path).expect("save");
        assert!(state.updated_at.is_some());

        let loaded = PairState::load(&path).expect("load");
        assert_eq!(loaded, state);
        assert!(loaded.left[1].selected);
    }

    #[test]
    fn test_corrupted_state_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("pair.json");
        fs::write(&path, "not valid json").expect("write");

        let err = PairState::load(&path).expect_err("corrupted file");
        assert!(err.to_string().contains("Failed to parse state file"));
    }

    #[test]
    fn test_state_requires_both_lists() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("pair.json");
        fs::write(&path, r#"{"left": []}"#).expect("write");

        assert!(PairState::load(&path).is_err());
    }

    #[test]
    fn test_engine_mutates_state() {
        let mut state = sample();
        assert!(state.engine().move_right(false));
        assert_eq!(state.entries(Side::Left).len(), 1);
        assert_eq!(state.entries(Side::Right)[1].value, "2|two");
    }

    #[test]
    fn test_push() {
        let mut state = PairState::default();
        state.push(Side::Right, Entry::new("A", "1|a"));
        assert!(state.left.is_empty());
        assert_eq!(state.right.len(), 1);
    }
}
