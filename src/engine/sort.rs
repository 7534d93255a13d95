//! # Sorting
//!
//! Sorts a list by one segment of its entries' composite values
//! (`"<numericKey>|<alphaKey>"`). Sorting rebuilds every entry from its text
//! and value, so all selection is cleared.

use super::entry::{CompositeKey, Entry};
use super::error::{InvalidArgument, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Which composite key segment to sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Ascending by segment 0 parsed as a number
    Numeric,
    /// Ascending by segment 1, case-insensitive
    Alphabetic,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Numeric => write!(f, "numeric"),
            SortMode::Alphabetic => write!(f, "alphabetic"),
        }
    }
}

impl FromStr for SortMode {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "numeric" | "n" => Ok(SortMode::Numeric),
            "alphabetic" | "alpha" | "a" => Ok(SortMode::Alphabetic),
            other => Err(InvalidArgument::new(format!(
                "Sort mode must be 'numeric' or 'alphabetic', got '{other}'."
            ))),
        }
    }
}

/// Sort `entries` in place and clear their selection.
///
/// Numeric keys that are missing or unparseable sort after every numeric
/// key. A missing alphabetic key compares as the empty string.
pub fn sort_entries(entries: &mut Vec<Entry>, mode: SortMode) {
    let unkeyed = entries.iter().filter(|e| !has_key(e, mode)).count();
    if unkeyed > 0 {
        warn!(%mode, unkeyed, "sorting entries without a composite key segment");
    }

    let mut rebuilt: Vec<Entry> = entries.iter().map(Entry::rebuilt).collect();
    match mode {
        SortMode::Numeric => rebuilt.sort_by(compare_numeric),
        SortMode::Alphabetic => {
            rebuilt.sort_by_cached_key(|e| e.composite_key().alpha_folded());
        }
    }

    debug!(%mode, len = rebuilt.len(), "sorted entries");
    *entries = rebuilt;
}

/// Fail on the first entry whose value lacks the segment `mode` sorts on.
pub fn validate_sort_keys(entries: &[Entry], mode: SortMode) -> Result<()> {
    match entries.iter().position(|e| !has_key(e, mode)) {
        Some(index) => Err(InvalidArgument::new(format!(
            "Entry {} has value '{}' without a {mode} sort key.",
            index + 1,
            entries[index].value
        ))),
        None => Ok(()),
    }
}

fn has_key(entry: &Entry, mode: SortMode) -> bool {
    let key = entry.composite_key();
    match mode {
        SortMode::Numeric => key.numeric_value().is_some(),
        SortMode::Alphabetic => key.alpha.is_some(),
    }
}

fn compare_numeric(a: &Entry, b: &Entry) -> Ordering {
    let a = CompositeKey::parse(&a.value).numeric_value();
    let b = CompositeKey::parse(&b.value).numeric_value();
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
