use serde::{Deserialize, Serialize};

/// Separator between the sub-keys of a composite option value.
pub const COMPOSITE_KEY_SEPARATOR: char = '|';

/// A single option in one of the two lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display text
    pub text: String,
    /// Option value, conventionally `"<numericKey>|<alphaKey>"`
    pub value: String,
    /// Whether the entry is currently selected
    #[serde(default)]
    pub selected: bool,
}

impl Entry {
    /// Create an unselected entry.
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            selected: false,
        }
    }

    /// Builder-style helper for creating an entry that starts out selected.
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Split the value into its composite sort keys.
    pub fn composite_key(&self) -> CompositeKey<'_> {
        CompositeKey::parse(&self.value)
    }

    /// A fresh copy carrying only text and value (selection dropped).
    pub(crate) fn rebuilt(&self) -> Self {
        Self::new(self.text.clone(), self.value.clone())
    }
}

/// Borrowed view over the `|`-delimited segments of an option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeKey<'a> {
    /// Segment 0, used for numeric ordering
    pub numeric: Option<&'a str>,
    /// Segment 1, used for alphabetic ordering
    pub alpha: Option<&'a str>,
}

impl<'a> CompositeKey<'a> {
    pub fn parse(value: &'a str) -> Self {
        let mut segments = value.split(COMPOSITE_KEY_SEPARATOR);
        let numeric = segments.next().filter(|s| !s.is_empty());
        let alpha = segments.next();
        Self { numeric, alpha }
    }

    /// Segment 0 parsed as a number, if present and numeric.
    pub fn numeric_value(&self) -> Option<f64> {
        self.numeric
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|n| !n.is_nan())
    }

    /// Segment 1 lower-cased; missing segments compare as empty.
    pub fn alpha_folded(&self) -> String {
        self.alpha.unwrap_or_default().to_lowercase()
    }
}
