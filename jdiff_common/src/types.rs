use serde::{Deserialize, Serialize};

/// Classification of one aligned position in a line-level diff.
///
/// Entries appear in document order for both sides at once: walking the
/// left-bearing entries (`Same`, `Removed`, the left half of `Changed`)
/// reproduces the left document's canonical lines, and the right-bearing
/// entries reproduce the right document's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffEntry {
    /// Line present and identical on both sides
    Same { text: String },
    /// Line present only on the right side
    Added { text: String },
    /// Line present only on the left side
    Removed { text: String },
    /// One removed line immediately followed by one added line, collapsed
    Changed { left: String, right: String },
}

/// Aggregate counts over a diff result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub same: usize,
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

/// Ordered sequence of diff entries produced by one compare invocation.
///
/// The default value is the empty sentinel a session resets to on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub entries: Vec<DiffEntry>,
}

impl DiffResult {
    pub fn new(entries: Vec<DiffEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();
        for entry in &self.entries {
            match entry {
                DiffEntry::Same { .. } => summary.same += 1,
                DiffEntry::Added { .. } => summary.added += 1,
                DiffEntry::Removed { .. } => summary.removed += 1,
                DiffEntry::Changed { .. } => summary.changed += 1,
            }
        }
        summary
    }

    pub fn has_differences(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| !matches!(entry, DiffEntry::Same { .. }))
    }

    /// Lines of the left document, in order, as witnessed by this diff.
    pub fn left_lines(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                DiffEntry::Same { text } | DiffEntry::Removed { text } => Some(text.as_str()),
                DiffEntry::Changed { left, .. } => Some(left.as_str()),
                DiffEntry::Added { .. } => None,
            })
            .collect()
    }

    /// Lines of the right document, in order, as witnessed by this diff.
    pub fn right_lines(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                DiffEntry::Same { text } | DiffEntry::Added { text } => Some(text.as_str()),
                DiffEntry::Changed { right, .. } => Some(right.as_str()),
                DiffEntry::Removed { .. } => None,
            })
            .collect()
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Show only entries that differ in rendered output
    #[serde(default)]
    pub diff_only: bool,

    /// Disable ANSI colors in terminal output
    #[serde(default)]
    pub no_color: bool,

    /// Enable portable mode (config alongside binary)
    #[serde(default)]
    pub portable_mode: bool,
}
