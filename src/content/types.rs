//! Content type definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CATEGORY, STEP_DURATION_HINT_MS};

/// One fake boot step, e.g. "Loading driver: azure_ad_identity.sys".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootStep {
    pub label: String,
    /// How long its progress bar should take, in milliseconds.
    #[serde(default = "default_duration_hint")]
    pub duration_hint_ms: u64,
}

fn default_duration_hint() -> u64 {
    STEP_DURATION_HINT_MS
}

impl BootStep {
    pub fn new(label: impl Into<String>, duration_hint_ms: u64) -> Self {
        Self {
            label: label.into(),
            duration_hint_ms,
        }
    }
}

/// Category key → ordered template strings.
///
/// Lookups for a missing or empty category fall back to the `"default"`
/// category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessagePool {
    categories: BTreeMap<String, Vec<String>>,
}

impl MessagePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category<I, S>(mut self, key: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(key, lines);
        self
    }

    pub fn insert<I, S>(&mut self, key: impl Into<String>, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .insert(key.into(), lines.into_iter().map(Into::into).collect());
    }

    /// Exact lookup, no fallback.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.categories.get(key).map(Vec::as_slice)
    }

    /// Lines for `key`, or the default category's when `key` is missing or
    /// empty. Returns an empty slice if neither has content.
    pub fn lines_for(&self, key: &str) -> &[String] {
        match self.get(key) {
            Some(lines) if !lines.is_empty() => lines,
            _ => self.get(DEFAULT_CATEGORY).unwrap_or(&[]),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
}

/// A static content block revealed after a category loader finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    /// Category key that selects this panel, e.g. "summary".
    pub key: String,
    pub title: String,
    pub body: Vec<String>,
}

/// Expandable entry on the logs panel, keyed by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDetail {
    pub role: String,
    pub title: String,
    pub body: Vec<String>,
}

/// Static text per content category. Rendered, never mutated by the
/// sequencer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStore {
    pub panels: Vec<Panel>,
    #[serde(default)]
    pub log_details: Vec<LogDetail>,
}

impl ContentStore {
    pub fn panel(&self, key: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.key == key)
    }

    pub fn panel_at(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn log_detail_at(&self, index: usize) -> Option<&LogDetail> {
        self.log_details.get(index)
    }
}
