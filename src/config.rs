//! Shortcut configuration: the per-call mapping snapshot and the versioned
//! import/export envelope.
//!
//! The composition core never owns shortcut storage. Callers hand every
//! `parse`/`construct` call a read-only [`ShortcutMap`] snapshot; where that
//! snapshot comes from (browser storage, a file, a test fixture) is the
//! caller's concern. [`ShortcutsExport`] is the JSON document shape the
//! import/export collaborator produces: a version tag plus the flat
//! key-to-value mapping, of which this crate only ever consumes the mapping.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::is_shortcut_key;

/// Version tag written into exported configuration documents.
pub const EXPORT_VERSION: &str = "1.0";

/// Read-only snapshot of configured shortcuts for a single call.
///
/// Keys are case-sensitive and unique; lookups never mutate the map. A
/// snapshot taken before a configuration change keeps producing the old
/// values; already-resolved tokens are never retroactively updated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortcutMap {
    entries: HashMap<String, String>,
}

impl ShortcutMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the configured value for `key`, if any.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the number of configured shortcuts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no shortcuts are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl From<HashMap<String, String>> for ShortcutMap {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ShortcutMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Exported configuration document: a version string and the flat shortcut
/// mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ShortcutsExport {
    #[validate(length(min = 1, message = "version must not be empty"))]
    pub version: String,

    #[validate(custom(function = validate_shortcut_entries))]
    pub shortcuts: HashMap<String, String>,
}

impl ShortcutsExport {
    /// Wraps a flat mapping in an envelope carrying the current version tag.
    pub fn new(shortcuts: HashMap<String, String>) -> Self {
        Self {
            version: EXPORT_VERSION.to_string(),
            shortcuts,
        }
    }

    /// Parses and validates an exported configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON, the version is
    /// empty, a shortcut key falls outside `[a-zA-Z0-9-]+`, or a value is
    /// blank.
    pub fn from_json(json: &str) -> Result<Self> {
        let export: Self =
            serde_json::from_str(json).context("Failed to parse shortcuts export")?;
        export
            .validate()
            .context("Shortcuts export failed validation")?;
        Ok(export)
    }

    /// Serializes the document for the export direction.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize shortcuts export")
    }

    /// Consumes the envelope, handing the flat mapping to the core.
    pub fn into_map(self) -> ShortcutMap {
        ShortcutMap::from(self.shortcuts)
    }
}

/// Checks every entry of an imported mapping against the shortcut-key charset
/// and rejects blank values.
fn validate_shortcut_entries(
    shortcuts: &HashMap<String, String>,
) -> Result<(), validator::ValidationError> {
    for (key, value) in shortcuts {
        if !is_shortcut_key(key) {
            let mut error = validator::ValidationError::new("shortcut_key");
            error.message = Some(format!("invalid shortcut key '{key}'").into());
            return Err(error);
        }
        if value.trim().is_empty() {
            let mut error = validator::ValidationError::new("shortcut_value");
            error.message = Some(format!("blank value for shortcut '{key}'").into());
            return Err(error);
        }
    }
    Ok(())
}
