//! Token entity representing one resolved input segment.

use crate::utils::validation::has_http_scheme;
use serde::Serialize;

/// One input segment after resolution against the shortcut mapping.
///
/// `key` is always the original segment as typed. When the segment matched a
/// configured shortcut, `value` holds the mapped literal and `is_resolved` is
/// true; otherwise the segment passes through as a dynamic path piece with
/// `value` equal to `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedToken {
    pub key: String,
    pub value: String,
    pub is_resolved: bool,
}

impl ResolvedToken {
    /// Creates a token for a segment that matched a configured shortcut.
    pub fn resolved(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            is_resolved: true,
        }
    }

    /// Creates a pass-through token for a segment with no matching shortcut.
    pub fn dynamic(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            value: key.clone(),
            key,
            is_resolved: false,
        }
    }

    /// Returns true if this token's value is an absolute http(s) URL and can
    /// anchor path joining.
    pub fn is_base(&self) -> bool {
        has_http_scheme(&self.value)
    }
}
