//! Shared validation predicates and compiled patterns.
//!
//! Both the resolver and the composer validate against the same two shapes:
//! the shortcut-key charset and the absolute http(s) URL form. The patterns
//! live here as named statics so the rules are defined exactly once.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Compiled charset for shortcut keys and syntactic input segments.
static SHORTCUT_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").unwrap());

/// Compiled shape of an absolute http(s) URL: non-empty host/path after the
/// scheme and no embedded whitespace.
static ABSOLUTE_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s$.?#].[^\s]*$").unwrap());

/// Returns true if `segment` matches the shortcut-key charset
/// (ASCII letters, digits, and hyphens).
pub fn is_shortcut_key(segment: &str) -> bool {
    SHORTCUT_KEY_REGEX.is_match(segment)
}

/// Returns true if `value` carries an explicit http or https scheme.
///
/// This is the cheap prefix check used to pick a base token; full syntactic
/// validation happens in [`is_well_formed_url`].
pub fn has_http_scheme(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Returns true if `candidate` is a syntactically well-formed absolute URL.
///
/// Requires both a successful generic parse and a match against
/// the absolute-URL pattern, so strings like `https://` alone or URLs with
/// embedded whitespace are rejected.
pub fn is_well_formed_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok() && ABSOLUTE_URL_REGEX.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_key_accepts_alphanumerics_and_hyphens() {
        assert!(is_shortcut_key("dev"));
        assert!(is_shortcut_key("api-v1"));
        assert!(is_shortcut_key("Session123"));
        assert!(is_shortcut_key("2024"));
    }

    #[test]
    fn test_shortcut_key_rejects_punctuation() {
        assert!(!is_shortcut_key("api!"));
        assert!(!is_shortcut_key("dev.app"));
        assert!(!is_shortcut_key("a b"));
        assert!(!is_shortcut_key("café"));
    }

    #[test]
    fn test_shortcut_key_rejects_empty() {
        assert!(!is_shortcut_key(""));
    }

    #[test]
    fn test_http_scheme_prefixes() {
        assert!(has_http_scheme("http://example.com"));
        assert!(has_http_scheme("https://example.com/path"));
        assert!(!has_http_scheme("ftp://example.com"));
        assert!(!has_http_scheme("example.com"));
        assert!(!has_http_scheme("httpsx://example.com"));
    }

    #[test]
    fn test_well_formed_url_accepts_typical_urls() {
        assert!(is_well_formed_url("https://example.com"));
        assert!(is_well_formed_url("http://app.dev.example.com/api/v1"));
        assert!(is_well_formed_url("https://example.com/a?b=c"));
    }

    #[test]
    fn test_well_formed_url_rejects_whitespace() {
        assert!(!is_well_formed_url("https://exa mple.com"));
        assert!(!is_well_formed_url("https://example.com/a b"));
    }

    #[test]
    fn test_well_formed_url_rejects_degenerate_forms() {
        assert!(!is_well_formed_url("https://"));
        assert!(!is_well_formed_url("not a url"));
        assert!(!is_well_formed_url(""));
    }
}
