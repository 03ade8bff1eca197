//! Terminal output entity of URL construction.

use serde::Serialize;

/// Final result of composing a URL from resolved tokens.
///
/// The `description`/`content` pair is shaped for suggestion-style consumers:
/// `description` is the human-readable label, `content` is what the consumer
/// acts on (the final URL on success, the original input on failure so a
/// caller can fall back to a generic action with it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructedUrl {
    pub url: String,
    pub description: String,
    pub is_valid: bool,
    pub content: String,
}

impl ConstructedUrl {
    /// Creates a successful result; `content` mirrors the final URL.
    pub fn success(url: String, description: impl Into<String>) -> Self {
        Self {
            content: url.clone(),
            url,
            description: description.into(),
            is_valid: true,
        }
    }

    /// Creates a failed result with no URL to show.
    pub fn failure(description: impl Into<String>, original_input: impl Into<String>) -> Self {
        Self {
            url: String::new(),
            description: description.into(),
            is_valid: false,
            content: original_input.into(),
        }
    }

    /// Creates a failed result for a join that produced a malformed URL.
    ///
    /// The malformed string is kept in `url` for diagnostic display.
    pub fn malformed(url: String, original_input: impl Into<String>) -> Self {
        Self {
            url,
            description: "Invalid URL constructed".to_string(),
            is_valid: false,
            content: original_input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_mirrors_url_into_content() {
        let result = ConstructedUrl::success(
            "https://app.dev.example.com/api".to_string(),
            "Navigate to: dev → api",
        );

        assert!(result.is_valid);
        assert_eq!(result.url, "https://app.dev.example.com/api");
        assert_eq!(result.content, result.url);
        assert_eq!(result.description, "Navigate to: dev → api");
    }

    #[test]
    fn test_failure_keeps_original_input_as_content() {
        let result = ConstructedUrl::failure("Input is empty", "   ");

        assert!(!result.is_valid);
        assert!(result.url.is_empty());
        assert_eq!(result.content, "   ");
    }

    #[test]
    fn test_malformed_keeps_bad_url_for_diagnostics() {
        let result = ConstructedUrl::malformed("https://exa mple.com/x".to_string(), "bad input");

        assert!(!result.is_valid);
        assert_eq!(result.url, "https://exa mple.com/x");
        assert_eq!(result.description, "Invalid URL constructed");
        assert_eq!(result.content, "bad input");
    }
}
