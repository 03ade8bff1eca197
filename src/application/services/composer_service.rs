//! URL construction from resolved token lists.

use crate::config::ShortcutMap;
use crate::domain::entities::{ConstructedUrl, ParsedInput};
use crate::utils::url_join::join_url_parts;
use crate::utils::validation::is_well_formed_url;

use super::resolver_service;

/// Description used when an invalid parse carries no error messages.
const FALLBACK_DESCRIPTION: &str = "Unable to parse input";

/// Description used when no token value can anchor path joining.
const NO_BASE_DESCRIPTION: &str = "No shortcut resolves to a base URL";

/// Builds a single navigable URL from a parse result.
///
/// The first token (by index) whose value is an absolute http(s) URL becomes
/// the base; every other token value is appended as a path part in original
/// order. The joined string must survive both a generic URL parse and the
/// absolute-URL pattern, otherwise the result is flagged invalid with the
/// malformed string retained for diagnostics.
///
/// Construction never fails with `Err`: an unusable parse degrades to an
/// invalid [`ConstructedUrl`] whose description joins the accumulated parse
/// error messages.
pub fn construct(parsed: &ParsedInput, shortcuts: &ShortcutMap) -> ConstructedUrl {
    tracing::trace!(
        "constructing URL from {} tokens ({} shortcuts configured)",
        parsed.tokens.len(),
        shortcuts.len()
    );

    if !parsed.is_valid || parsed.tokens.is_empty() {
        let description = if parsed.errors.is_empty() {
            FALLBACK_DESCRIPTION.to_string()
        } else {
            parsed.error_summary()
        };
        return ConstructedUrl::failure(description, &parsed.original_input);
    }

    let Some(base_index) = parsed.base_index() else {
        return ConstructedUrl::failure(NO_BASE_DESCRIPTION, &parsed.original_input);
    };

    let mut parts: Vec<&str> = Vec::with_capacity(parsed.tokens.len());
    parts.push(parsed.tokens[base_index].value.as_str());
    for (index, token) in parsed.tokens.iter().enumerate() {
        if index != base_index {
            parts.push(token.value.as_str());
        }
    }

    let url = join_url_parts(&parts);
    if !is_well_formed_url(&url) {
        tracing::debug!("joined parts produced a malformed URL: {}", url);
        return ConstructedUrl::malformed(url, &parsed.original_input);
    }

    let breadcrumb = parsed
        .tokens
        .iter()
        .map(|token| token.key.as_str())
        .collect::<Vec<_>>()
        .join(" → ");

    ConstructedUrl::success(url, format!("Navigate to: {breadcrumb}"))
}

/// Resolves and composes in one step.
///
/// Convenience pipeline for callers that do not need the intermediate
/// [`ParsedInput`], such as the CLI.
pub fn compose(input: &str, shortcuts: &ShortcutMap) -> ConstructedUrl {
    construct(&resolver_service::parse(input, shortcuts), shortcuts)
}
