//! Tokenization and shortcut resolution for typed input lines.

use crate::config::ShortcutMap;
use crate::domain::entities::{ParsedInput, ResolvedToken};
use crate::error::ValidationError;
use crate::utils::input_normalizer::normalize_input;
use crate::utils::validation::is_shortcut_key;

/// Parses a raw input line into an ordered, resolved token list.
///
/// The line is normalized (outer whitespace trimmed, inner runs collapsed,
/// one leading legacy `@` stripped) and split on spaces. Each segment is
/// looked up in `shortcuts` independently: a hit yields a resolved token
/// carrying the mapped value, a miss yields a dynamic pass-through token
/// whose value is the segment itself. Dynamic segments are intentional:
/// they let free-form identifiers such as session IDs sit between configured
/// shortcuts without any special syntax.
///
/// A parse is valid only if at least one resolved token carries an absolute
/// http(s) URL to anchor construction; otherwise the result is flagged with
/// a missing-base error. All failures are reported as data on the returned
/// [`ParsedInput`], never as `Err`.
///
/// # Examples
///
/// ```ignore
/// let shortcuts = ShortcutMap::from_iter([("dev", "https://app.dev.example.com")]);
/// let parsed = parse("dev session123", &shortcuts);
///
/// assert!(parsed.is_valid);
/// assert_eq!(parsed.tokens[1].key, "session123");
/// assert!(!parsed.tokens[1].is_resolved);
/// ```
pub fn parse(input: &str, shortcuts: &ShortcutMap) -> ParsedInput {
    let normalized = normalize_input(input);

    if normalized.is_empty() {
        return ParsedInput::invalid(Vec::new(), vec![ValidationError::empty_input()], input);
    }

    let segments: Vec<&str> = normalized.split(' ').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return ParsedInput::invalid(Vec::new(), vec![ValidationError::invalid_format()], input);
    }

    let tokens: Vec<ResolvedToken> = segments
        .into_iter()
        .map(|segment| match shortcuts.resolve(segment) {
            Some(value) => ResolvedToken::resolved(segment, value),
            None => ResolvedToken::dynamic(segment),
        })
        .collect();

    let resolved_count = tokens.iter().filter(|t| t.is_resolved).count();
    tracing::debug!(
        "resolved {} of {} segments against {} configured shortcuts",
        resolved_count,
        tokens.len(),
        shortcuts.len()
    );

    let has_base = tokens.iter().any(|t| t.is_resolved && t.is_base());
    if !has_base {
        return ParsedInput::invalid(tokens, vec![ValidationError::missing_base()], input);
    }

    ParsedInput::valid(tokens, input)
}

/// Cheap syntactic pre-check for an input line, suitable for per-keystroke
/// calls.
///
/// Applies the same normalization as [`parse`], then requires at least one
/// segment and every segment to match the shortcut-key charset
/// `[a-zA-Z0-9-]+`. No mapping lookup happens here.
pub fn is_valid_format(input: &str) -> bool {
    let normalized = normalize_input(input);

    !normalized.is_empty() && normalized.split(' ').all(is_shortcut_key)
}
