//! Parse result entity carrying resolved tokens and validation state.

use crate::domain::entities::ResolvedToken;
use crate::error::ValidationError;
use serde::Serialize;

/// Outcome of tokenizing and resolving one input line.
///
/// Token order always mirrors input segment order; resolution never reorders
/// segments. The struct is a transient value, produced by the resolver and
/// consumed immediately by the composer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedInput {
    pub tokens: Vec<ResolvedToken>,
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub original_input: String,
}

impl ParsedInput {
    /// Creates a valid parse result.
    pub fn valid(tokens: Vec<ResolvedToken>, original_input: impl Into<String>) -> Self {
        Self {
            tokens,
            is_valid: true,
            errors: Vec::new(),
            original_input: original_input.into(),
        }
    }

    /// Creates an invalid parse result, keeping any tokens produced before
    /// validation failed.
    pub fn invalid(
        tokens: Vec<ResolvedToken>,
        errors: Vec<ValidationError>,
        original_input: impl Into<String>,
    ) -> Self {
        Self {
            tokens,
            is_valid: false,
            errors,
            original_input: original_input.into(),
        }
    }

    /// Returns the index of the first token whose value is an absolute
    /// http(s) URL.
    ///
    /// Selection is positional so the composer can exclude the base from the
    /// remaining parts by index rather than by reference identity.
    pub fn base_index(&self) -> Option<usize> {
        self.tokens.iter().position(ResolvedToken::is_base)
    }

    /// Joins all accumulated error messages with `"; "`.
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}
