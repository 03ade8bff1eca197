//! Validation errors produced while parsing shortcut input.
//!
//! Errors here are data, not control flow: parsing accumulates them into
//! [`crate::domain::entities::ParsedInput`] and the caller decides what to
//! do with an invalid result. Nothing in the parse/construct path returns
//! `Err` to the caller.

use serde::Serialize;

/// Machine-readable classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input was blank after normalization.
    EmptyInput,
    /// Input contained no extractable segments.
    InvalidFormat,
    /// No segment resolved to an absolute http(s) URL.
    MissingBase,
}

impl ErrorCode {
    /// Returns the wire representation of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::MissingBase => "MISSING_BASE",
        }
    }
}

/// A single validation failure tied to an input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: ErrorCode,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }

    /// Input was empty or whitespace-only.
    pub fn empty_input() -> Self {
        Self::new("input", "Input is empty", ErrorCode::EmptyInput)
    }

    /// Input yielded no usable segments after normalization.
    pub fn invalid_format() -> Self {
        Self::new(
            "input",
            "Input contains no usable segments",
            ErrorCode::InvalidFormat,
        )
    }

    /// No configured shortcut in the input resolves to a base URL.
    pub fn missing_base() -> Self {
        Self::new(
            "input",
            "No shortcut resolves to a base URL",
            ErrorCode::MissingBase,
        )
    }
}
