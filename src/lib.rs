//! # URL Composer
//!
//! A shortcut-based URL composition library: resolve whitespace-separated
//! input tokens against a configured shortcut mapping and join the results
//! into one navigable URL.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Token, parse-result, and composed-URL value objects
//! - **Application Layer** ([`application`]) - Resolution and composition services
//! - **Configuration** ([`config`]) - Shortcut snapshots and the import/export envelope
//! - **Utilities** ([`utils`]) - Normalization, validation predicates, URL joining
//!
//! ## Features
//!
//! - Dynamic pass-through segments interleaved with configured shortcuts
//! - Index-based base-token selection with slash-safe path joining
//! - Errors as data: invalid input degrades, it never panics or throws
//! - Versioned JSON import/export envelope for shortcut configurations
//!
//! ## Quick Start
//!
//! ```
//! use url_composer::application::services::{composer_service, resolver_service};
//! use url_composer::config::ShortcutMap;
//!
//! let shortcuts = ShortcutMap::from_iter([
//!     ("dev", "https://app.dev.example.com"),
//!     ("api", "api/v1"),
//! ]);
//!
//! let parsed = resolver_service::parse("dev api session123", &shortcuts);
//! assert!(parsed.is_valid);
//!
//! let result = composer_service::construct(&parsed, &shortcuts);
//! assert_eq!(result.url, "https://app.dev.example.com/api/v1/session123");
//! ```
//!
//! ## Concurrency
//!
//! Every operation is a synchronous, referentially transparent function of
//! its arguments. Calls are safe to issue concurrently from multiple callers
//! without locking; each call reads its own mapping snapshot and retains no
//! state.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod utils;

pub use error::{ErrorCode, ValidationError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{compose, construct, is_valid_format, parse};
    pub use crate::config::{ShortcutMap, ShortcutsExport};
    pub use crate::domain::entities::{ConstructedUrl, ParsedInput, ResolvedToken};
    pub use crate::error::{ErrorCode, ValidationError};
}
