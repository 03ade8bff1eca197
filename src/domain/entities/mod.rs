//! Core domain entities representing the composition data model.
//!
//! Entities are plain value objects without business logic:
//!
//! - [`ResolvedToken`] - One input segment after shortcut resolution
//! - [`ParsedInput`] - Ordered token list plus validation state
//! - [`ConstructedUrl`] - Terminal result of URL composition
//!
//! All three are created fresh per call and immutable once produced; equality
//! is by value throughout.

pub mod constructed_url;
pub mod parsed_input;
pub mod token;

pub use constructed_url::ConstructedUrl;
pub use parsed_input::ParsedInput;
pub use token::ResolvedToken;
