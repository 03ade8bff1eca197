//! Application layer services implementing the composition pipeline.
//!
//! This layer turns raw input plus a shortcut snapshot into a navigable URL.
//! Services are stateless pure functions of their arguments: no call mutates
//! the supplied mapping or any module-level state, so concurrent callers need
//! no coordination.
//!
//! # Available Services
//!
//! - [`services::resolver_service`] - Tokenization and shortcut resolution
//! - [`services::composer_service`] - URL construction from resolved tokens

pub mod services;
