//! Business logic services for the application layer.

pub mod composer_service;
pub mod resolver_service;

pub use composer_service::{compose, construct};
pub use resolver_service::{is_valid_format, parse};
