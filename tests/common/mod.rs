#![allow(dead_code)]

use url_composer::prelude::*;

/// Shortcut mapping shared by the integration tests: two base URLs and one
/// path-only fragment.
pub fn sample_shortcuts() -> ShortcutMap {
    ShortcutMap::from_iter([
        ("dev", "https://app.dev.example.com"),
        ("prod", "https://app.example.com"),
        ("api", "api/v1"),
    ])
}

/// A shortcuts export document matching [`sample_shortcuts`].
pub fn sample_export_json() -> String {
    r#"{
        "version": "1.0",
        "shortcuts": {
            "dev": "https://app.dev.example.com",
            "prod": "https://app.example.com",
            "api": "api/v1"
        }
    }"#
    .to_string()
}
