//! Static fixtures used across harnesses.

use serde_json::{json, Value};

/// An origin on the default allow-list.
pub const ALLOWED_ORIGIN: &str = "https://vividsuite.io";

/// The local dev-server origin on the default allow-list.
pub const DEV_ORIGIN: &str = "http://localhost:4321";

/// A deploy-preview origin covered by the wildcard family.
pub const NETLIFY_ORIGIN: &str = "https://deploy-preview-12--vividsuite.netlify.app";

/// Origins that must never be allowed under the default configuration.
pub const FOREIGN_ORIGINS: &[&str] = &[
    "https://evil.example",
    "http://vividsuite.io",
    "https://vividsuite.io.evil.example",
    "http://deploy-preview-12--vividsuite.netlify.app",
    "https://netlify.app.evil.example",
];

/// The built-in sample exactly as `GET /demo/example` echoes it.
pub fn sample_input_json() -> Value {
    json!({
        "id": "123",
        "name": "  Alice Johnson  ",
        "email": "Alice@example.COM",
        "tags": ["New", "customer", "BETA"],
    })
}

/// The normalised form of [`sample_input_json`].
pub fn sample_output_json() -> Value {
    json!({
        "id": "123",
        "name_first": "Alice",
        "name_last": "Johnson",
        "email": "alice@example.com",
        "tags": ["beta", "customer", "new"],
        "valid": true,
    })
}
