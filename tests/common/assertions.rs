//! Domain-specific assertion macros for data-transform harnesses.
//!
//! These add context-rich failure messages that make it clear *which* CORS or
//! error-shape rule was violated.

// ---------------------------------------------------------------------------
// CORS assertions
// ---------------------------------------------------------------------------

/// Assert that a `TestResponse` grants cross-origin access to `origin`.
///
/// ```rust
/// assert_cors_allowed!(response, "https://vividsuite.io");
/// ```
#[macro_export]
macro_rules! assert_cors_allowed {
    ($response:expr, $origin:expr) => {{
        let response: &$crate::common::TestResponse = &$response;
        let origin: &str = $origin;
        match response.header("access-control-allow-origin") {
            Some(actual) if actual == origin => {}
            Some(actual) => panic!(
                "assert_cors_allowed! failed:\n  expected origin: {:?}\n  actual:          {:?}",
                origin, actual
            ),
            None => panic!(
                "assert_cors_allowed! failed: no access-control-allow-origin for {:?}.\n  headers: {:?}",
                origin, response.headers
            ),
        }
        let vary: Vec<_> = response
            .headers
            .get_all("vary")
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect();
        if !vary.iter().any(|v| v.contains("Origin")) {
            panic!("assert_cors_allowed! failed: Vary does not name Origin: {:?}", vary);
        }
        if response.headers.contains_key("access-control-allow-credentials") {
            panic!("assert_cors_allowed! failed: credentials must never be allowed");
        }
    }};
}

/// Assert that a `TestResponse` carries no CORS grant at all.
#[macro_export]
macro_rules! assert_no_cors {
    ($response:expr) => {{
        let response: &$crate::common::TestResponse = &$response;
        if let Some(actual) = response.header("access-control-allow-origin") {
            panic!(
                "assert_no_cors! failed: unexpected access-control-allow-origin {:?}",
                actual
            );
        }
        if response.headers.contains_key("access-control-allow-credentials") {
            panic!("assert_no_cors! failed: credentials must never be allowed");
        }
    }};
}

// ---------------------------------------------------------------------------
// Error shape assertions
// ---------------------------------------------------------------------------

/// Assert that a `TestResponse` is a `{"detail": ...}` error with `status`.
///
/// ```rust
/// assert_detail!(response, StatusCode::NOT_FOUND);
/// ```
#[macro_export]
macro_rules! assert_detail {
    ($response:expr, $status:expr) => {{
        let response: &$crate::common::TestResponse = &$response;
        let expected: axum::http::StatusCode = $status;
        if response.status != expected {
            panic!(
                "assert_detail! failed:\n  expected status: {}\n  actual:          {}\n  body: {:?}",
                expected,
                response.status,
                String::from_utf8_lossy(&response.body)
            );
        }
        let body = response.json();
        match body.get("detail") {
            Some(serde_json::Value::String(detail)) if !detail.is_empty() => {}
            other => panic!(
                "assert_detail! failed: expected non-empty string detail, got {:?}",
                other
            ),
        }
    }};
}
