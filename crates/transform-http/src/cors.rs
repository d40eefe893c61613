//! CORS middleware.
//!
//! Origins are checked against an exact allow-list plus an optional
//! full-match pattern. Credentials are never allowed, so the matched origin is
//! echoed back instead of `*`. Preflights are answered here and never reach
//! the router.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS,
            ACCESS_CONTROL_REQUEST_METHOD, ORIGIN, VARY,
        },
        HeaderMap, HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use regex::Regex;
use transform_core::ServiceConfig;

/// Methods a cross-origin caller may use.
pub const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::OPTIONS];

const ALLOW_METHODS_HEADER: &str = "GET, POST, OPTIONS";
const PREFLIGHT_MAX_AGE_SECS: &str = "600";

/// Immutable origin policy, built once at startup.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
    origin_pattern: Option<Regex>,
}

impl CorsPolicy {
    pub fn new(allowed_origins: Vec<String>, origin_pattern: Option<Regex>) -> Self {
        Self {
            allowed_origins,
            origin_pattern,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.allowed_origins.clone(), config.origin_pattern.clone())
    }

    pub fn is_allowed_origin(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
            || self
                .origin_pattern
                .as_ref()
                .is_some_and(|pattern| pattern.is_match(origin))
    }

    fn is_allowed_header_origin(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .is_ok_and(|origin| self.is_allowed_origin(origin))
    }

    /// Answer a preflight request without consulting the router.
    fn preflight(&self, origin: &HeaderValue, request_headers: &HeaderMap) -> Response {
        let origin_ok = self.is_allowed_header_origin(origin);
        let method_ok = request_headers
            .get(ACCESS_CONTROL_REQUEST_METHOD)
            .and_then(|m| Method::from_bytes(m.as_bytes()).ok())
            .is_some_and(|m| ALLOWED_METHODS.contains(&m));

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS_HEADER),
        );
        headers.insert(
            ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static(PREFLIGHT_MAX_AGE_SECS),
        );
        headers.insert(VARY, HeaderValue::from_static("Origin"));
        // Every request header is permitted, so echo whatever was asked for.
        if let Some(requested) = request_headers.get(ACCESS_CONTROL_REQUEST_HEADERS) {
            headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
        }
        if origin_ok {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        }

        let mut failures = Vec::new();
        if !origin_ok {
            failures.push("Disallowed CORS origin");
        }
        if !method_ok {
            failures.push("Disallowed CORS method");
        }

        if failures.is_empty() {
            (StatusCode::OK, headers, "OK").into_response()
        } else {
            tracing::debug!(?origin, reasons = ?failures, "rejected CORS preflight");
            (StatusCode::BAD_REQUEST, headers, failures.join(", ")).into_response()
        }
    }
}

/// `axum` middleware applying `policy` to every request.
pub async fn cors(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(origin) = request.headers().get(ORIGIN).cloned() else {
        return next.run(request).await;
    };

    if request.method() == Method::OPTIONS
        && request.headers().contains_key(ACCESS_CONTROL_REQUEST_METHOD)
    {
        return policy.preflight(&origin, request.headers());
    }

    let mut response = next.run(request).await;
    if policy.is_allowed_header_origin(&origin) {
        let headers = response.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.append(VARY, HeaderValue::from_static("Origin"));
    }
    response
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
