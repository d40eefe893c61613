//! In-process driver for the application router.
//!
//! Requests go through the full middleware stack via `tower::ServiceExt::oneshot`
//! without binding a socket.

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use data_transform::{router, ServiceConfig};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// A fully-buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "body is not JSON ({e}): {:?}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("body is not UTF-8")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.to_str().unwrap())
    }
}

/// Router built from the default configuration.
pub fn app() -> Router {
    router(&ServiceConfig::defaults())
}

/// Router built from explicit environment-style variables.
pub fn app_with(vars: &[(&str, &str)]) -> Router {
    let config = ServiceConfig::from_vars(vars.iter().copied()).expect("test config must be valid");
    router(&config)
}

/// Send one request through `app` and buffer the response.
pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("router is infallible");
    let (parts, body) = response.into_parts();
    let body = body
        .collect()
        .await
        .expect("response body must be readable")
        .to_bytes()
        .to_vec();
    TestResponse {
        status: parts.status,
        headers: parts.headers,
        body,
    }
}
