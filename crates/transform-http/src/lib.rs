//! transform-http: HTTP surface for the data-transform service.
//!
//! [`router`] wires the handlers behind two middleware layers:
//!
//! ```text
//! log_requests ──► cors ──► route / fallback
//! ```
//!
//! The CORS policy is built once from [`ServiceConfig`] and shared read-only
//! across requests.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod trace;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use transform_core::ServiceConfig;

pub use cors::CorsPolicy;
pub use error::ApiError;

/// Build the application router for `config`.
pub fn router(config: &ServiceConfig) -> Router {
    let policy = Arc::new(CorsPolicy::from_config(config));

    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/demo/example", get(handlers::demo_example))
        .route("/demo/transform", post(handlers::demo_transform))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(middleware::from_fn_with_state(policy, cors::cors))
        .layer(middleware::from_fn(trace::log_requests))
}
