//! data-transform: VividSuite Data Transform demo service.
//!
//! A small JSON service with a health check and a record-normalisation demo,
//! fronted by a CORS policy. This crate re-exports the two library crates so
//! that integration tests and benches can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! main ──► ServiceConfig ──► router ──► handlers ──► normalize
//!                              │
//!                              └──► cors / log_requests middleware
//! ```
//!
//! Configuration is read once at startup; nothing is shared between requests
//! except that immutable configuration.

use std::future::Future;

use tokio::net::TcpListener;

pub use transform_core::{
    config, normalize, normalizer, sample_record, types, ConfigError, NormalizedRecord,
    RawRecord, ServiceConfig,
};
pub use transform_http::{cors, handlers, router, ApiError, CorsPolicy};

/// Serve the application on `listener` until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    config: &ServiceConfig,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolve on Ctrl-C, or on SIGTERM where available.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl-C"),
        _ = terminate => tracing::info!("received SIGTERM"),
    }
}
