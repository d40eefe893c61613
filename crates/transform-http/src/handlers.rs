//! Route handlers.
//!
//! - `GET /`: service descriptor
//! - `GET /healthz`: liveness with the current UTC time
//! - `GET /demo/example`: normalises the built-in sample record
//! - `POST /demo/transform`: normalises a record from the request body

use axum::{extract::rejection::JsonRejection, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use transform_core::{normalize, sample_record, NormalizedRecord, RawRecord};

use crate::error::ApiError;

pub const SERVICE: &str = "data-transform";
pub const APP_NAME: &str = "VividSuite Data Transform Demo";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const ENDPOINTS: &[&str] = &["/healthz", "/demo/example", "/demo/transform"];

#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub service: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
    /// RFC 3339, microsecond precision, `Z` suffix.
    pub time: String,
}

/// Envelope shared by both transform endpoints.
#[derive(Debug, Serialize)]
pub struct TransformResponse {
    pub service: &'static str,
    pub message: &'static str,
    pub input: RawRecord,
    pub output: NormalizedRecord,
}

impl TransformResponse {
    fn for_record(input: RawRecord) -> Self {
        let output = normalize(&input);
        Self {
            service: SERVICE,
            message: "transform-ok",
            input,
            output,
        }
    }
}

pub async fn root() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        service: SERVICE,
        name: APP_NAME,
        version: APP_VERSION,
        endpoints: ENDPOINTS,
    })
}

pub async fn healthz() -> Json<Health> {
    Json(Health {
        status: "ok",
        service: SERVICE,
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}

pub async fn demo_example() -> Json<TransformResponse> {
    Json(TransformResponse::for_record(sample_record()))
}

pub async fn demo_transform(
    payload: Result<Json<RawRecord>, JsonRejection>,
) -> Result<Json<TransformResponse>, ApiError> {
    let Json(record) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected transform payload");
        ApiError::from(rejection)
    })?;
    Ok(Json(TransformResponse::for_record(record)))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
