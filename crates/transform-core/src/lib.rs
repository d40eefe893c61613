//! transform-core: record normalization for the data-transform service.
//!
//! Holds everything that does not need an HTTP server: the record types, the
//! pure [`normalize`] function, the built-in sample record and the startup
//! configuration.
//!
//! ```text
//! RawRecord ──► normalize ──► NormalizedRecord
//! ```

pub mod config;
pub mod error;
pub mod normalizer;
pub mod types;

pub use config::ServiceConfig;
pub use error::ConfigError;
pub use normalizer::normalize;
pub use types::{sample_record, NormalizedRecord, RawRecord};
