//! Startup configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("{key} must be one of 1/true/yes/on or 0/false/no/off, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },

    #[error("BIND_ADDR {value:?} is not a socket address")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid wildcard origin pattern: {0}")]
    InvalidOriginPattern(#[from] regex::Error),
}
