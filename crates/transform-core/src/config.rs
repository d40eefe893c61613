//! Service configuration for data-transform.
//!
//! [`ServiceConfig::from_env`] layers the process environment over the
//! built-in defaults and validates the result once at startup.
//! [`ServiceConfig::from_vars`] does the same from an explicit variable map
//! (useful in tests), and [`ServiceConfig::defaults`] needs no input at all.

use std::net::SocketAddr;

use regex::Regex;
use serde::Deserialize;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

/// Origin family served from Netlify deploy previews.
pub const NETLIFY_ORIGIN_PATTERN: &str = r"^https://([a-zA-Z0-9-]+\.)*netlify\.app$";

const DEFAULT_CONFIG: &str = r#"
allowed_origins        = "https://vividsuite.io,http://localhost:4321"
allow_netlify_wildcard = "true"
bind_addr              = "0.0.0.0:8002"
"#;

// ---------------------------------------------------------------------------
// Raw settings (strings, as read)
// ---------------------------------------------------------------------------

/// Settings exactly as they come out of the layered sources. Every value
/// stays a string so that parse failures can name the offending variable.
#[derive(Debug, Deserialize)]
struct RawSettings {
    allowed_origins: String,
    allow_netlify_wildcard: String,
    allowed_origin_pattern: String,
    bind_addr: String,
}

// ---------------------------------------------------------------------------
// Public config type
// ---------------------------------------------------------------------------

/// Immutable, validated configuration shared by every request.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Exact origins allowed to make cross-origin calls.
    pub allowed_origins: Vec<String>,
    /// Whether `origin_pattern` is consulted at all.
    pub allow_netlify_wildcard: bool,
    /// Full-match pattern for the wildcard origin family. `None` when the
    /// wildcard allowance is disabled.
    pub origin_pattern: Option<Regex>,
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ServiceConfig {
    /// Load from the process environment (`ALLOWED_ORIGINS`,
    /// `ALLOW_NETLIFY_WILDCARD`, `ALLOWED_ORIGIN_PATTERN`, `BIND_ADDR`),
    /// layered on top of the built-in defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::build(config::Environment::default())
    }

    /// Load from an explicit set of environment-style variables instead of
    /// the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::build(config::Environment::default().source(Some(map)))
    }

    /// Return the built-in defaults without reading the environment.
    pub fn defaults() -> Self {
        Self::from_vars(std::iter::empty::<(String, String)>())
            .expect("built-in default config must be valid")
    }

    /// Replace the bind address when one was given on the command line.
    pub fn with_bind_override(mut self, bind: Option<SocketAddr>) -> Self {
        if let Some(addr) = bind {
            self.bind_addr = addr;
        }
        self
    }

    fn build(env: config::Environment) -> Result<Self, ConfigError> {
        let raw: RawSettings = config::Config::builder()
            .set_default("allowed_origin_pattern", NETLIFY_ORIGIN_PATTERN)?
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Self::validate(raw)
    }

    fn validate(raw: RawSettings) -> Result<Self, ConfigError> {
        let allowed_origins = parse_origins(&raw.allowed_origins);
        let allow_netlify_wildcard =
            parse_flag("ALLOW_NETLIFY_WILDCARD", &raw.allow_netlify_wildcard)?;

        let origin_pattern = if allow_netlify_wildcard {
            Some(full_match(&raw.allowed_origin_pattern)?)
        } else {
            None
        };

        let bind_addr = raw
            .bind_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw.bind_addr.clone(),
                source,
            })?;

        Ok(Self {
            allowed_origins,
            allow_netlify_wildcard,
            origin_pattern,
            bind_addr,
        })
    }
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

fn parse_origins(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

/// Compile `pattern` so that it must match the whole origin.
fn full_match(pattern: &str) -> Result<Regex, ConfigError> {
    Ok(Regex::new(&format!("^(?:{pattern})$"))?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
