//! Service configuration.

use std::fmt::Display;
use std::num::NonZeroUsize;
use std::str::FromStr;

use namemycat_store::DatabaseConfig;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Database connection settings (`PG_*` variables).
    pub database: DatabaseConfig,

    /// Key used to sign flash cookies (default: "suchsecrets").
    pub secret_key: String,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Maximum number of requests handled at once. Zero is treated as one.
    pub max_concurrent_requests: usize,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            database: DatabaseConfig::from_env(),
            secret_key: std::env::var("APP_SECRET").unwrap_or(defaults.secret_key),
            max_body_bytes: env_parse("MAX_BODY_BYTES").unwrap_or(defaults.max_body_bytes),
            request_timeout_seconds: env_parse("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or(defaults.request_timeout_seconds),
            max_concurrent_requests: env_parse::<NonZeroUsize>("MAX_CONCURRENT_REQUESTS")
                .map_or(defaults.max_concurrent_requests, NonZeroUsize::get),
        }
    }

    /// Concurrency limit for the router, never below one.
    #[must_use]
    pub fn concurrency_limit(&self) -> usize {
        self.max_concurrent_requests.max(1)
    }

    /// Whether the flash signing key is still the built-in default.
    #[must_use]
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET
    }
}

const DEFAULT_SECRET: &str = "suchsecrets";

fn env_parse<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    std::env::var(key)
        .ok()
        .and_then(|raw| parse_setting(key, &raw))
}

/// Parse one setting, logging and discarding values that do not parse.
fn parse_setting<T>(key: &str, raw: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "Invalid setting, using default");
            None
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            database: DatabaseConfig::default(),
            secret_key: DEFAULT_SECRET.into(),
            max_body_bytes: 16 * 1024,
            request_timeout_seconds: 30,
            max_concurrent_requests: 64,
        }
    }
}
