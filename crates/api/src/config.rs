//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CONTACTS_HOST` - Bind address (default: 127.0.0.1)
//! - `CONTACTS_PORT` - Listen port, falling back to `PORT` (default: 5001)
//! - `CONTACTS_STRICT_VALIDATION` - Apply the form rules to API payloads (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

use crate::store::ValidationMode;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5001;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Payload checks applied by the store
    pub validation: ValidationMode,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            validation: ValidationMode::Lenient,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("CONTACTS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CONTACTS_HOST".to_string(), e.to_string()))?;

        let (port_key, port) = get_port();
        let port = port.parse::<u16>().map_err(|e| {
            ConfigError::InvalidEnvVar(port_key.to_string(), e.to_string())
        })?;

        let strict = parse_bool(
            "CONTACTS_STRICT_VALIDATION",
            &get_env_or_default("CONTACTS_STRICT_VALIDATION", "false"),
        )?;

        Ok(Self {
            host,
            port,
            validation: if strict {
                ValidationMode::Strict
            } else {
                ValidationMode::Lenient
            },
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Port from `CONTACTS_PORT`, then the generic `PORT`, then the default.
fn get_port() -> (&'static str, String) {
    if let Some(value) = get_optional_env("CONTACTS_PORT") {
        return ("CONTACTS_PORT", value);
    }
    if let Some(value) = get_optional_env("PORT") {
        return ("PORT", value);
    }
    ("CONTACTS_PORT", DEFAULT_PORT.to_string())
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}
