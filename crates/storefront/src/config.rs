//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HERD_MARKET_API_URL` - Backend base URL (default: `http://localhost:5000/api`)
//! - `HERD_MARKET_API_TOKEN` - Bearer token sent with backend requests
//! - `HERD_MARKET_DATA_DIR` - Directory for durable local storage (default: `.herd-market`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_DATA_DIR: &str = ".herd-market";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Marketplace backend configuration
    pub backend: BackendConfig,
    /// Directory holding durable local storage
    pub data_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Marketplace REST backend configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct BackendConfig {
    /// Base URL; listing routes are resolved relative to it
    pub base_url: Url,
    /// Bearer token for authenticated requests
    pub api_token: Option<SecretString>,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url.as_str())
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl BackendConfig {
    /// Backend configuration for a base URL without a token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("HERD_MARKET_API_URL", base_url)?,
            api_token: None,
        })
    }

    /// Full URL of a backend route such as `listings`.
    #[must_use]
    pub fn endpoint(&self, route: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            route.trim_start_matches('/')
        )
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = get_or_default(&lookup, "HERD_MARKET_API_URL", DEFAULT_API_URL);
        let base_url = parse_base_url("HERD_MARKET_API_URL", &api_url)?;
        let api_token = get_optional(&lookup, "HERD_MARKET_API_TOKEN").map(SecretString::from);
        let data_dir = PathBuf::from(get_or_default(
            &lookup,
            "HERD_MARKET_DATA_DIR",
            DEFAULT_DATA_DIR,
        ));

        Ok(Self {
            backend: BackendConfig {
                base_url,
                api_token,
            },
            data_dir,
            sentry_dsn: get_optional(&lookup, "SENTRY_DSN"),
            sentry_environment: get_optional(&lookup, "SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, treating empty values as unset.
fn get_optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get_optional(lookup, key).unwrap_or_else(|| default.to_string())
}

/// Parse and validate an http(s) base URL.
fn parse_base_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url =
        Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}
