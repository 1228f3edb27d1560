//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables and building a
//! [`ProbeConfig`] from them.

use crate::common::config::ProbeConfig;
use crate::common::error::CommonError;

/// Environment variable holding the health endpoint URL
pub const ENV_URL: &str = "HEALTH_PROBE_URL";

/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "HEALTH_PROBE_TIMEOUT_SECS";

/// Get an environment variable, or `None` if unset or not valid unicode
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Get an environment variable with a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Falls back to `default` when the variable is unset or fails to parse.
/// A parse failure is logged as a warning.
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    match get_env(name) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    "Environment variable '{}' has invalid value '{}', using default",
                    name,
                    raw
                );
                default
            }
        },
        None => default,
    }
}

impl ProbeConfig {
    /// Read `HEALTH_PROBE_URL` and `HEALTH_PROBE_TIMEOUT_SECS` without validating
    ///
    /// Unset variables fall back to the defaults. Callers that layer further
    /// overrides on top validate once at the end.
    pub fn from_env_unvalidated() -> Self {
        let defaults = ProbeConfig::default();
        ProbeConfig {
            url: get_env_or(ENV_URL, &defaults.url).trim().to_string(),
            timeout_secs: get_env_parse(ENV_TIMEOUT_SECS, defaults.timeout_secs),
        }
    }

    /// Build a validated configuration from the environment
    ///
    /// Unset variables fall back to the defaults. A set but empty URL is an error.
    pub fn from_env() -> Result<Self, CommonError> {
        let config = Self::from_env_unvalidated();
        if config.url.is_empty() {
            return Err(CommonError::Config(format!("{} is empty", ENV_URL)));
        }
        config.validate()?;
        Ok(config)
    }
}
