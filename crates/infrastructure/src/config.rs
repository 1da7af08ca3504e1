//! Suite configuration from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `BOOKER_BASE_URL` | `https://restful-booker.herokuapp.com` |
//! | `BOOKER_USERNAME` | `admin` |
//! | `BOOKER_PASSWORD` | `password123` |
//! | `BOOKER_TIMEOUT_MS` | `30000` |
//! | `BOOKER_TOKEN_PLACEMENT` | `cookie` (or `bearer`) |

use std::time::Duration;

use booker_domain::{AuthorisePayload, TokenPlacement};
use thiserror::Error;
use url::Url;

use crate::adapters::DEFAULT_TIMEOUT;

/// Public restful-booker instance.
pub const DEFAULT_BASE_URL: &str = "https://restful-booker.herokuapp.com";
/// Default admin account of restful-booker.
pub const DEFAULT_USERNAME: &str = "admin";
/// Password of the default admin account.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Errors raised while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A URL variable does not hold an absolute http(s) URL.
    #[error("{key} is not a valid http(s) URL: {value}")]
    InvalidUrl {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },

    /// A numeric variable does not parse.
    #[error("{key} must be a positive integer, got {value}")]
    InvalidNumber {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },

    /// A variable holds a value outside its allowed set.
    #[error("{key} has an unsupported value: {value}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Everything the suite needs to reach the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookerConfig {
    /// Base URL, without trailing slash.
    pub base_url: String,
    /// Credentials for `/auth`.
    pub username: String,
    /// Credentials for `/auth`.
    pub password: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Where tokens go on mutating calls.
    pub token_placement: TokenPlacement,
}

impl Default for BookerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            timeout: DEFAULT_TIMEOUT,
            token_placement: TokenPlacement::default(),
        }
    }
}

impl BookerConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// Unset and blank values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get("BOOKER_BASE_URL") {
            config.base_url = parse_base_url("BOOKER_BASE_URL", &value)?;
        }
        if let Some(value) = get("BOOKER_USERNAME") {
            config.username = value;
        }
        if let Some(value) = get("BOOKER_PASSWORD") {
            config.password = value;
        }
        if let Some(value) = get("BOOKER_TIMEOUT_MS") {
            let millis = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidNumber {
                    key: "BOOKER_TIMEOUT_MS",
                    value: value.clone(),
                })?;
            config.timeout = Duration::from_millis(millis);
        }
        if let Some(value) = get("BOOKER_TOKEN_PLACEMENT") {
            config.token_placement = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "BOOKER_TOKEN_PLACEMENT",
                value: value.clone(),
            })?;
        }

        Ok(config)
    }

    /// Returns a copy pointing at another base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The configured credentials as an `/auth` payload.
    #[must_use]
    pub fn credentials(&self) -> AuthorisePayload {
        AuthorisePayload::new(&self.username, &self.password)
    }
}

fn parse_base_url(key: &'static str, value: &str) -> Result<String, ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        key,
        value: value.to_string(),
    };
    let url = Url::parse(value.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(value.trim().trim_end_matches('/').to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BookerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, BookerConfig::default());
        assert_eq!(config.base_url, "https://restful-booker.herokuapp.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.token_placement, TokenPlacement::Cookie);
    }

    #[test]
    fn test_overrides() {
        let config = BookerConfig::from_lookup(lookup(&[
            ("BOOKER_BASE_URL", "http://localhost:3001/"),
            ("BOOKER_USERNAME", "tester"),
            ("BOOKER_PASSWORD", "secret"),
            ("BOOKER_TIMEOUT_MS", "2500"),
            ("BOOKER_TOKEN_PLACEMENT", "bearer"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(
            config.credentials(),
            AuthorisePayload::new("tester", "secret")
        );
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert_eq!(config.token_placement, TokenPlacement::Bearer);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = BookerConfig::from_lookup(lookup(&[("BOOKER_USERNAME", "  ")])).unwrap();
        assert_eq!(config.username, "admin");
    }

    fn error_for(key: &str, value: &str) -> ConfigError {
        BookerConfig::from_lookup(lookup(&[(key, value)])).unwrap_err()
    }

    #[test]
    fn test_invalid_url() {
        for value in ["ftp://files", "nope", "http://"] {
            let err = error_for("BOOKER_BASE_URL", value);
            assert_eq!(
                err.to_string(),
                format!("BOOKER_BASE_URL is not a valid http(s) URL: {value}")
            );
        }
    }

    #[test]
    fn test_invalid_timeout() {
        for value in ["soon", "0", "-5"] {
            let err = error_for("BOOKER_TIMEOUT_MS", value);
            assert!(matches!(err, ConfigError::InvalidNumber { .. }));
        }
    }

    #[test]
    fn test_invalid_token_placement() {
        let err = error_for("BOOKER_TOKEN_PLACEMENT", "header");
        assert_eq!(
            err.to_string(),
            "BOOKER_TOKEN_PLACEMENT has an unsupported value: header"
        );
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let config = BookerConfig::default().with_base_url("http://127.0.0.1:1234/");
        assert_eq!(config.base_url, "http://127.0.0.1:1234");
    }
}
