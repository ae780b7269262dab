//! Client configuration.
//!
//! Values are injected at construction time so tests can point the client at
//! a mock endpoint. [`ClientConfig::from_env`] reads:
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `HPOOL_ACCESS_TOKEN` | yes | - |
//! | `HPOOL_API_BASE` | no | `https://www.hpool.com/api` |
//! | `HPOOL_TIMEOUT_MS` | no | `30000` |

use std::env;
use std::time::Duration;

use crate::ValidationError;

pub const DEFAULT_BASE_URL: &str = "https://www.hpool.com/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_ACCESS_TOKEN: &str = "HPOOL_ACCESS_TOKEN";
pub const ENV_BASE_URL: &str = "HPOOL_API_BASE";
pub const ENV_TIMEOUT_MS: &str = "HPOOL_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: String,
    /// Fixed per-request timeout; there is no per-call override.
    pub timeout: Duration,
    pub debug: bool,
}

impl ClientConfig {
    pub fn new(access_token: impl Into<String>) -> Result<Self, ValidationError> {
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(ValidationError::EmptyAccessToken);
        }

        Ok(Self {
            base_url: String::from(DEFAULT_BASE_URL),
            access_token,
            timeout: DEFAULT_TIMEOUT,
            debug: false,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ValidationError> {
        self.base_url = validate_base_url(base_url.into())?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ValidationError> {
        if timeout.is_zero() {
            return Err(ValidationError::InvalidTimeout {
                value: String::from("0"),
            });
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::new(get(ENV_ACCESS_TOKEN).unwrap_or_default())?;
        if let Some(base_url) = get(ENV_BASE_URL) {
            config = config.with_base_url(base_url)?;
        }
        if let Some(raw) = get(ENV_TIMEOUT_MS) {
            config = config.with_timeout(parse_timeout_ms(&raw)?)?;
        }
        Ok(config)
    }
}

pub fn parse_timeout_ms(raw: &str) -> Result<Duration, ValidationError> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ValidationError::InvalidTimeout {
            value: raw.to_owned(),
        }),
    }
}

fn validate_base_url(value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim().trim_end_matches('/');
    let has_host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty());

    if !has_host {
        return Err(ValidationError::InvalidBaseUrl { value });
    }
    Ok(trimmed.to_owned())
}
