//! Explicit client configuration for the analytics backend.
//!
//! The base address is never read implicitly: callers either take
//! [`ApiConfig::default`] (the local development backend) or build one from
//! a value they resolved themselves, e.g. with [`ApiConfig::from_env`].

use crate::retry::RetryConfig;
use crate::ValidationError;

/// Local development backend used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/shopify";

/// Environment variable consulted by [`ApiConfig::from_env`].
pub const BASE_URL_ENV: &str = "SHOPLENS_API_URL";

/// Default per-request timeout budget.
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;

/// Connection settings injected into the request builder and HTTP source.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    timeout_ms: u64,
    retry: RetryConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retry: RetryConfig::no_retry(),
        }
    }
}

impl ApiConfig {
    /// Build a config for `base_url`, normalizing away trailing slashes.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ValidationError> {
        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref())?,
            ..Self::default()
        })
    }

    /// Resolve the base URL from [`BASE_URL_ENV`], falling back to
    /// [`DEFAULT_BASE_URL`] when the variable is unset or blank.
    pub fn from_env() -> Result<Self, ValidationError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Ok(Self::default()),
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ValidationError> {
        if timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn retry(&self) -> &RetryConfig {
        &self.retry
    }
}

fn normalize_base_url(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed
        .split_once("://")
        .map(|(_, rest)| !rest.is_empty())
        .unwrap_or(false);

    if !has_scheme || !has_host {
        return Err(ValidationError::InvalidBaseUrl {
            value: input.to_owned(),
        });
    }

    Ok(trimmed.to_owned())
}
