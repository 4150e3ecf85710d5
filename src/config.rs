//! Client configuration
//!
//! The base endpoint is resolved once at startup and injected into the
//! gateway. There is deliberately no fallback address: an unset
//! `API_BASE_URL` is a hard configuration error, because a silent default
//! pointing at a developer machine has a habit of surviving into the wrong
//! environment.

use crate::error::{Error, Result};
use url::Url;

/// Environment variable naming the remote API root
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Resolved, validated client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL.
    ///
    /// Rejects empty strings and anything `url` cannot parse as an
    /// absolute URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(Error::config("API base URL must not be empty"));
        }
        Url::parse(&base_url).map_err(|source| Error::InvalidUrl {
            url: base_url.clone(),
            source,
        })?;
        Ok(Self { base_url })
    }

    /// Build a config from the `API_BASE_URL` environment variable.
    pub fn from_env() -> Result<Self> {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Err(Error::missing_env(BASE_URL_ENV)),
        }
    }

    /// The configured API root
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bypass validation, for exercising the gateway's own guard
    #[cfg(test)]
    pub(crate) fn unchecked(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        let err = ApiConfig::new("").unwrap_err();
        assert!(err.is_config());

        let err = ApiConfig::new("   ").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_new_rejects_unparseable() {
        let err = ApiConfig::new("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_new_accepts_valid() {
        let config = ApiConfig::new("https://api.example.com/v1").unwrap();
        assert_eq!(config.base_url(), "https://api.example.com/v1");
    }
}
