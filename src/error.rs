//! Error types for the jobdesk client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Every variant renders a single human-readable message via `Display`;
//! callers branch on "value", "no content", or "failed with message" and
//! never need to unpick transport errors from API-reported ones.

use thiserror::Error;

/// The main error type for the jobdesk client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required environment variable: {name}")]
    MissingEnv { name: String },

    #[error("Invalid base URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered with a non-2xx status. `message` is the
    /// `message` field of the JSON error envelope when one was present,
    /// otherwise `Request failed: <status>`.
    #[error("{message}")]
    Remote { status: u16, message: String },

    // ============================================================================
    // Payload Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing environment variable error
    pub fn missing_env(name: impl Into<String>) -> Self {
        Self::MissingEnv { name: name.into() }
    }

    /// Create a remote error from a status and message
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    /// The HTTP status the remote API answered with, when it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the failure happened before any network I/O
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::MissingEnv { .. } | Error::InvalidUrl { .. }
        )
    }
}

/// Result type alias for the jobdesk client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("base endpoint is empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: base endpoint is empty"
        );

        let err = Error::missing_env("API_BASE_URL");
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: API_BASE_URL"
        );
    }

    #[test]
    fn test_remote_display_is_bare_message() {
        // The UI surfaces Display directly, so Remote must render just the
        // message without any status prefix.
        let err = Error::remote(400, "Bad Request");
        assert_eq!(err.to_string(), "Bad Request");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_is_config() {
        assert!(Error::config("x").is_config());
        assert!(Error::missing_env("X").is_config());
        assert!(!Error::remote(500, "boom").is_config());
    }
}
