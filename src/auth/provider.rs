//! Token provider implementations

use async_trait::async_trait;

/// A source of bearer tokens, consulted once per outbound request.
///
/// Returning `None` is not an error: the request still goes out with an
/// empty `Authorization` value and the remote API decides (a 401 in
/// practice). That keeps "not logged in" observable at the API boundary
/// instead of being masked by a client-side failure.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// The current token, if any
    async fn token(&self) -> Option<String>;
}

/// A fixed token, mainly for tests and one-off scripts
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Wrap a fixed token value
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Option<String> {
        Some(self.token.clone())
    }
}

/// Reads the token from an environment variable on every call.
///
/// The per-call read mirrors a per-request session lookup: a token rotated
/// mid-process is picked up by the next request without a restart.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    /// Read the token from the named environment variable
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

#[async_trait]
impl TokenProvider for EnvToken {
    async fn token(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|v| !v.is_empty())
    }
}

/// No credential at all; every request goes out unauthenticated
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

#[async_trait]
impl TokenProvider for NoToken {
    async fn token(&self) -> Option<String> {
        None
    }
}
