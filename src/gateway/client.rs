//! Gateway implementation

use crate::auth::TokenProvider;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::types::{JsonValue, Method};
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Per-request overrides: method, JSON body, extra headers.
///
/// Defaults to a bare GET. Extra headers are applied before the gateway's
/// own `Authorization` and `Content-Type`, so those two always win.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method (GET by default)
    pub method: Method,
    /// Request body, sent as JSON
    pub body: Option<JsonValue>,
    /// Additional request headers
    pub headers: HashMap<String, String>,
}

impl RequestOptions {
    /// Create default options (GET, no body)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP method
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set a JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// The single chokepoint for outbound authenticated API calls.
///
/// Stateless per call: no caching, no retries, no shared mutable state.
/// Cloning is cheap and clones may be used concurrently from any number
/// of tasks.
#[derive(Clone)]
pub struct Gateway {
    client: Client,
    config: ApiConfig,
    tokens: Arc<dyn TokenProvider>,
}

impl Gateway {
    /// Create a gateway over the given config and token source
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            client: Client::new(),
            config,
            tokens,
        }
    }

    /// Create a gateway sharing an existing reqwest client
    pub fn with_client(client: Client, config: ApiConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            client,
            config,
            tokens,
        }
    }

    /// The configured base endpoint
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Issue one authenticated request and normalize the outcome.
    ///
    /// Returns `Ok(Some(value))` for a 2xx response with a JSON body,
    /// `Ok(None)` for a no-content response (204, `Content-Length: 0`, or
    /// an empty body), and `Err` for everything else. See the module docs
    /// for the full contract.
    pub async fn send(&self, path: &str, options: RequestOptions) -> Result<Option<JsonValue>> {
        // Guarded again here so a hand-built empty config can never reach
        // the network with a base-less URL.
        if self.config.base_url().trim().is_empty() {
            return Err(Error::config("API base URL must not be empty"));
        }

        let url = self.build_url(path);
        let token = self.tokens.token().await;

        let mut req = self.client.request(options.method.into(), &url);

        // Caller headers first, with the two reserved names dropped: the
        // gateway alone decides Authorization and Content-Type, so every
        // call is authenticated and typed as JSON.
        for (key, value) in &options.headers {
            if key.eq_ignore_ascii_case("authorization") || key.eq_ignore_ascii_case("content-type")
            {
                continue;
            }
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(ref body) = options.body {
            req = req.body(serde_json::to_string(body)?);
        }

        // An absent token still produces the header, with an empty value,
        // so the remote API is the one that rejects unauthenticated calls.
        req = req
            .header("Authorization", format!("Bearer {}", token.unwrap_or_default()))
            .header("Content-Type", "application/json");

        let response = req.send().await.map_err(|e| {
            warn!("Request to {url} failed: {e}");
            Error::Http(e)
        })?;

        debug!("{} {} -> {}", options.method, url, response.status());
        Self::interpret(response).await
    }

    /// GET a path with no overrides
    pub async fn get(&self, path: &str) -> Result<Option<JsonValue>> {
        self.send(path, RequestOptions::new()).await
    }

    /// POST a JSON body to a path
    pub async fn post(&self, path: &str, body: JsonValue) -> Result<Option<JsonValue>> {
        self.send(path, RequestOptions::new().method(Method::POST).json(body))
            .await
    }

    /// PUT a JSON body to a path
    pub async fn put(&self, path: &str, body: JsonValue) -> Result<Option<JsonValue>> {
        self.send(path, RequestOptions::new().method(Method::PUT).json(body))
            .await
    }

    /// DELETE a path
    pub async fn delete(&self, path: &str) -> Result<Option<JsonValue>> {
        self.send(path, RequestOptions::new().method(Method::DELETE))
            .await
    }

    /// Join base and path with exactly one separating slash, whatever the
    /// caller supplied.
    pub(crate) fn build_url(&self, path: &str) -> String {
        let base = self.config.base_url().trim_end_matches('/');
        let path = path.trim_matches('/');
        format!("{base}/{path}")
    }

    /// Fold an HTTP response into the gateway's outcome contract.
    async fn interpret(response: Response) -> Result<Option<JsonValue>> {
        let status = response.status();

        if !status.is_success() {
            let fallback = format!("Request failed: {}", status.as_u16());
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<JsonValue>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(JsonValue::as_str).map(String::from))
                .unwrap_or(fallback);
            return Err(Error::remote(status.as_u16(), message));
        }

        // No-content detection happens before any parse attempt; an empty
        // string must never reach the JSON parser.
        let content_length_zero = response
            .headers()
            .get(reqwest::header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "0");

        if status == reqwest::StatusCode::NO_CONTENT || content_length_zero {
            return Ok(None);
        }

        let text = response.text().await.map_err(Error::Http)?;
        if text.is_empty() {
            return Ok(None);
        }

        let value: JsonValue = serde_json::from_str(&text)?;
        Ok(Some(value))
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
