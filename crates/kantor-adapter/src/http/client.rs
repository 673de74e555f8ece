/*
[INPUT]:  HTTP configuration (base URL, timeouts) and credential store
[OUTPUT]: Authenticated request core returning parsed payloads or KantorError
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request/response handling
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::CredentialStore;
use crate::http::{KantorError, Result};

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Options for a single call through [`KantorClient::request`]
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP verb, `GET` by default
    pub method: Method,
    /// JSON payload; `None` sends no body
    pub body: Option<Value>,
    /// Extra headers; `Content-Type` and `Authorization` are always overridden
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: HeaderMap::new(),
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// `POST` with `body` serialized as JSON
    pub fn post<B: Serialize>(body: &B) -> Result<Self> {
        Ok(Self {
            method: Method::POST,
            body: Some(serde_json::to_value(body)?),
            headers: HeaderMap::new(),
        })
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Main HTTP client for the kantor backend
#[derive(Debug, Clone)]
pub struct KantorClient {
    http_client: Client,
    base_url: String,
    store: Arc<dyn CredentialStore>,
}

impl KantorClient {
    /// Create a client for `base_url` with default timeouts
    pub fn new(base_url: impl Into<String>, store: Arc<dyn CredentialStore>) -> Result<Self> {
        Self::with_config(ClientConfig::with_base_url(base_url), store)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| KantorError::Config(format!("Failed to build HTTP client: {e}")))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        Ok(Self {
            http_client,
            base_url,
            store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store the client reads the bearer token from
    pub fn credential_store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Path is appended to the base URL verbatim
    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Issue one request and shape the 2xx payload as `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let payload = self.request_value(path, options).await?;
        serde_json::from_value(payload).map_err(|e| KantorError::Decode(format!("{path}: {e}")))
    }

    /// Issue one request and return the 2xx payload unchecked.
    ///
    /// The body is parsed as JSON when possible and kept as a string value
    /// otherwise; an empty body is `null`. Non-2xx responses become
    /// `Client`/`Server` errors with the message derived from the payload.
    pub async fn request_value(&self, path: &str, options: RequestOptions) -> Result<Value> {
        let token = self.store.load().await?;
        let token = token.as_deref().filter(|t| !t.is_empty());
        tracing::debug!(
            method = %options.method,
            path,
            has_token = token.is_some(),
            "sending request"
        );

        let headers = merge_headers(options.headers, token)?;
        let mut builder = self
            .http_client
            .request(options.method, self.url(path)?)
            .headers(headers);
        if let Some(body) = &options.body {
            builder = builder.body(serde_json::to_string(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let payload = parse_payload(&text);

        if !status.is_success() {
            tracing::warn!(path, status = status.as_u16(), body = %payload, "request failed");
            return Err(KantorError::from_response(status, &payload));
        }

        tracing::debug!(path, status = status.as_u16(), "request succeeded");
        Ok(payload)
    }
}

/// Lay the forced defaults over caller headers.
pub fn merge_headers(mut headers: HeaderMap, token: Option<&str>) -> Result<HeaderMap> {
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            KantorError::Config(format!("Session token is not a valid header value: {e}"))
        })?;
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

/// Parse a response body, keeping non-JSON text as a string value.
pub fn parse_payload(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
