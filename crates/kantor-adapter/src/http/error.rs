/*
[INPUT]:  Error sources (transport, HTTP status, payload shape, storage)
[OUTPUT]: Discriminated error kinds carrying the user-facing message
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing message derivation
*/

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the kantor adapter
///
/// `Network`, `Client` and `Server` display exactly the derived message so
/// callers that only show `to_string()` get the backend's own wording.
#[derive(Error, Debug)]
pub enum KantorError {
    /// Transport-level failure (connect, TLS, reading the body)
    #[error("{message}")]
    Network { message: String },

    /// Non-2xx response below 500
    #[error("{message}")]
    Client { status: u16, message: String },

    /// 5xx response
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Login answered 2xx but carried no usable token field
    #[error("No token in /auth/login response")]
    MissingToken,

    /// A 2xx payload did not fit the requested shape
    #[error("Unexpected response shape: {0}")]
    Decode(String),

    /// Credential storage failed
    #[error("Credential storage error: {0}")]
    Storage(String),

    /// Serialization of a request body failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl KantorError {
    /// Build the error for a non-2xx response from its parsed payload.
    pub fn from_response(status: StatusCode, payload: &Value) -> Self {
        let message = failure_message(status, payload);
        let status = status.as_u16();
        if status >= 500 {
            KantorError::Server { status, message }
        } else {
            KantorError::Client { status, message }
        }
    }

    /// Human-readable message, identical to `Display`
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status for `Client`/`Server` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            KantorError::Client { status, .. } | KantorError::Server { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, KantorError::Client { .. })
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, KantorError::Server { .. })
    }

    pub fn is_network_error(&self) -> bool {
        matches!(self, KantorError::Network { .. })
    }

    /// Check if error indicates the session is missing or rejected
    pub fn is_auth_error(&self) -> bool {
        matches!(self, KantorError::MissingToken)
            || matches!(self.status(), Some(401) | Some(403))
    }
}

impl From<reqwest::Error> for KantorError {
    fn from(err: reqwest::Error) -> Self {
        KantorError::Network {
            message: err.to_string(),
        }
    }
}

/// Result type alias for kantor operations
pub type Result<T> = std::result::Result<T, KantorError>;

/// Message for a failed response: `message`, then `error`, then `HTTP <status>`.
///
/// Empty strings, `false`, `0` and `null` do not count as a message.
/// A list message is joined with `", "`.
pub fn failure_message(status: StatusCode, payload: &Value) -> String {
    ["message", "error"]
        .iter()
        .filter_map(|field| payload.get(field))
        .find(|value| is_truthy(value))
        .map(render_message)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn render_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
