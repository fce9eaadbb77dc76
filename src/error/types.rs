//! Normalized error model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Fixed user-facing messages.
pub mod messages {
    /// Transport-level failure
    pub const NETWORK: &str = "Network connection failed, please check your network settings";
    /// HTTP 401
    pub const UNAUTHORIZED: &str = "Unauthorized, please log in again";
    /// HTTP 403
    pub const FORBIDDEN: &str = "Access denied";
    /// HTTP 422
    pub const VALIDATION: &str = "Request data failed validation";
    /// HTTP 5xx
    pub const SERVER_ERROR: &str = "Server error, please try again later";
    /// Non-success response without a usable message
    pub const REQUEST_FAILED: &str = "Request failed";
    /// Unclassified failure
    pub const UNKNOWN: &str = "An unknown error occurred";
}

/// Classification of a normalized error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Transport-level failure (connect, timeout, request build)
    Network,
    /// Backend rejected the request or failed serving it
    Api,
    /// Request payload failed validation (HTTP 422)
    Validation,
    /// Missing or insufficient credentials (HTTP 401/403)
    Auth,
    /// Anything that fits no other bucket
    Unknown,
}

/// Uniform failure representation carrying a classification kind, a
/// user-facing message, and the optional status code and response payload
/// of the failed request.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// Classification
    pub kind: ErrorKind,
    /// User-facing message, always non-empty
    pub message: String,
    /// HTTP status of the failed response, if there was one
    pub status_code: Option<u16>,
    /// Opaque payload: the parsed response body or the raw error text
    pub details: Option<Value>,
}

impl AppError {
    /// Create an error of the given kind. An empty message falls back to
    /// the generic unknown-error string.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = messages::UNKNOWN.to_string();
        }
        Self {
            kind,
            message,
            status_code: None,
            details: None,
        }
    }

    /// Transport-level failure with the fixed network message.
    pub fn network() -> Self {
        Self::new(ErrorKind::Network, messages::NETWORK)
    }

    /// Unclassified failure.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }

    /// Classify a non-success HTTP response. The status code and parsed
    /// body always propagate; 401/403 map to `Auth`, 422 to `Validation`,
    /// 5xx keeps `Api` but replaces the message with the generic
    /// server-error string.
    pub fn from_status(status: u16, body: Value) -> Self {
        let (kind, message) = match status {
            401 => (ErrorKind::Auth, messages::UNAUTHORIZED.to_string()),
            403 => (ErrorKind::Auth, messages::FORBIDDEN.to_string()),
            422 => (ErrorKind::Validation, messages::VALIDATION.to_string()),
            s if s >= 500 => (ErrorKind::Api, messages::SERVER_ERROR.to_string()),
            _ => {
                let message = body
                    .get("message")
                    .and_then(Value::as_str)
                    .filter(|m| !m.is_empty())
                    .unwrap_or(messages::REQUEST_FAILED)
                    .to_string();
                (ErrorKind::Api, message)
            }
        };

        Self {
            kind,
            message,
            status_code: Some(status),
            details: Some(body),
        }
    }

    /// Attach an opaque details payload.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Error
    pub fn is_auth(&self) -> bool {
        self.kind == ErrorKind::Auth
    }

    /// Whether retrying the failed call can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        match self.kind {
            ErrorKind::Network => true,
            ErrorKind::Api => self.status_code.is_some_and(|s| s >= 500),
            _ => false,
        }
    }
}
