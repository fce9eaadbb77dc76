//! Raw failure type raised by the HTTP layer

use thiserror::Error;

use super::types::AppError;

/// Client result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Error raised by the request client before normalization.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport or body-decoding failure
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response, carrying the parsed body
    #[error("{message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
        /// Parsed response body
        body: serde_json::Value,
    },

    /// Error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Already-normalized error passing through
    #[error(transparent)]
    App(#[from] AppError),
}

impl ClientError {
    /// Status code of the failed response, if there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::Status { status, .. } => Some(*status),
            ClientError::App(e) => e.status_code,
            _ => None,
        }
    }
}

/// Normalization: classify a raw client failure into the uniform model.
/// First match wins: transport failures, then status-carrying responses,
/// then already-normalized errors, then the unknown fallback.
impl From<&ClientError> for AppError {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Http(e) if e.is_connect() || e.is_timeout() || e.is_request() => {
                AppError::network()
            }
            ClientError::Status { status, body, .. } => AppError::from_status(*status, body.clone()),
            ClientError::App(e) => e.clone(),
            other => AppError::unknown(other.to_string())
                .with_details(serde_json::Value::String(format!("{other:?}"))),
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        AppError::from(&err)
    }
}
