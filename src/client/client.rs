//! Core HTTP client implementation

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result, messages};
use crate::models::HealthStatus;

/// HTTP client for the scanning backend. Cheaply clonable.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) config: ClientConfig,
    pub(crate) http: reqwest::Client,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::Config(format!("Invalid header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::Config(format!("Invalid header value: {e}")))?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {e}")))?;

        info!("ApiClient created for {}", config.base_url);

        Ok(Self { config, http })
    }

    /// Client talking to the endpoint from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Get configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve a request path against the base endpoint.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Issue one request and parse the JSON response. Non-success statuses
    /// become a `Status` error carrying the body's `message` field (or a
    /// generic failure string) plus the parsed body; every failure is
    /// logged before it propagates.
    pub(crate) async fn request<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        debug!(%method, %url, "sending request");

        let mut request = self.http.request(method.clone(), url.as_str());
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(%method, %url, "request failed: {e}");
                return Err(ClientError::Http(e));
            }
        };

        let status = response.status();
        let body = match response.json::<Value>().await {
            Ok(body) => body,
            Err(e) => {
                error!(%method, %url, status = status.as_u16(), "invalid response body: {e}");
                return Err(ClientError::Http(e));
            }
        };

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(messages::REQUEST_FAILED)
                .to_string();
            error!(%method, %url, status = status.as_u16(), "{message}");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
                body,
            });
        }

        serde_json::from_value(body).map_err(ClientError::from)
    }

    /// Issue a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, (), ()>(Method::GET, path, None, None).await
    }

    /// GET with parameters serialized as a query string.
    pub async fn get_with<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request::<T, Q, ()>(Method::GET, path, Some(query), None)
            .await
    }

    /// POST with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request::<T, (), B>(Method::POST, path, None, Some(body))
            .await
    }

    /// PUT with a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request::<T, (), B>(Method::PUT, path, None, Some(body))
            .await
    }

    /// Issue a DELETE request with no body.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, (), ()>(Method::DELETE, path, None, None)
            .await
    }

    /// Backend health probe.
    pub async fn health_check(&self) -> Result<HealthStatus> {
        self.get("/health").await
    }
}
