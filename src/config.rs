//! Client configuration

use std::collections::HashMap;
use std::time::Duration;

use url::Url;

use crate::error::{ClientError, Result};

/// Endpoint used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888/api";

/// Environment variable carrying the backend endpoint.
pub const BASE_URL_ENV: &str = "WEBSCAN_API_BASE_URL";

/// Configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base endpoint all request paths are resolved against
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Headers sent with every request
    pub default_headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            default_headers,
        }
    }
}

impl ClientConfig {
    /// Configuration from the environment: loads `.env` if present and
    /// reads the base endpoint from `WEBSCAN_API_BASE_URL`, falling back
    /// to the local backend address.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the base endpoint is a usable http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::Config(format!("Invalid base URL {}: {}", self.base_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ClientError::Config(format!(
                "Unsupported URL scheme: {scheme}"
            ))),
        }
    }
}

/// Configuration
pub struct ConfigBuilder {
    config: ClientConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Base endpoint
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.to_string();
        self
    }

    /// Settings
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add or replace a default header.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.config
            .default_headers
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Configuration
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.default_headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .base_url("https://scanner.internal/api")
            .timeout(Duration::from_secs(5))
            .header("X-Request-Source", "dashboard")
            .build();

        assert_eq!(config.base_url, "https://scanner.internal/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config
                .default_headers
                .get("X-Request-Source")
                .map(String::as_str),
            Some("dashboard")
        );
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut config = ClientConfig::default();

        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://example.com/api".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_env_yields_usable_config() {
        let config = ClientConfig::from_env().unwrap();
        assert!(config.base_url.starts_with("http"));
    }
}
