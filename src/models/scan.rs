//! Scan request payloads

use serde::{Deserialize, Serialize};

/// Target carrying a bare URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlTarget {
    /// Target URL
    pub url: String,
}

impl UrlTarget {
    /// Target the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Target carrying a bare IP address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpTarget {
    /// Target address
    pub ip: String,
}

impl IpTarget {
    /// Target the given address.
    pub fn new(ip: impl Into<String>) -> Self {
        Self { ip: ip.into() }
    }
}

/// Port scan parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortScanRequest {
    /// Target address
    pub ip: String,
    /// Port range, e.g. `1-1000`. The backend default applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
}

impl PortScanRequest {
    /// Scan the backend's default port range.
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ports: None,
        }
    }

    /// Scan an explicit port range.
    pub fn with_ports(ip: impl Into<String>, ports: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ports: Some(ports.into()),
        }
    }
}

/// Subdomain enumeration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubdomainRequest {
    /// Domain to enumerate
    pub domain: String,
    /// Use the larger wordlist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_scan: Option<bool>,
}

impl SubdomainRequest {
    /// Enumerate with the default wordlist.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            deep_scan: None,
        }
    }
}
