//! Scan operation endpoints

use serde_json::Value;

use super::client::ApiClient;
use crate::error::Result;
use crate::models::{ApiResponse, IpTarget, PortScanRequest, SubdomainRequest, UrlTarget};

/// One method per scan operation the backend exposes. Result payloads are
/// plugin-specific, so `data` stays untyped.
impl ApiClient {
    /// Port scan against a target host.
    pub async fn port_scan(&self, request: &PortScanRequest) -> Result<ApiResponse> {
        self.post("/scan/port-scan", request).await
    }

    /// Information-leak probes against a URL.
    pub async fn info_leak(&self, request: &UrlTarget) -> Result<ApiResponse> {
        self.post("/scan/info-leak", request).await
    }

    /// Co-hosted sites on the target address.
    pub async fn web_side(&self, request: &IpTarget) -> Result<ApiResponse> {
        self.post("/scan/web-side", request).await
    }

    /// Basic site information.
    pub async fn base_info(&self, request: &UrlTarget) -> Result<ApiResponse> {
        self.post("/scan/baseinfo", request).await
    }

    /// Search-engine weight of the site.
    pub async fn web_weight(&self, request: &UrlTarget) -> Result<ApiResponse> {
        self.post("/scan/web-weight", request).await
    }

    /// Geolocate an address.
    pub async fn ip_locating(&self, request: &IpTarget) -> Result<ApiResponse> {
        self.post("/scan/ip-locating", request).await
    }

    /// CDN detection.
    pub async fn cdn_check(&self, request: &UrlTarget) -> Result<ApiResponse> {
        self.post("/scan/cdn-check", request).await
    }

    /// WAF detection.
    pub async fn waf_check(&self, request: &UrlTarget) -> Result<ApiResponse> {
        self.post("/scan/waf-check", request).await
    }

    /// CMS fingerprinting.
    pub async fn what_cms(&self, request: &UrlTarget) -> Result<ApiResponse> {
        self.post("/scan/what-cms", request).await
    }

    /// Subdomain enumeration.
    pub async fn subdomain_scan(&self, request: &SubdomainRequest) -> Result<ApiResponse> {
        self.post("/scan/subdomain", request).await
    }

    /// Directory brute-force.
    pub async fn dir_scan(&self, request: &UrlTarget) -> Result<ApiResponse> {
        self.post("/scan/dir-scan", request).await
    }

    /// Run every applicable scan against a URL.
    pub async fn comprehensive_scan(&self, request: &UrlTarget) -> Result<ApiResponse<Value>> {
        self.post("/scan/comprehensive", request).await
    }
}
