//! POC scan payloads

use serde::{Deserialize, Serialize};

/// POC scan parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PocScanRequest {
    /// Target host or URL
    pub target: String,
    /// POC types to run; all available types when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poc_types: Option<Vec<String>>,
    /// Per-POC timeout in seconds
    pub timeout: u64,
}

impl PocScanRequest {
    /// Run every available POC against `target` with the default timeout.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            poc_types: None,
            timeout: 10,
        }
    }

    /// Restrict the run to the given POC types.
    pub fn with_types(target: impl Into<String>, poc_types: Vec<String>) -> Self {
        Self {
            target: target.into(),
            poc_types: Some(poc_types),
            timeout: 10,
        }
    }
}

/// Outcome of one POC execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PocScanResult {
    /// POC identifier, e.g. `weblogic_cve_2020_2551`
    pub poc_type: String,
    /// Target the POC ran against
    pub target: String,
    /// Whether the target is vulnerable
    pub vulnerable: bool,
    /// Human-readable outcome
    pub message: String,
    /// Execution time, backend-formatted
    pub timestamp: String,
}

/// Aggregate outcome of a POC scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PocScanResponse {
    /// Whether the scan ran to completion
    pub success: bool,
    /// Per-POC outcomes
    pub results: Vec<PocScanResult>,
    /// Number of POCs executed
    pub total_scanned: u32,
    /// Number of vulnerable findings
    pub vulnerable_count: u32,
    /// Scan time, backend-formatted
    pub timestamp: String,
}

/// POC result list filters and paging
#[derive(Debug, Clone, Default, Serialize)]
pub struct PocResultsQuery {
    /// Filter by target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Filter by POC type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poc_type: Option<String>,
    /// Offset into the result set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
