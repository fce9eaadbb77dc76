//! Report payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scan report as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report ID
    pub id: i64,
    /// Task this report was generated from
    pub task_id: i64,
    /// Display name
    pub report_name: String,
    /// Output format: `pdf`, `html`, `json`, ...
    pub report_type: String,
    /// Generated content
    #[serde(default)]
    pub content: Option<Value>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportCreate {
    /// Task to report on
    pub task_id: i64,
    /// Display name
    pub report_name: String,
    /// Output format
    pub report_type: String,
}

/// Partial report update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportUpdate {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_name: Option<String>,
    /// Replacement content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

/// Report list filters and paging
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportsQuery {
    /// Filter by originating task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    /// Offset into the result set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// One page of the report list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPage {
    /// Reports on this page
    pub reports: Vec<Report>,
    /// Total matching reports
    pub total: u64,
    /// Offset this page starts at
    pub skip: u32,
    /// Requested page size
    pub limit: u32,
}
