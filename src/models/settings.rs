//! Settings and dashboard payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// General preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    /// Display name of the installation
    pub system_name: String,
    /// UI language tag
    pub language: String,
    /// IANA timezone
    pub timezone: String,
    /// Whether to self-update
    pub auto_update: bool,
}

/// Scan defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSettings {
    /// Default crawl depth
    pub default_depth: String,
    /// Default worker count
    pub default_concurrency: u32,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
}

/// Notification preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    /// Whether email delivery is enabled
    pub email_enabled: bool,
    /// SMTP relay address
    pub smtp_server: String,
    /// Event names that trigger a notification
    pub events: Vec<String>,
}

/// Security preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    /// Session lifetime in minutes
    pub session_timeout: u64,
    /// Whether to refuse plain HTTP
    pub require_https: bool,
}

/// Full system settings document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSettings {
    /// General preferences
    pub general: GeneralSettings,
    /// Scan defaults
    pub scan: ScanSettings,
    /// Notification preferences
    pub notification: NotificationSettings,
    /// Security preferences
    pub security: SecuritySettings,
}

/// System runtime info shown on the settings page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    /// Backend version
    pub version: String,
    /// Human-readable uptime
    pub uptime: String,
    /// CPU usage, backend-formatted
    pub cpu_usage: String,
    /// Memory usage, backend-formatted
    pub memory_usage: String,
    /// Disk usage, backend-formatted
    pub disk_usage: String,
}

/// Dashboard statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    /// Scans started today
    pub today_scans: i64,
    /// Open high-risk vulnerabilities
    pub high_risk_vulns: i64,
    /// Week-over-week trend, percent
    pub weekly_trend: i64,
    /// Scans finished in total
    pub completed_scans: i64,
    /// Series data for the dashboard chart
    #[serde(default)]
    pub trend_data: Option<Value>,
}
