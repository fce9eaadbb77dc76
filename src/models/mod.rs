//! Request and response payload types

mod poc;
mod report;
mod scan;
mod settings;
mod task;

pub use poc::{PocResultsQuery, PocScanRequest, PocScanResponse, PocScanResult};
pub use report::{Report, ReportCreate, ReportPage, ReportUpdate, ReportsQuery};
pub use scan::{IpTarget, PortScanRequest, SubdomainRequest, UrlTarget};
pub use settings::{
    GeneralSettings, NotificationSettings, ScanSettings, SecuritySettings, Statistics,
    SystemInfo, SystemSettings,
};
pub use task::{Task, TaskCreate, TaskPage, TaskStatus, TaskUpdate, TasksQuery};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform envelope the backend wraps payloads in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T = Value> {
    /// Application-level status code
    pub code: i32,
    /// Outcome description
    pub message: String,
    /// Payload, absent on failures and deletions
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Whether the backend reported success.
    pub fn is_ok(&self) -> bool {
        self.code == 200
    }
}

/// Health probe payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Reported service state
    pub status: String,
}
