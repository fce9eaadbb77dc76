//! Settings and dashboard endpoints

use serde_json::Value;

use super::client::ApiClient;
use crate::error::Result;
use crate::models::{ApiResponse, Statistics, SystemInfo, SystemSettings};

impl ApiClient {
    /// Fetch the system settings document.
    pub async fn get_settings(&self) -> Result<ApiResponse<SystemSettings>> {
        self.get("/settings").await
    }

    /// Replace the system settings document.
    pub async fn update_settings(&self, settings: &SystemSettings) -> Result<ApiResponse<Value>> {
        self.put("/settings", settings).await
    }

    /// Backend runtime information.
    pub async fn get_system_info(&self) -> Result<ApiResponse<SystemInfo>> {
        self.get("/settings/system-info").await
    }

    /// Dashboard statistics.
    pub async fn get_statistics(&self) -> Result<ApiResponse<Statistics>> {
        self.get("/settings/statistics").await
    }
}
