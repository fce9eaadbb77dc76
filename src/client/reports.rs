//! Report management endpoints

use serde_json::Value;

use super::client::ApiClient;
use crate::error::Result;
use crate::models::{ApiResponse, Report, ReportCreate, ReportPage, ReportUpdate, ReportsQuery};

impl ApiClient {
    /// List reports matching the given filters.
    pub async fn list_reports(&self, query: &ReportsQuery) -> Result<ApiResponse<ReportPage>> {
        self.get_with("/reports", query).await
    }

    /// Create a new report.
    pub async fn create_report(&self, report: &ReportCreate) -> Result<ApiResponse<Report>> {
        self.post("/reports", report).await
    }

    /// Fetch one report.
    pub async fn get_report(&self, report_id: i64) -> Result<ApiResponse<Report>> {
        self.get(&format!("/reports/{report_id}")).await
    }

    /// Apply a partial update to a report.
    pub async fn update_report(
        &self,
        report_id: i64,
        update: &ReportUpdate,
    ) -> Result<ApiResponse<Report>> {
        self.put(&format!("/reports/{report_id}"), update).await
    }

    /// Delete a report.
    pub async fn delete_report(&self, report_id: i64) -> Result<ApiResponse<Value>> {
        self.delete(&format!("/reports/{report_id}")).await
    }

    /// Export a report in the given format (`json`, `pdf`, `html`).
    pub async fn export_report(&self, report_id: i64, format: &str) -> Result<ApiResponse<Report>> {
        self.get_with(&format!("/reports/{report_id}/export"), &[("format", format)])
            .await
    }
}
