//! POC scan endpoints

use serde_json::Value;

use super::client::ApiClient;
use crate::error::Result;
use crate::models::{ApiResponse, PocResultsQuery, PocScanRequest, PocScanResponse};

impl ApiClient {
    /// Available POC identifiers. The backend returns a bare list here,
    /// not the usual envelope.
    pub async fn poc_types(&self) -> Result<Vec<String>> {
        self.get("/poc/types").await
    }

    /// Run a POC scan.
    pub async fn poc_scan(&self, request: &PocScanRequest) -> Result<PocScanResponse> {
        self.post("/poc/scan", request).await
    }

    /// List stored POC results.
    pub async fn poc_results(&self, query: &PocResultsQuery) -> Result<ApiResponse<Value>> {
        self.get_with("/poc/results", query).await
    }

    /// Fetch one stored POC result.
    pub async fn poc_result(&self, result_id: i64) -> Result<ApiResponse<Value>> {
        self.get(&format!("/poc/results/{result_id}")).await
    }

    /// Export a POC result in the given format.
    pub async fn export_poc_report(
        &self,
        result_id: i64,
        format: &str,
    ) -> Result<ApiResponse<Value>> {
        self.get_with(
            &format!("/poc/results/{result_id}/export"),
            &[("format", format)],
        )
        .await
    }
}
