//! Task management endpoints

use serde_json::{Value, json};

use super::client::ApiClient;
use crate::error::Result;
use crate::models::{ApiResponse, Task, TaskCreate, TaskPage, TaskUpdate, TasksQuery};

impl ApiClient {
    /// List tasks matching the given filters.
    pub async fn list_tasks(&self, query: &TasksQuery) -> Result<ApiResponse<TaskPage>> {
        self.get_with("/tasks/", query).await
    }

    /// Create a new task.
    pub async fn create_task(&self, task: &TaskCreate) -> Result<ApiResponse<Task>> {
        self.post("/tasks/", task).await
    }

    /// Fetch one task.
    pub async fn get_task(&self, task_id: i64) -> Result<ApiResponse<Task>> {
        self.get(&format!("/tasks/{task_id}/")).await
    }

    /// Apply a partial update to a task.
    pub async fn update_task(&self, task_id: i64, update: &TaskUpdate) -> Result<ApiResponse<Task>> {
        self.put(&format!("/tasks/{task_id}/"), update).await
    }

    /// Delete a task.
    pub async fn delete_task(&self, task_id: i64) -> Result<ApiResponse<Value>> {
        self.delete(&format!("/tasks/{task_id}/")).await
    }

    /// Cancel a running task.
    pub async fn cancel_task(&self, task_id: i64) -> Result<ApiResponse<Task>> {
        self.post(&format!("/tasks/{task_id}/cancel/"), &json!({})).await
    }
}
