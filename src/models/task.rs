//! Task payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Task lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Queued, not yet started
    Pending,
    /// Currently executing
    Running,
    /// Finished successfully
    Completed,
    /// Finished with an error
    Failed,
    /// Cancelled by the user
    Cancelled,
}

/// Scan task as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task ID
    pub id: i64,
    /// Display name
    pub task_name: String,
    /// Kind of work: `scan`, `vulnerability`, ...
    pub task_type: String,
    /// Scan target
    pub target: String,
    /// Lifecycle state
    pub status: TaskStatus,
    /// Completion percentage, 0-100
    pub progress: u8,
    /// Task configuration
    #[serde(default)]
    pub config: Option<Value>,
    /// Result payload once finished
    #[serde(default)]
    pub result: Option<Value>,
    /// Failure description, if the task failed
    #[serde(default)]
    pub error_message: Option<String>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCreate {
    /// Display name
    pub task_name: String,
    /// Kind of work
    pub task_type: String,
    /// Scan target
    pub target: String,
    /// Optional task configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

impl TaskCreate {
    /// Task creation payload without extra configuration.
    pub fn new(
        task_name: impl Into<String>,
        task_type: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            task_type: task_type.into(),
            target: target.into(),
            config: None,
        }
    }
}

/// Partial task update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    /// New lifecycle state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Result payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

/// Task list filters and paging
#[derive(Debug, Clone, Default, Serialize)]
pub struct TasksQuery {
    /// Filter by lifecycle state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Filter by task type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    /// Offset into the result set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// One page of the task list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPage {
    /// Tasks on this page
    pub tasks: Vec<Task>,
    /// Total matching tasks
    pub total: u64,
    /// Offset this page starts at
    pub skip: u32,
    /// Requested page size
    pub limit: u32,
}
