//! Persistence gateway port: the asynchronous boundary between optimistic
//! board state and the authoritative backend.
//!
//! The gateway is consumed, never implemented here beyond the in-memory
//! adapter; real backends are a browser-local persistent store or a remote
//! API over a relational store. The engine treats every failure uniformly:
//! roll back the optimistic change and surface the backend's message.

use crate::board::domain::{ColumnId, SubtaskId, TaskId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Minimal diff reconciling a cross-column transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskRequest {
    /// Task being moved.
    pub task_id: TaskId,
    /// Destination column.
    pub dest_column_id: ColumnId,
    /// Dense order the task takes in the destination.
    pub dest_order: usize,
}

/// Minimal diff reconciling a within-column reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderTaskRequest {
    /// Task being reordered.
    pub task_id: TaskId,
    /// Dense order the task takes within its column.
    pub new_order: usize,
}

/// One entry of a full subtask order assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtaskOrder {
    /// Subtask identifier.
    pub id: SubtaskId,
    /// Dense order the subtask takes within its task.
    pub order: usize,
}

/// Full order assignment reconciling a subtask reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderSubtasksRequest {
    /// Owning task.
    pub task_id: TaskId,
    /// Complete ordered subtask assignment.
    pub subtasks: Vec<SubtaskOrder>,
}

/// Completion flip for one subtask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSubtaskRequest {
    /// Owning task.
    pub task_id: TaskId,
    /// Subtask whose completion flag flips.
    pub subtask_id: SubtaskId,
}

/// Backend confirmation of a task-level move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPlacement {
    /// Task identifier.
    pub task_id: TaskId,
    /// Column the task now belongs to.
    pub column_id: ColumnId,
    /// Dense order within that column.
    pub order: usize,
    /// Status string mirroring the column name.
    pub status: String,
}

/// Backend confirmation of a subtask toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtaskUpdate {
    /// Subtask identifier.
    pub subtask_id: SubtaskId,
    /// Completion flag after the toggle.
    pub is_completed: bool,
}

/// Durable-move contract consumed by the reconciliation engine.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Applies a cross-column transfer durably.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the backend rejects the move or is
    /// unreachable.
    async fn move_task(&self, request: MoveTaskRequest) -> GatewayResult<TaskPlacement>;

    /// Applies a within-column reorder durably.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the backend rejects the move or is
    /// unreachable.
    async fn reorder_task(&self, request: ReorderTaskRequest) -> GatewayResult<TaskPlacement>;

    /// Applies a full subtask order assignment durably.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the backend rejects the assignment or
    /// is unreachable.
    async fn reorder_subtasks(&self, request: ReorderSubtasksRequest) -> GatewayResult<()>;

    /// Flips a subtask's completion flag durably.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the backend rejects the toggle or is
    /// unreachable.
    async fn toggle_subtask(&self, request: ToggleSubtaskRequest) -> GatewayResult<SubtaskUpdate>;
}

/// Errors returned by persistence gateway implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend processed the request and refused it.
    #[error("backend rejected the mutation: {0}")]
    Rejected(String),

    /// The backend could not be reached.
    #[error("backend unreachable: {0}")]
    Unreachable(String),
}

impl GatewayError {
    /// Returns the human-readable backend message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(message) | Self::Unreachable(message) => message,
        }
    }
}
