//! Error types for board domain validation and snapshot editing.

use super::{ColumnId, SubtaskId, TaskId};
use thiserror::Error;

/// Conflicts detected by the placement policy before any mutation is applied.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlacementConflict {
    /// The destination column already holds a task with the same title
    /// (compared case-insensitively).
    #[error("a task titled '{title}' already exists in column '{column_name}'")]
    DuplicateTitle {
        /// Title of the task being placed.
        title: String,
        /// Name of the destination column.
        column_name: String,
    },

    /// The destination column cannot accept another task.
    #[error("column '{column_name}' is at its capacity of {capacity} tasks")]
    ColumnAtCapacity {
        /// Name of the destination column.
        column_name: String,
        /// Maximum number of tasks a column may hold.
        capacity: usize,
    },
}

/// Errors returned by snapshot editing operations when a referenced entity
/// is absent from the snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// The task does not exist anywhere in the snapshot.
    #[error("task not found in snapshot: {0}")]
    TaskNotFound(TaskId),

    /// The column does not exist in the snapshot.
    #[error("column not found in snapshot: {0}")]
    ColumnNotFound(ColumnId),

    /// The subtask does not exist on the given task.
    #[error("subtask {subtask_id} not found on task {task_id}")]
    SubtaskNotFound {
        /// Owning task identifier.
        task_id: TaskId,
        /// Missing subtask identifier.
        subtask_id: SubtaskId,
    },

    /// A subtask reorder did not supply a permutation of the task's current
    /// subtask identifiers.
    #[error("subtask reorder for task {0} does not permute its current subtasks")]
    SubtaskSetMismatch(TaskId),
}
