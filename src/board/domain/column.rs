//! Column entity: an ordered container of tasks.

use super::{ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A named, ordered task container belonging to exactly one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    name: String,
    tasks: Vec<Task>,
}

impl Column {
    /// Creates a column with the given ordered tasks.
    #[must_use]
    pub fn new(id: ColumnId, name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            id,
            name: name.into(),
            tasks,
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered task sequence.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the index of the task with the given identifier.
    #[must_use]
    pub fn task_index_of(&self, task_id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == task_id)
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == task_id)
    }

    pub(crate) fn take_tasks(&mut self) -> Vec<Task> {
        std::mem::take(&mut self.tasks)
    }

    pub(crate) fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub(crate) fn task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id() == task_id)
    }
}
