//! Immutable point-in-time copy of one board's full column/task/subtask
//! tree.
//!
//! Snapshot editing methods never mutate the receiver: each returns a fresh
//! value with the move applied and all affected containers renumbered. The
//! engine keeps the prior snapshot reference for the lifetime of a
//! reconciling call, which makes rollback a pointer swap rather than an
//! inverse-operation replay.

use super::{
    BoardId, Column, ColumnId, SnapshotError, SubtaskId, Task, TaskId,
    ordering::{self, renumber},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Location of a task within a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLocation {
    /// Identifier of the owning column.
    pub column_id: ColumnId,
    /// Index of the owning column within the board.
    pub column_index: usize,
    /// Index of the task within the owning column.
    pub task_index: usize,
}

/// Immutable value holding one board's columns, tasks, and subtasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    board_id: BoardId,
    name: String,
    columns: Vec<Column>,
}

impl BoardSnapshot {
    /// Creates a snapshot from a board's ordered columns.
    #[must_use]
    pub fn new(board_id: BoardId, name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            board_id,
            name: name.into(),
            columns,
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// Returns the board name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered column sequence.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column with the given identifier.
    #[must_use]
    pub fn column(&self, column_id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id() == column_id)
    }

    /// Locates a task anywhere in the snapshot.
    #[must_use]
    pub fn locate_task(&self, task_id: TaskId) -> Option<TaskLocation> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(column_index, column)| {
                column.task_index_of(task_id).map(|task_index| TaskLocation {
                    column_id: column.id(),
                    column_index,
                    task_index,
                })
            })
    }

    /// Returns the task with the given identifier, wherever it lives.
    #[must_use]
    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.columns.iter().find_map(|c| c.task(task_id))
    }

    /// Returns a snapshot with the task moved to `dest_index` in
    /// `dest_column_id`, both containers renumbered densely, and the task's
    /// status rewritten to the destination column's name.
    ///
    /// A destination index past the end of the destination appends. When the
    /// destination equals the task's current column this degrades to a
    /// within-column reorder.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::TaskNotFound`] when the task is absent and
    /// [`SnapshotError::ColumnNotFound`] when the destination column is.
    pub fn with_task_moved(
        &self,
        task_id: TaskId,
        dest_column_id: ColumnId,
        dest_index: usize,
        clock: &impl Clock,
    ) -> Result<Self, SnapshotError> {
        let location = self
            .locate_task(task_id)
            .ok_or(SnapshotError::TaskNotFound(task_id))?;
        let dest_column_index = self
            .columns
            .iter()
            .position(|c| c.id() == dest_column_id)
            .ok_or(SnapshotError::ColumnNotFound(dest_column_id))?;

        let mut next = self.clone();
        if location.column_id == dest_column_id {
            reorder_within(&mut next, location, dest_index, clock);
        } else {
            transfer_across(&mut next, location, dest_column_index, dest_index, clock);
        }
        Ok(next)
    }

    /// Returns a snapshot with the task's subtasks rearranged into
    /// `new_order`, renumbered densely.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::TaskNotFound`] when the task is absent and
    /// [`SnapshotError::SubtaskSetMismatch`] when `new_order` is not a
    /// permutation of the task's current subtask identifiers.
    pub fn with_subtasks_reordered(
        &self,
        task_id: TaskId,
        new_order: &[SubtaskId],
        clock: &impl Clock,
    ) -> Result<Self, SnapshotError> {
        let mut next = self.clone();
        let task = next
            .task_mut(task_id)
            .ok_or(SnapshotError::TaskNotFound(task_id))?;

        let mut remaining = std::mem::take(task.subtasks_mut());
        let mut reordered = Vec::with_capacity(remaining.len());
        for subtask_id in new_order {
            let found = remaining.iter().position(|s| s.id() == *subtask_id);
            match found {
                Some(index) => reordered.push(remaining.remove(index)),
                None => return Err(SnapshotError::SubtaskSetMismatch(task_id)),
            }
        }
        if !remaining.is_empty() {
            return Err(SnapshotError::SubtaskSetMismatch(task_id));
        }
        renumber(&mut reordered);
        task.replace_subtasks(reordered);
        task.touch(clock);
        Ok(next)
    }

    /// Returns a snapshot with the subtask's completion flag flipped.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::TaskNotFound`] when the task is absent and
    /// [`SnapshotError::SubtaskNotFound`] when the subtask is.
    pub fn with_subtask_toggled(
        &self,
        task_id: TaskId,
        subtask_id: SubtaskId,
        clock: &impl Clock,
    ) -> Result<Self, SnapshotError> {
        let mut next = self.clone();
        let task = next
            .task_mut(task_id)
            .ok_or(SnapshotError::TaskNotFound(task_id))?;
        let subtask = task
            .subtasks_mut()
            .iter_mut()
            .find(|s| s.id() == subtask_id)
            .ok_or(SnapshotError::SubtaskNotFound {
                task_id,
                subtask_id,
            })?;
        subtask.toggle();
        task.touch(clock);
        Ok(next)
    }

    fn task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.columns.iter_mut().find_map(|c| c.task_mut(task_id))
    }
}

fn reorder_within(
    snapshot: &mut BoardSnapshot,
    location: TaskLocation,
    dest_index: usize,
    clock: &impl Clock,
) {
    let Some(column) = snapshot.columns.get_mut(location.column_index) else {
        return;
    };
    let moved_id = column.tasks().get(location.task_index).map(Task::id);
    let mut reordered = ordering::reorder(column.take_tasks(), location.task_index, dest_index);
    if let Some(task) = moved_id.and_then(|id| reordered.iter_mut().find(|t| t.id() == id)) {
        task.touch(clock);
    }
    column.replace_tasks(reordered);
}

fn transfer_across(
    snapshot: &mut BoardSnapshot,
    location: TaskLocation,
    dest_column_index: usize,
    dest_index: usize,
    clock: &impl Clock,
) {
    let dest_name = snapshot
        .columns
        .get(dest_column_index)
        .map(|c| c.name().to_owned())
        .unwrap_or_default();
    let moved_id = snapshot
        .columns
        .get(location.column_index)
        .and_then(|c| c.tasks().get(location.task_index))
        .map(Task::id);

    let taken_source = match snapshot.columns.get_mut(location.column_index) {
        Some(column) => column.take_tasks(),
        None => return,
    };
    let taken_dest = match snapshot.columns.get_mut(dest_column_index) {
        Some(column) => column.take_tasks(),
        None => return,
    };

    let (renumbered_source, mut renumbered_dest) =
        ordering::transfer(taken_source, taken_dest, location.task_index, dest_index);

    if let Some(task) = moved_id.and_then(|id| renumbered_dest.iter_mut().find(|t| t.id() == id)) {
        task.set_status(dest_name);
        task.touch(clock);
    }

    if let Some(column) = snapshot.columns.get_mut(location.column_index) {
        column.replace_tasks(renumbered_source);
    }
    if let Some(column) = snapshot.columns.get_mut(dest_column_index) {
        column.replace_tasks(renumbered_dest);
    }
}
