//! Task entity: the unit moved within and across columns.

use super::{Subtask, TagId, TaskId, ordering::Sequenced};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A card on the board, owned by exactly one column.
///
/// The `status` field is a denormalised mirror of the owning column's name;
/// the reconciliation engine rewrites it on every cross-column transfer so
/// the two never diverge in a committed snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    status: String,
    position: usize,
    subtasks: Vec<Subtask>,
    tags: Vec<TagId>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task in the column named by `status` at the given position.
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        status: impl Into<String>,
        position: usize,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            due_date: None,
            status: status.into(),
            position,
            subtasks: Vec::new(),
            tags: Vec::new(),
            updated_at: clock.utc(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the ordered subtask sequence.
    #[must_use]
    pub fn with_subtasks(mut self, subtasks: impl IntoIterator<Item = Subtask>) -> Self {
        self.subtasks = subtasks.into_iter().collect();
        self
    }

    /// Sets the associated tag identifiers.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = TagId>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the status string mirroring the owning column's name.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the dense position within the owning column.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the ordered subtask sequence.
    #[must_use]
    pub fn subtasks(&self) -> &[Subtask] {
        &self.subtasks
    }

    /// Returns the associated tag identifiers.
    #[must_use]
    pub fn tags(&self) -> &[TagId] {
        &self.tags
    }

    /// Returns the timestamp of the last engine mutation.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub(crate) fn subtasks_mut(&mut self) -> &mut Vec<Subtask> {
        &mut self.subtasks
    }

    pub(crate) fn replace_subtasks(&mut self, subtasks: Vec<Subtask>) {
        self.subtasks = subtasks;
    }

    pub(crate) fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

impl Sequenced for Task {
    fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}
