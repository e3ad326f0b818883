//! Subtask entity carrying a dense position within its owning task.

use super::{SubtaskId, ordering::Sequenced};
use serde::{Deserialize, Serialize};

/// A checklist item belonging to exactly one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    id: SubtaskId,
    name: String,
    is_completed: bool,
    position: usize,
}

impl Subtask {
    /// Creates a subtask at the given position.
    #[must_use]
    pub fn new(id: SubtaskId, name: impl Into<String>, position: usize) -> Self {
        Self {
            id,
            name: name.into(),
            is_completed: false,
            position,
        }
    }

    /// Returns the subtask identifier.
    #[must_use]
    pub const fn id(&self) -> SubtaskId {
        self.id
    }

    /// Returns the subtask name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the subtask has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the dense position within the owning task.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Marks the subtask completed or not.
    #[must_use]
    pub fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    pub(crate) const fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}

impl Sequenced for Subtask {
    fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}
