//! Board list entry exposed alongside the active snapshot.

use super::BoardId;
use serde::{Deserialize, Serialize};

/// A board as it appears in the session's board list.
///
/// At most one summary is active at a time; the active-board cache is the
/// only writer of the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    id: BoardId,
    name: String,
    is_active: bool,
}

impl BoardSummary {
    /// Creates a board summary.
    #[must_use]
    pub fn new(id: BoardId, name: impl Into<String>, is_active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_active,
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the board name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether this board is the session's active board.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    pub(crate) const fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }
}
