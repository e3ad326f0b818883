//! Tag entity associated to tasks many-to-many.
//!
//! Tags are owned by an external collaborator and read-mostly here; the
//! engine never creates, renames, or recolours them.

use super::TagId;
use serde::{Deserialize, Serialize};

/// A named, coloured label attachable to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    id: TagId,
    name: String,
    color: String,
}

impl Tag {
    /// Creates a tag.
    #[must_use]
    pub fn new(id: TagId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }

    /// Returns the tag identifier.
    #[must_use]
    pub const fn id(&self) -> TagId {
        self.id
    }

    /// Returns the tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tag colour as supplied by the collaborator (for example
    /// a hex string).
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}
