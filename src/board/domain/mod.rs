//! Domain model for the board ordering engine.
//!
//! The board domain models one board's column/task/subtask tree as an
//! immutable snapshot value, the pure dense-ordering helpers that move items
//! within it, and the placement policy evaluated before any optimistic
//! mutation. Infrastructure concerns stay outside the domain boundary.

mod board;
mod column;
mod error;
mod ids;
pub mod ordering;
pub mod policy;
mod snapshot;
mod subtask;
mod tag;
mod task;

pub use board::BoardSummary;
pub use column::Column;
pub use error::{PlacementConflict, SnapshotError};
pub use ids::{BoardId, ColumnId, SubtaskId, TagId, TaskId};
pub use snapshot::{BoardSnapshot, TaskLocation};
pub use subtask::Subtask;
pub use tag::Tag;
pub use task::Task;
