//! Placement policy: pure domain rules checked before any optimistic
//! mutation is applied.
//!
//! The checks run synchronously against the pre-move snapshot; a rejected
//! placement therefore leaves no state to roll back.

use super::{BoardSnapshot, ColumnId, PlacementConflict, TaskId};

/// Maximum number of tasks one column may hold.
pub const COLUMN_CAPACITY: usize = 500;

/// Checks whether the task may be placed into the destination column.
///
/// Titles are compared case-insensitively against the destination column's
/// existing tasks, excluding the moving task itself so a within-column
/// reorder never conflicts with its own title. Entities absent from the
/// snapshot are not this policy's concern; the engine rejects stale
/// references separately, so an unknown task or column passes here.
///
/// # Errors
///
/// Returns [`PlacementConflict::DuplicateTitle`] when the destination
/// already holds a task with the same title, and
/// [`PlacementConflict::ColumnAtCapacity`] when the destination cannot take
/// another task.
pub fn can_place(
    snapshot: &BoardSnapshot,
    task_id: TaskId,
    dest_column_id: ColumnId,
) -> Result<(), PlacementConflict> {
    let Some(moving) = snapshot.find_task(task_id) else {
        return Ok(());
    };
    let Some(dest) = snapshot.column(dest_column_id) else {
        return Ok(());
    };

    let moving_title = moving.title().to_lowercase();
    let duplicate = dest
        .tasks()
        .iter()
        .filter(|t| t.id() != task_id)
        .any(|t| t.title().to_lowercase() == moving_title);
    if duplicate {
        return Err(PlacementConflict::DuplicateTitle {
            title: moving.title().to_owned(),
            column_name: dest.name().to_owned(),
        });
    }

    let occupancy = dest.tasks().iter().filter(|t| t.id() != task_id).count();
    if occupancy >= COLUMN_CAPACITY {
        return Err(PlacementConflict::ColumnAtCapacity {
            column_name: dest.name().to_owned(),
            capacity: COLUMN_CAPACITY,
        });
    }

    Ok(())
}
