//! Tests for the placement policy.

use rstest::rstest;

use super::fixtures::{sample_board, task};
use crate::board::domain::{
    BoardId, BoardSnapshot, Column, ColumnId, PlacementConflict, TaskId,
    policy::{COLUMN_CAPACITY, can_place},
};

#[rstest]
fn placement_into_column_with_distinct_titles_is_allowed() {
    let board = sample_board();
    assert_eq!(can_place(&board.snapshot, board.task_x, board.doing), Ok(()));
}

#[rstest]
fn duplicate_title_in_destination_is_rejected() {
    let left = ColumnId::new();
    let right = ColumnId::new();
    let moving = task("Ship it", "Backlog", 0);
    let moving_id = moving.id();
    let snapshot = BoardSnapshot::new(
        BoardId::new(),
        "Board",
        vec![
            Column::new(left, "Backlog", vec![moving]),
            Column::new(right, "Done", vec![task("ship IT", "Done", 0)]),
        ],
    );

    assert_eq!(
        can_place(&snapshot, moving_id, right),
        Err(PlacementConflict::DuplicateTitle {
            title: "Ship it".to_owned(),
            column_name: "Done".to_owned(),
        })
    );
}

#[rstest]
fn moving_task_does_not_conflict_with_itself() {
    let board = sample_board();
    // A within-column placement compares against the destination excluding
    // the moving task, so its own title never collides.
    assert_eq!(can_place(&board.snapshot, board.task_x, board.todo), Ok(()));
}

#[rstest]
fn full_destination_column_is_rejected() {
    let source = ColumnId::new();
    let full = ColumnId::new();
    let moving = task("Straggler", "Source", 0);
    let moving_id = moving.id();
    let occupants = (0..COLUMN_CAPACITY)
        .map(|position| task(&format!("occupant {position}"), "Full", position))
        .collect();
    let snapshot = BoardSnapshot::new(
        BoardId::new(),
        "Board",
        vec![
            Column::new(source, "Source", vec![moving]),
            Column::new(full, "Full", occupants),
        ],
    );

    assert_eq!(
        can_place(&snapshot, moving_id, full),
        Err(PlacementConflict::ColumnAtCapacity {
            column_name: "Full".to_owned(),
            capacity: COLUMN_CAPACITY,
        })
    );
}

#[rstest]
fn unknown_task_or_column_passes_policy() {
    let board = sample_board();
    // Stale references are the engine's concern, not the policy's.
    assert_eq!(
        can_place(&board.snapshot, TaskId::new(), board.doing),
        Ok(())
    );
    assert_eq!(
        can_place(&board.snapshot, board.task_x, ColumnId::new()),
        Ok(())
    );
}
