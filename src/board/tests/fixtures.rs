//! Shared board fixtures for unit tests.

use mockable::{Clock, DefaultClock};

use crate::board::domain::{
    BoardId, BoardSnapshot, Column, ColumnId, Subtask, SubtaskId, Tag, TagId, Task, TaskId,
};

/// A small two-column board with a subtasked, tagged first task.
///
/// Layout: column "Todo" holds tasks "X" (three subtasks, one tag, a
/// description and due date) and "Y"; column "Doing" holds task "Z".
pub struct SampleBoard {
    pub snapshot: BoardSnapshot,
    pub board_id: BoardId,
    pub todo: ColumnId,
    pub doing: ColumnId,
    pub task_x: TaskId,
    pub task_y: TaskId,
    pub task_z: TaskId,
    pub x_subtasks: Vec<SubtaskId>,
    pub urgent: Tag,
}

pub fn task(title: &str, status: &str, position: usize) -> Task {
    Task::new(TaskId::new(), title, status, position, &DefaultClock)
}

pub fn sample_board() -> SampleBoard {
    let board_id = BoardId::new();
    let todo = ColumnId::new();
    let doing = ColumnId::new();

    let x_subtasks: Vec<SubtaskId> = (0..3).map(|_| SubtaskId::new()).collect();
    let subtasks: Vec<Subtask> = x_subtasks
        .iter()
        .enumerate()
        .map(|(position, id)| {
            Subtask::new(*id, format!("step {position}"), position).with_completed(position == 2)
        })
        .collect();

    let urgent = Tag::new(TagId::new(), "urgent", "#ff5555");
    let task_x = task("X", "Todo", 0)
        .with_subtasks(subtasks)
        .with_tags([urgent.id()])
        .with_description("ship the launch checklist")
        .with_due_date(DefaultClock.utc());
    let task_y = task("Y", "Todo", 1);
    let task_z = task("Z", "Doing", 0);
    let (x_id, y_id, z_id) = (task_x.id(), task_y.id(), task_z.id());

    let snapshot = BoardSnapshot::new(
        board_id,
        "Launch plan",
        vec![
            Column::new(todo, "Todo", vec![task_x, task_y]),
            Column::new(doing, "Doing", vec![task_z]),
        ],
    );

    SampleBoard {
        snapshot,
        board_id,
        todo,
        doing,
        task_x: x_id,
        task_y: y_id,
        task_z: z_id,
        x_subtasks,
        urgent,
    }
}

/// Asserts every column's task positions and every task's subtask positions
/// form the dense sequence `{0, …, n-1}`.
pub fn assert_dense(snapshot: &BoardSnapshot) {
    for column in snapshot.columns() {
        let positions: Vec<usize> = column.tasks().iter().map(Task::position).collect();
        let expected: Vec<usize> = (0..column.tasks().len()).collect();
        assert_eq!(positions, expected, "column '{}' not dense", column.name());
        for task in column.tasks() {
            let sub_positions: Vec<usize> =
                task.subtasks().iter().map(Subtask::position).collect();
            let sub_expected: Vec<usize> = (0..task.subtasks().len()).collect();
            assert_eq!(
                sub_positions,
                sub_expected,
                "task '{}' subtasks not dense",
                task.title()
            );
        }
    }
}
