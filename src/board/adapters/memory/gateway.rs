//! In-memory persistence gateway for engine tests and local runs.
//!
//! Records every request it receives and acknowledges it, unless a failure
//! has been scripted with [`InMemoryGateway::fail_next`], in which case the
//! next request consumes the scripted error.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::board::domain::ColumnId;
use crate::board::ports::{
    GatewayError, GatewayResult, MoveTaskRequest, PersistenceGateway, ReorderSubtasksRequest,
    ReorderTaskRequest, SubtaskUpdate, TaskPlacement, ToggleSubtaskRequest,
};

/// A request observed by the in-memory gateway, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedRequest {
    /// Cross-column transfer.
    MoveTask(MoveTaskRequest),
    /// Within-column reorder.
    ReorderTask(ReorderTaskRequest),
    /// Full subtask order assignment.
    ReorderSubtasks(ReorderSubtasksRequest),
    /// Subtask completion flip.
    ToggleSubtask(ToggleSubtaskRequest),
}

#[derive(Debug, Default)]
struct GatewayState {
    recorded: Vec<RecordedRequest>,
    scripted_failures: Vec<GatewayError>,
}

/// Thread-safe recording gateway that succeeds unless told otherwise.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGateway {
    state: Arc<RwLock<GatewayState>>,
}

impl InMemoryGateway {
    /// Creates a gateway with no recorded requests and no scripted failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the next request to fail with the given error.
    ///
    /// Multiple scripted failures are consumed in the order they were
    /// scripted, one per request.
    pub fn fail_next(&self, error: GatewayError) {
        let mut state = lock_write(&self.state);
        state.scripted_failures.push(error);
    }

    /// Returns every request received so far, in arrival order.
    #[must_use]
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        lock_read(&self.state).recorded.clone()
    }

    /// Returns how many requests have been received.
    #[must_use]
    pub fn request_count(&self) -> usize {
        lock_read(&self.state).recorded.len()
    }

    fn admit(&self, request: RecordedRequest) -> GatewayResult<()> {
        let mut state = lock_write(&self.state);
        if state.scripted_failures.is_empty() {
            state.recorded.push(request);
            return Ok(());
        }
        Err(state.scripted_failures.remove(0))
    }
}

fn lock_read(
    state: &Arc<RwLock<GatewayState>>,
) -> std::sync::RwLockReadGuard<'_, GatewayState> {
    match state.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn lock_write(
    state: &Arc<RwLock<GatewayState>>,
) -> std::sync::RwLockWriteGuard<'_, GatewayState> {
    match state.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[async_trait]
impl PersistenceGateway for InMemoryGateway {
    async fn move_task(&self, request: MoveTaskRequest) -> GatewayResult<TaskPlacement> {
        let placement = TaskPlacement {
            task_id: request.task_id,
            column_id: request.dest_column_id,
            order: request.dest_order,
            status: String::new(),
        };
        self.admit(RecordedRequest::MoveTask(request))?;
        Ok(placement)
    }

    async fn reorder_task(&self, request: ReorderTaskRequest) -> GatewayResult<TaskPlacement> {
        // The double has no board knowledge; the placement echoes the
        // request and leaves column/status as acknowledgement filler.
        let placement = TaskPlacement {
            task_id: request.task_id,
            column_id: ColumnId::from_uuid(Uuid::nil()),
            order: request.new_order,
            status: String::new(),
        };
        self.admit(RecordedRequest::ReorderTask(request))?;
        Ok(placement)
    }

    async fn reorder_subtasks(&self, request: ReorderSubtasksRequest) -> GatewayResult<()> {
        self.admit(RecordedRequest::ReorderSubtasks(request))
    }

    async fn toggle_subtask(&self, request: ToggleSubtaskRequest) -> GatewayResult<SubtaskUpdate> {
        let update = SubtaskUpdate {
            subtask_id: request.subtask_id,
            is_completed: true,
        };
        self.admit(RecordedRequest::ToggleSubtask(request))?;
        Ok(update)
    }
}
