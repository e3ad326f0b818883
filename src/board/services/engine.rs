//! Optimistic move orchestration: validate, apply, reconcile, settle.
//!
//! Every operation follows the same shape. The placement policy and stale
//! checks run synchronously against the current snapshot; the move is
//! applied to the cache before the gateway is consulted, so the UI never
//! waits on the backend; the gateway call is the only suspension point; on
//! failure the retained pre-move snapshot is swapped back in.
//!
//! The read-compute-swap of an optimistic application runs under a single
//! apply lock, so an operation admitted concurrently with another (a
//! subtask reorder alongside a structural move, or subtask operations on
//! two different tasks) always bases its new snapshot on the latest one.
//! The lock is never held across the gateway await.
//!
//! Per board, at most one structural move (reorder or transfer) is in
//! flight; a second gesture arriving while one is pending is rejected, not
//! queued. Subtask-scoped operations hold an independent per-task slot, so
//! they only serialise against operations touching the same task.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, warn};

use crate::board::domain::{
    BoardSnapshot, ColumnId, PlacementConflict, SnapshotError, Subtask, SubtaskId, TaskId, policy,
};
use crate::board::ports::{
    GatewayError, GatewayResult, MoveTaskRequest, PersistenceGateway, ReorderSubtasksRequest,
    ReorderTaskRequest, SubtaskOrder, ToggleSubtaskRequest,
};
use crate::board::services::cache::ActiveBoardCache;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the reconciliation engine.
///
/// All variants are recovered locally: a conflict or stale reference leaves
/// state untouched, an in-flight rejection drops the gesture, and a
/// reconciliation failure has already been rolled back when it surfaces.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The placement policy rejected the move before anything was applied.
    #[error(transparent)]
    Conflict(#[from] PlacementConflict),

    /// A referenced entity no longer exists in the current snapshot.
    #[error(transparent)]
    Stale(#[from] SnapshotError),

    /// Another operation for the same scope is awaiting confirmation.
    #[error("a move is already awaiting confirmation for this scope")]
    MoveInFlight,

    /// The backend refused the move; the optimistic change was rolled back.
    #[error("reconciliation failed, optimistic change rolled back: {message}")]
    ReconciliationFailed {
        /// Human-readable message from the backend.
        message: String,
    },
}

#[derive(Debug, Default)]
struct Inflight {
    /// Task whose structural move is awaiting confirmation, if any.
    structural: Option<TaskId>,
    /// Tasks with a subtask-scoped operation awaiting confirmation.
    tasks: HashSet<TaskId>,
}

impl Inflight {
    fn admit_structural(&mut self, task_id: TaskId) -> EngineResult<()> {
        if self.structural.is_some() || self.tasks.contains(&task_id) {
            return Err(EngineError::MoveInFlight);
        }
        self.structural = Some(task_id);
        Ok(())
    }

    fn admit_task(&mut self, task_id: TaskId) -> EngineResult<()> {
        if self.tasks.contains(&task_id) || self.structural == Some(task_id) {
            return Err(EngineError::MoveInFlight);
        }
        self.tasks.insert(task_id);
        Ok(())
    }
}

/// Orchestrates optimistic moves against the active board.
pub struct ReconciliationEngine<G, C>
where
    G: PersistenceGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
    cache: Arc<ActiveBoardCache>,
    inflight: Mutex<Inflight>,
    /// Serialises the read-compute-swap of every optimistic application and
    /// rollback. Held only across synchronous sections, never across the
    /// gateway await.
    apply: Mutex<()>,
}

impl<G, C> ReconciliationEngine<G, C>
where
    G: PersistenceGateway,
    C: Clock + Send + Sync,
{
    /// Creates an engine bound to one session's cache.
    #[must_use]
    pub fn new(gateway: Arc<G>, clock: Arc<C>, cache: Arc<ActiveBoardCache>) -> Self {
        Self {
            gateway,
            clock,
            cache,
            inflight: Mutex::new(Inflight::default()),
            apply: Mutex::new(()),
        }
    }

    /// Returns the cache this engine mutates, for read-only subscription.
    #[must_use]
    pub const fn cache(&self) -> &Arc<ActiveBoardCache> {
        &self.cache
    }

    /// Returns whether a structural move is awaiting confirmation.
    ///
    /// The UI uses this flag to disable further drag gestures.
    #[must_use]
    pub fn is_structural_move_pending(&self) -> bool {
        self.lock_inflight().structural.is_some()
    }

    /// Returns whether a subtask-scoped operation on the given task is
    /// awaiting confirmation.
    #[must_use]
    pub fn is_task_pending(&self, task_id: TaskId) -> bool {
        self.lock_inflight().tasks.contains(&task_id)
    }

    /// Moves a task to `new_index` within its current column.
    ///
    /// Moving a task to the position it already occupies is a no-op: no
    /// optimistic update is applied and no backend call is issued. An index
    /// past the end of the column moves the task to the last position.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MoveInFlight`] while a structural move is
    /// pending, [`EngineError::Stale`] when the task has vanished, and
    /// [`EngineError::ReconciliationFailed`] after a rollback.
    pub async fn reorder_task(&self, task_id: TaskId, new_index: usize) -> EngineResult<()> {
        self.ensure_structural_idle()?;
        let (prior, target) = {
            let _apply = self.lock_apply();
            let prior = self.cache.snapshot();
            let location = prior
                .locate_task(task_id)
                .ok_or(SnapshotError::TaskNotFound(task_id))?;
            let column_len = prior
                .column(location.column_id)
                .map_or(0, |c| c.tasks().len());
            let target = new_index.min(column_len.saturating_sub(1));
            if target == location.task_index {
                return Ok(());
            }

            policy::can_place(&prior, task_id, location.column_id)?;
            let next = prior.with_task_moved(task_id, location.column_id, target, &*self.clock)?;

            self.lock_inflight().admit_structural(task_id)?;
            self.cache.set_snapshot(Arc::new(next));
            (prior, target)
        };
        debug!(%task_id, target, "within-column reorder applied optimistically");

        let outcome = self
            .gateway
            .reorder_task(ReorderTaskRequest {
                task_id,
                new_order: target,
            })
            .await;
        self.settle_structural(&prior, outcome.map(|_| ()))
    }

    /// Moves a task into `dest_column_id` at `dest_index`, rewriting its
    /// status to the destination column's name.
    ///
    /// A destination index past the end appends. When the destination is the
    /// task's current column this degrades to [`Self::reorder_task`]
    /// semantics, including the same-position no-op.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Conflict`] when the destination already holds
    /// a task with the same title or is at capacity,
    /// [`EngineError::MoveInFlight`] while a structural move is pending,
    /// [`EngineError::Stale`] when the task or column has vanished, and
    /// [`EngineError::ReconciliationFailed`] after a rollback.
    pub async fn move_task(
        &self,
        task_id: TaskId,
        dest_column_id: ColumnId,
        dest_index: usize,
    ) -> EngineResult<()> {
        self.ensure_structural_idle()?;
        let (prior, target) = {
            let _apply = self.lock_apply();
            let prior = self.cache.snapshot();
            let location = prior
                .locate_task(task_id)
                .ok_or(SnapshotError::TaskNotFound(task_id))?;
            let dest_len = prior
                .column(dest_column_id)
                .ok_or(SnapshotError::ColumnNotFound(dest_column_id))?
                .tasks()
                .len();

            let same_column = location.column_id == dest_column_id;
            let target = if same_column {
                dest_index.min(dest_len.saturating_sub(1))
            } else {
                dest_index.min(dest_len)
            };
            if same_column && target == location.task_index {
                return Ok(());
            }

            policy::can_place(&prior, task_id, dest_column_id)?;
            let next = prior.with_task_moved(task_id, dest_column_id, target, &*self.clock)?;

            self.lock_inflight().admit_structural(task_id)?;
            self.cache.set_snapshot(Arc::new(next));
            (prior, target)
        };
        debug!(%task_id, %dest_column_id, target, "transfer applied optimistically");

        let outcome = self
            .gateway
            .move_task(MoveTaskRequest {
                task_id,
                dest_column_id,
                dest_order: target,
            })
            .await;
        self.settle_structural(&prior, outcome.map(|_| ()))
    }

    /// Rearranges a task's subtasks into `new_order`, which must be a
    /// permutation of the task's current subtask identifiers.
    ///
    /// Submitting the current order is a no-op. Keyed per task: this does
    /// not block, and is not blocked by, operations on other tasks.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MoveInFlight`] while another operation on the
    /// same task is pending, [`EngineError::Stale`] when the task has
    /// vanished or `new_order` is not a permutation, and
    /// [`EngineError::ReconciliationFailed`] after a rollback.
    pub async fn reorder_subtasks(
        &self,
        task_id: TaskId,
        new_order: Vec<SubtaskId>,
    ) -> EngineResult<()> {
        let prior = {
            let _apply = self.lock_apply();
            let prior = self.cache.snapshot();
            let task = prior
                .find_task(task_id)
                .ok_or(SnapshotError::TaskNotFound(task_id))?;
            let current: Vec<SubtaskId> = task.subtasks().iter().map(Subtask::id).collect();
            if current == new_order {
                return Ok(());
            }

            let next = prior.with_subtasks_reordered(task_id, &new_order, &*self.clock)?;

            self.lock_inflight().admit_task(task_id)?;
            self.cache.set_snapshot(Arc::new(next));
            prior
        };
        debug!(%task_id, "subtask reorder applied optimistically");

        let subtasks = new_order
            .into_iter()
            .enumerate()
            .map(|(order, id)| SubtaskOrder { id, order })
            .collect();
        let outcome = self
            .gateway
            .reorder_subtasks(ReorderSubtasksRequest { task_id, subtasks })
            .await;
        self.settle_task(task_id, &prior, outcome)
    }

    /// Flips a subtask's completion flag.
    ///
    /// Shares the per-task slot with [`Self::reorder_subtasks`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MoveInFlight`] while another operation on the
    /// same task is pending, [`EngineError::Stale`] when the task or subtask
    /// has vanished, and [`EngineError::ReconciliationFailed`] after a
    /// rollback.
    pub async fn toggle_subtask(
        &self,
        task_id: TaskId,
        subtask_id: SubtaskId,
    ) -> EngineResult<()> {
        let prior = {
            let _apply = self.lock_apply();
            let prior = self.cache.snapshot();
            let next = prior.with_subtask_toggled(task_id, subtask_id, &*self.clock)?;

            self.lock_inflight().admit_task(task_id)?;
            self.cache.set_snapshot(Arc::new(next));
            prior
        };
        debug!(%task_id, %subtask_id, "subtask toggle applied optimistically");

        let outcome = self
            .gateway
            .toggle_subtask(ToggleSubtaskRequest {
                task_id,
                subtask_id,
            })
            .await;
        self.settle_task(task_id, &prior, outcome.map(|_| ()))
    }

    fn ensure_structural_idle(&self) -> EngineResult<()> {
        if self.lock_inflight().structural.is_some() {
            return Err(EngineError::MoveInFlight);
        }
        Ok(())
    }

    fn settle_structural(
        &self,
        prior: &Arc<BoardSnapshot>,
        outcome: GatewayResult<()>,
    ) -> EngineResult<()> {
        let settled = self.settle(prior, outcome);
        self.lock_inflight().structural = None;
        settled
    }

    fn settle_task(
        &self,
        task_id: TaskId,
        prior: &Arc<BoardSnapshot>,
        outcome: GatewayResult<()>,
    ) -> EngineResult<()> {
        let settled = self.settle(prior, outcome);
        self.lock_inflight().tasks.remove(&task_id);
        settled
    }

    fn settle(
        &self,
        prior: &Arc<BoardSnapshot>,
        outcome: GatewayResult<()>,
    ) -> EngineResult<()> {
        match outcome {
            Ok(()) => {
                debug!("reconciliation committed");
                Ok(())
            }
            Err(error) => {
                {
                    let _apply = self.lock_apply();
                    self.cache.set_snapshot(Arc::clone(prior));
                }
                warn!(%error, "reconciliation failed, optimistic change rolled back");
                Err(reconciliation_failure(&error))
            }
        }
    }

    fn lock_inflight(&self) -> MutexGuard<'_, Inflight> {
        self.inflight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_apply(&self) -> MutexGuard<'_, ()> {
        self.apply.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn reconciliation_failure(error: &GatewayError) -> EngineError {
    EngineError::ReconciliationFailed {
        message: error.message().to_owned(),
    }
}
