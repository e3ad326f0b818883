//! Owned store for the active board snapshot and the session's board list.
//!
//! This is the single shared reference the rest of the application reads.
//! All reads hand out `Arc<BoardSnapshot>` values, safe to hold across
//! renders; [`ActiveBoardCache::set_snapshot`] is the only mutation entry
//! point, and the reconciliation engine is its only caller for structural
//! state. Observers subscribe to be notified after every swap.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;
use tracing::{debug, info};

use crate::board::domain::{BoardId, BoardSnapshot, BoardSummary};

/// Callback invoked with the new snapshot after every swap.
pub type SnapshotObserver = dyn Fn(&Arc<BoardSnapshot>) + Send + Sync;

/// Handle identifying one subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Error returned when activating a board absent from the session list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("board not found in session list: {0}")]
pub struct UnknownBoard(pub BoardId);

struct CacheState {
    snapshot: Arc<BoardSnapshot>,
    boards: Vec<BoardSummary>,
    observers: HashMap<u64, Arc<SnapshotObserver>>,
    next_subscription: u64,
}

/// Holds the current board snapshot and board list for one session.
pub struct ActiveBoardCache {
    state: RwLock<CacheState>,
}

impl ActiveBoardCache {
    /// Creates a cache seeded with the active board's snapshot and the
    /// session's board list.
    #[must_use]
    pub fn new(snapshot: BoardSnapshot, boards: Vec<BoardSummary>) -> Self {
        Self {
            state: RwLock::new(CacheState {
                snapshot: Arc::new(snapshot),
                boards,
                observers: HashMap::new(),
                next_subscription: 0,
            }),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<BoardSnapshot> {
        Arc::clone(&self.read().snapshot)
    }

    /// Returns the session's board list.
    #[must_use]
    pub fn boards(&self) -> Vec<BoardSummary> {
        self.read().boards.clone()
    }

    /// Swaps in a new snapshot and notifies every observer.
    ///
    /// This is the sole mutation entry point for board structure; optimistic
    /// application, commit, and rollback all pass through here.
    pub fn set_snapshot(&self, snapshot: Arc<BoardSnapshot>) {
        let observers: Vec<Arc<SnapshotObserver>> = {
            let mut state = self.write();
            state.snapshot = Arc::clone(&snapshot);
            state.observers.values().map(Arc::clone).collect()
        };
        debug!(board_id = %snapshot.board_id(), "snapshot swapped");
        for observer in observers {
            observer(&snapshot);
        }
    }

    /// Marks the given board active and every other board inactive.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownBoard`] when the board is not in the session list;
    /// the list is left unchanged.
    pub fn activate_board(&self, board_id: BoardId) -> Result<(), UnknownBoard> {
        let mut state = self.write();
        if !state.boards.iter().any(|b| b.id() == board_id) {
            return Err(UnknownBoard(board_id));
        }
        for board in &mut state.boards {
            board.set_active(board.id() == board_id);
        }
        info!(%board_id, "board activated");
        Ok(())
    }

    /// Registers an observer called after every snapshot swap.
    pub fn subscribe(
        &self,
        observer: impl Fn(&Arc<BoardSnapshot>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let mut state = self.write();
        let id = state.next_subscription;
        state.next_subscription += 1;
        state.observers.insert(id, Arc::new(observer));
        SubscriptionId(id)
    }

    /// Removes a previously registered observer. Unknown handles are
    /// ignored.
    pub fn unsubscribe(&self, subscription: SubscriptionId) {
        let mut state = self.write();
        state.observers.remove(&subscription.0);
    }

    fn read(&self) -> RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
