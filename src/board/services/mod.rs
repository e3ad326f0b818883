//! Application services: the active board cache and the reconciliation
//! engine that mutates it.

mod cache;
mod engine;

pub use cache::{ActiveBoardCache, SnapshotObserver, SubscriptionId, UnknownBoard};
pub use engine::{EngineError, EngineResult, ReconciliationEngine};
