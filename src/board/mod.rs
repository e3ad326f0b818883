//! Optimistic ordering and reconciliation for one kanban board.
//!
//! Boards contain ordered columns, columns contain ordered tasks, tasks
//! contain ordered subtasks, each position forming a dense 0-based
//! sequence. Moves are applied to the in-memory snapshot immediately and
//! reconciled asynchronously against the persistence backend; a failed
//! reconciliation swaps the retained pre-move snapshot back in. The module
//! follows hexagonal architecture:
//!
//! - Domain types, ordering helpers, and the placement policy in [`domain`]
//! - The persistence gateway contract in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The cache and engine in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
