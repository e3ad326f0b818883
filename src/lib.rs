//! Corkboard: an optimistic ordering and reconciliation engine for kanban
//! boards.
//!
//! The crate computes dense position assignments when an item moves within
//! or across ordered containers, applies the change to the in-memory view
//! immediately, issues a minimal reconciling mutation to the authoritative
//! persistence backend, and either commits the optimistic state or rolls
//! back to the last known-good snapshot.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board model and ordering logic with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the persistence backend
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: snapshot model, ordering helpers, placement policy, cache,
//!   and reconciliation engine

pub mod board;
