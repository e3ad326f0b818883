//! Port contracts for the board ordering engine.
//!
//! Ports define infrastructure-agnostic interfaces consumed by the engine.

pub mod gateway;

pub use gateway::{
    GatewayError, GatewayResult, MoveTaskRequest, PersistenceGateway, ReorderSubtasksRequest,
    ReorderTaskRequest, SubtaskOrder, SubtaskUpdate, TaskPlacement, ToggleSubtaskRequest,
};
