//! Unit tests for the board ordering engine.

mod fixtures;
mod ordering_tests;
mod policy_tests;
