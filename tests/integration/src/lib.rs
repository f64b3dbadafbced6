//! Integration test utilities for the church administration core
//!
//! This crate provides in-memory repository doubles and data builders for
//! driving the service layer end to end without a database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
