//! Concurrency Integration Tests
//!
//! Optimistic validation of concurrent registry commands.

#[path = "../common/mod.rs"]
mod common;

mod contention;
mod isolation;
