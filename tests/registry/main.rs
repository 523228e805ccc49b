//! Registry Integration Tests
//!
//! Drives the registry through the public invocation surface.

#[path = "../common/mod.rs"]
mod common;

mod access_control;
mod lifecycle;
mod listing;
mod persistence;
