//! Ledger storage for the custody registry
//!
//! This crate provides the key-value ledger the registry runs against:
//! - LedgerStore: thread-safe in-memory map of key to versioned bytes
//! - StoredValue: bytes plus the commit version that wrote them
//! - Snapshot files: save/load the whole ledger as JSON
//!
//! Transactions (read-set tracking, conflict detection) live in
//! `custody-concurrency`; this crate only offers the locked primitives
//! they are built from.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ledger;
pub mod snapshot;
pub mod stored_value;

pub use ledger::{LedgerStore, LedgerWriteGuard};
pub use snapshot::SnapshotError;
pub use stored_value::StoredValue;
