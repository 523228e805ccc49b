//! Optimistic concurrency for the custody ledger
//!
//! This crate implements optimistic concurrency control (OCC) with:
//! - LedgerTransaction: read/write set tracking per invocation
//! - Conflict detection at commit time (first-committer-wins on the read set)
//! - Atomic apply: all writes of a transaction land under one version

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod transaction;
pub mod validation;

pub use transaction::{CommitError, CommitOutcome, LedgerTransaction};
pub use validation::{validate_read_set, ConflictType, ValidationResult};
