//! Collaborator interfaces
//!
//! The registry never talks to storage, consensus or credential machinery
//! directly. It sees three narrow interfaces:
//!
//! - [`LedgerState`]: key-value get/put, scoped to one invocation
//! - [`TxnContext`]: id and timestamp of the current invocation
//! - [`IdentityResolver`]: who is calling
//!
//! Atomicity comes from the ledger: every read and write made through one
//! `LedgerState` commits together or not at all.

use crate::error::RegistryResult;
use crate::timestamp::TxnTimestamp;
use crate::types::CallerIdentity;

/// Key-value view of the ledger for one invocation.
///
/// Reads take `&mut self` because implementations track what was read for
/// conflict detection at commit.
pub trait LedgerState {
    /// Fetch raw bytes for `key`, `None` if absent.
    fn get_state(&mut self, key: &str) -> RegistryResult<Option<Vec<u8>>>;

    /// Write raw bytes under `key`.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> RegistryResult<()>;
}

/// Per-invocation transaction metadata. Never persisted.
pub trait TxnContext {
    /// Transaction id assigned by the ledger.
    fn txn_id(&self) -> &str;

    /// Transaction timestamp assigned by the ledger.
    fn txn_timestamp(&self) -> TxnTimestamp;
}

/// Identity collaborator.
pub trait IdentityResolver: Send + Sync {
    /// Resolve the caller of the current invocation.
    fn resolve_caller(&self) -> RegistryResult<CallerIdentity>;
}
