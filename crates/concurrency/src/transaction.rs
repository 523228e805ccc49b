//! Ledger transactions
//!
//! A [`LedgerTransaction`] is the per-invocation view of the ledger. It
//! tracks every key it reads (with the version it saw) and buffers every
//! write. Nothing reaches the ledger until [`LedgerTransaction::commit`],
//! which validates the read set and applies the writes under one lock.
//!
//! Reads of keys this transaction already wrote return the buffered value
//! and do not enter the read set.

use crate::validation::{validate_read_set, ValidationResult};
use custody_core::{LedgerState, RegistryError, RegistryResult, TxnContext, TxnTimestamp};
use custody_storage::LedgerStore;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Commit failures
#[derive(Debug, Clone, Error)]
pub enum CommitError {
    /// Another transaction committed a key this one read
    #[error("commit failed: {} conflict(s) on {}", .0.conflict_count(), .0.conflicting_keys().join(", "))]
    ValidationFailed(ValidationResult),
}

impl From<CommitError> for RegistryError {
    fn from(e: CommitError) -> Self {
        match e {
            CommitError::ValidationFailed(result) => RegistryError::Conflict {
                reason: result
                    .conflicts
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            },
        }
    }
}

/// Outcome of a successful commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Ledger version assigned to the writes, `None` for read-only commits
    pub commit_version: Option<u64>,
    /// Number of keys written
    pub keys_written: usize,
}

/// One invocation's view of the ledger.
pub struct LedgerTransaction<'a> {
    store: &'a LedgerStore,
    txn_id: String,
    timestamp: TxnTimestamp,
    read_set: HashMap<String, u64>,
    write_set: BTreeMap<String, Vec<u8>>,
}

impl<'a> LedgerTransaction<'a> {
    /// Begin a transaction with a fresh id and the current time.
    pub fn begin(store: &'a LedgerStore) -> Self {
        Self::with_context(store, Uuid::new_v4().to_string(), TxnTimestamp::now())
    }

    /// Begin a transaction with a caller-supplied id and timestamp.
    pub fn with_context(
        store: &'a LedgerStore,
        txn_id: impl Into<String>,
        timestamp: TxnTimestamp,
    ) -> Self {
        Self {
            store,
            txn_id: txn_id.into(),
            timestamp,
            read_set: HashMap::new(),
            write_set: BTreeMap::new(),
        }
    }

    /// Version recorded for `key` in the read set, if it was read.
    pub fn read_version(&self, key: &str) -> Option<u64> {
        self.read_set.get(key).copied()
    }

    /// True if any write is buffered.
    pub fn has_writes(&self) -> bool {
        !self.write_set.is_empty()
    }

    /// Number of distinct keys read from the ledger.
    pub fn read_count(&self) -> usize {
        self.read_set.len()
    }

    /// Number of distinct keys written.
    pub fn write_count(&self) -> usize {
        self.write_set.len()
    }

    /// Validate the read set and apply the buffered writes atomically.
    ///
    /// Read-only transactions are still validated, so a caller that needs a
    /// consistent read can rely on `Ok`.
    pub fn commit(self) -> Result<CommitOutcome, CommitError> {
        let guard = self.store.write();

        let validation = validate_read_set(&self.read_set, &guard);
        if !validation.is_valid() {
            debug!(
                txn_id = %self.txn_id,
                conflicts = validation.conflict_count(),
                "Transaction aborted"
            );
            return Err(CommitError::ValidationFailed(validation));
        }

        if self.write_set.is_empty() {
            return Ok(CommitOutcome {
                commit_version: None,
                keys_written: 0,
            });
        }

        let keys_written = self.write_set.len();
        let version = guard.apply(self.write_set);
        debug!(txn_id = %self.txn_id, version, keys_written, "Transaction committed");
        Ok(CommitOutcome {
            commit_version: Some(version),
            keys_written,
        })
    }
}

impl LedgerState for LedgerTransaction<'_> {
    fn get_state(&mut self, key: &str) -> RegistryResult<Option<Vec<u8>>> {
        if let Some(bytes) = self.write_set.get(key) {
            return Ok(Some(bytes.clone()));
        }

        match self.store.get(key) {
            Some(stored) => {
                self.read_set.insert(key.to_string(), stored.version());
                Ok(Some(stored.into_bytes()))
            }
            None => {
                self.read_set.insert(key.to_string(), 0);
                Ok(None)
            }
        }
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> RegistryResult<()> {
        if key.is_empty() {
            return Err(RegistryError::store("ledger key cannot be empty"));
        }
        self.write_set.insert(key.to_string(), value);
        Ok(())
    }
}

impl TxnContext for LedgerTransaction<'_> {
    fn txn_id(&self) -> &str {
        &self.txn_id
    }

    fn txn_timestamp(&self) -> TxnTimestamp {
        self.timestamp
    }
}
