//! In-memory ledger view for unit tests.

use custody_core::{LedgerState, RegistryError, RegistryResult, TxnContext, TxnTimestamp};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub(crate) struct MemState {
    entries: HashMap<String, Vec<u8>>,
    txn_id: String,
    timestamp: TxnTimestamp,
    failing_key: Option<String>,
}

impl MemState {
    pub(crate) fn with_context(txn_id: &str, timestamp: TxnTimestamp) -> Self {
        Self {
            txn_id: txn_id.to_string(),
            timestamp,
            ..Self::default()
        }
    }

    pub(crate) fn insert(&mut self, key: &str, bytes: &[u8]) {
        self.entries.insert(key.to_string(), bytes.to_vec());
    }

    pub(crate) fn raw(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Make every read of `key` fail with a store error.
    pub(crate) fn fail_reads_of(&mut self, key: &str) {
        self.failing_key = Some(key.to_string());
    }
}

impl LedgerState for MemState {
    fn get_state(&mut self, key: &str) -> RegistryResult<Option<Vec<u8>>> {
        if self.failing_key.as_deref() == Some(key) {
            return Err(RegistryError::store(format!("read of '{}' failed", key)));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> RegistryResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

impl TxnContext for MemState {
    fn txn_id(&self) -> &str {
        &self.txn_id
    }

    fn txn_timestamp(&self) -> TxnTimestamp {
        self.timestamp
    }
}
