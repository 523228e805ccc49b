//! In-memory ledger
//!
//! ## Design
//!
//! A single `RwLock` guards both the entry map and the commit counter, so a
//! committer that holds the write guard sees a frozen ledger: it can check
//! versions and apply its writes with no other commit interleaving.
//!
//! ## Versions
//!
//! - One global counter, incremented once per applied batch (not per key)
//! - Every key in a batch gets the same version
//! - Absent keys report version 0

use crate::stored_value::StoredValue;
use parking_lot::{RwLock, RwLockWriteGuard};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub(crate) struct LedgerInner {
    pub(crate) entries: BTreeMap<String, StoredValue>,
    pub(crate) version: u64,
}

/// Thread-safe in-memory key-value ledger.
///
/// `LedgerStore` is `Send + Sync`; share it with `Arc`.
///
/// # Example
///
/// ```
/// use custody_storage::LedgerStore;
///
/// let store = LedgerStore::new();
/// let v = store.write().apply(vec![("k".to_string(), b"v".to_vec())]);
/// assert_eq!(store.get("k").unwrap().version(), v);
/// ```
#[derive(Debug, Default)]
pub struct LedgerStore {
    inner: RwLock<LedgerInner>,
}

impl LedgerStore {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_inner(inner: LedgerInner) -> Self {
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Latest committed value for `key`.
    pub fn get(&self, key: &str) -> Option<StoredValue> {
        self.inner.read().entries.get(key).cloned()
    }

    /// Commit version of `key`, 0 if absent.
    pub fn version_of(&self, key: &str) -> u64 {
        self.inner
            .read()
            .entries
            .get(key)
            .map(StoredValue::version)
            .unwrap_or(0)
    }

    /// Version of the most recent commit.
    pub fn current_version(&self) -> u64 {
        self.inner.read().version
    }

    /// All keys, in order.
    pub fn keys(&self) -> Vec<String> {
        self.inner.read().entries.keys().cloned().collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// True if the ledger holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// Take the exclusive commit guard.
    pub fn write(&self) -> LedgerWriteGuard<'_> {
        LedgerWriteGuard {
            inner: self.inner.write(),
        }
    }

    pub(crate) fn with_inner<R>(&self, f: impl FnOnce(&LedgerInner) -> R) -> R {
        f(&self.inner.read())
    }
}

/// Exclusive access to the ledger for validate-then-apply commits.
pub struct LedgerWriteGuard<'a> {
    inner: RwLockWriteGuard<'a, LedgerInner>,
}

impl LedgerWriteGuard<'_> {
    /// Commit version of `key`, 0 if absent.
    pub fn version_of(&self, key: &str) -> u64 {
        self.inner
            .entries
            .get(key)
            .map(StoredValue::version)
            .unwrap_or(0)
    }

    /// Apply a batch of writes under one new commit version.
    ///
    /// An empty batch still consumes a version; callers skip the commit
    /// when they have nothing to write.
    pub fn apply(mut self, writes: impl IntoIterator<Item = (String, Vec<u8>)>) -> u64 {
        self.inner.version += 1;
        let version = self.inner.version;
        for (key, bytes) in writes {
            self.inner
                .entries
                .insert(key, StoredValue::new(bytes, version));
        }
        version
    }
}
