//! Ledger snapshot files
//!
//! A snapshot is a JSON document holding the commit counter and every entry
//! with its version. Values are base64 so arbitrary bytes survive.
//!
//! ```json
//! { "version": 3, "entries": [ { "key": "v5cIDs", "version": 3, "value": "eyJ2NWNzIjpbXX0=" } ] }
//! ```

use crate::ledger::{LedgerInner, LedgerStore};
use crate::stored_value::StoredValue;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Snapshot read/write failures
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// File could not be read or written
    #[error("snapshot I/O error at '{path}': {source}")]
    Io {
        /// Snapshot path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File content is not a valid snapshot
    #[error("invalid snapshot at '{path}': {reason}")]
    Format {
        /// Snapshot path
        path: PathBuf,
        /// Decoder message
        reason: String,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    version: u64,
    entries: Vec<SnapshotEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEntry {
    key: String,
    version: u64,
    value: String,
}

impl LedgerStore {
    /// Write the whole ledger to `path`.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), SnapshotError> {
        let file = self.with_inner(|inner| SnapshotFile {
            version: inner.version,
            entries: inner
                .entries
                .iter()
                .map(|(key, sv)| SnapshotEntry {
                    key: key.clone(),
                    version: sv.version(),
                    value: STANDARD.encode(sv.bytes()),
                })
                .collect(),
        });
        let json = serde_json::to_vec_pretty(&file).map_err(|e| SnapshotError::Format {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, json).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), entries = file.entries.len(), "Saved ledger snapshot");
        Ok(())
    }

    /// Load a ledger from `path`.
    pub fn load_snapshot(path: &Path) -> Result<Self, SnapshotError> {
        let bytes = std::fs::read(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let format_err = |reason: String| SnapshotError::Format {
            path: path.to_path_buf(),
            reason,
        };
        let file: SnapshotFile =
            serde_json::from_slice(&bytes).map_err(|e| format_err(e.to_string()))?;

        let mut inner = LedgerInner {
            version: file.version,
            ..LedgerInner::default()
        };
        for entry in file.entries {
            if entry.version > file.version {
                return Err(format_err(format!(
                    "entry '{}' has version {} beyond ledger version {}",
                    entry.key, entry.version, file.version
                )));
            }
            let value = STANDARD
                .decode(entry.value.as_bytes())
                .map_err(|e| format_err(format!("entry '{}': {}", entry.key, e)))?;
            inner
                .entries
                .insert(entry.key, StoredValue::new(value, entry.version));
        }
        debug!(path = %path.display(), entries = inner.entries.len(), "Loaded ledger snapshot");
        Ok(LedgerStore::from_inner(inner))
    }

    /// Load `path` if it exists, otherwise start empty.
    pub fn open_or_empty(path: &Path) -> Result<Self, SnapshotError> {
        if path.exists() {
            Self::load_snapshot(path)
        } else {
            Ok(LedgerStore::new())
        }
    }
}
