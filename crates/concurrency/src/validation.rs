//! Commit-time validation
//!
//! Rules:
//! - First-committer-wins based on the READ-SET, not the write-set
//! - Blind writes (write without read) do not conflict
//! - A key read as absent is recorded at version 0, so a concurrent create
//!   of that key conflicts

use custody_storage::LedgerWriteGuard;
use std::collections::HashMap;
use std::fmt;

/// Conflicts detected while validating a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictType {
    /// Key was read at one version but the ledger now holds another
    ReadWriteConflict {
        /// The key that has a conflict
        key: String,
        /// Version recorded in the read set
        read_version: u64,
        /// Version in the ledger at validation time
        current_version: u64,
    },
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictType::ReadWriteConflict {
                key,
                read_version,
                current_version,
            } => write!(
                f,
                "'{}' read at version {} but now at {}",
                key, read_version, current_version
            ),
        }
    }
}

/// Result of transaction validation
///
/// A transaction commits only if `is_valid()` returns true.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// All conflicts detected during validation
    pub conflicts: Vec<ConflictType>,
}

impl ValidationResult {
    /// Validation result with no conflicts
    pub fn ok() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Number of conflicts
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }

    /// Conflicting keys, in sorted order
    pub fn conflicting_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .conflicts
            .iter()
            .map(|c| match c {
                ConflictType::ReadWriteConflict { key, .. } => key.as_str(),
            })
            .collect();
        keys.sort_unstable();
        keys
    }
}

/// Validate the read set against the ledger held by `guard`.
pub fn validate_read_set(
    read_set: &HashMap<String, u64>,
    guard: &LedgerWriteGuard<'_>,
) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (key, read_version) in read_set {
        let current_version = guard.version_of(key);
        if current_version != *read_version {
            result.conflicts.push(ConflictType::ReadWriteConflict {
                key: key.clone(),
                read_version: *read_version,
                current_version,
            });
        }
    }

    result
}
