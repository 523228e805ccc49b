//! Ledger value wrapper
//!
//! Every entry remembers the commit version that last wrote it. Version 0 is
//! reserved for "absent" so a transaction can record that it observed a
//! missing key.

use serde::{Deserialize, Serialize};

/// Raw bytes plus the commit version that wrote them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredValue {
    bytes: Vec<u8>,
    version: u64,
}

impl StoredValue {
    /// Create a stored value.
    pub fn new(bytes: Vec<u8>, version: u64) -> Self {
        StoredValue { bytes, version }
    }

    /// Stored bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume and return the bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Commit version that wrote this value.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }
}
