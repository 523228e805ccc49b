//! Uniqueness Index
//!
//! Append-only log of every identifier ever created, stored whole under one
//! reserved ledger key. `append` rewrites the whole sequence, so every
//! creation reads and writes this key: concurrent creations conflict here
//! and the ledger lets only the first one commit.

use custody_core::{AssetId, LedgerState, RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};

/// Reserved ledger key holding the index.
pub const INDEX_KEY: &str = "v5cIDs";

#[derive(Debug, Default, Serialize, Deserialize)]
struct IndexDocument {
    v5cs: Vec<AssetId>,
}

/// Handle over the index entry of one ledger view.
pub struct UniquenessIndex<'s, S: LedgerState + ?Sized> {
    state: &'s mut S,
}

impl<'s, S: LedgerState + ?Sized> UniquenessIndex<'s, S> {
    /// Wrap a ledger view.
    pub fn new(state: &'s mut S) -> Self {
        Self { state }
    }

    /// Write an empty index unless one already exists. Returns true if it
    /// wrote.
    pub fn init_if_missing(&mut self) -> RegistryResult<bool> {
        if self.state.get_state(INDEX_KEY)?.is_some() {
            return Ok(false);
        }
        self.store(&IndexDocument::default())?;
        Ok(true)
    }

    /// Every identifier, in creation order.
    ///
    /// # Errors
    ///
    /// `Internal` if the index is missing or unparsable.
    pub fn load(&mut self) -> RegistryResult<Vec<AssetId>> {
        let bytes = self.state.get_state(INDEX_KEY)?.ok_or_else(|| {
            RegistryError::internal("uniqueness index missing; registry not initialized")
        })?;
        let doc: IndexDocument = serde_json::from_slice(&bytes)
            .map_err(|e| RegistryError::internal(format!("uniqueness index corrupt: {}", e)))?;
        Ok(doc.v5cs)
    }

    /// Append `id` and write the sequence back.
    pub fn append(&mut self, id: &AssetId) -> RegistryResult<()> {
        let mut v5cs = self.load()?;
        if v5cs.contains(id) {
            return Err(RegistryError::internal(format!(
                "uniqueness index already holds {}",
                id
            )));
        }
        v5cs.push(id.clone());
        self.store(&IndexDocument { v5cs })
    }

    fn store(&mut self, doc: &IndexDocument) -> RegistryResult<()> {
        let bytes = serde_json::to_vec(doc)
            .map_err(|e| RegistryError::store(format!("failed to encode index: {}", e)))?;
        self.state.put_state(INDEX_KEY, bytes)
    }
}
