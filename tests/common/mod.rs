//! Shared test utilities for all integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use custody::{
    AccessMode, AssetId, Command, Error, Executor, LedgerStore, Output, RegistryConfig,
    StaticIdentity,
};
use serde_json::Value;
use tempfile::TempDir;

/// Regulator username used throughout the suites.
pub const DVLA: &str = "DVLA";
/// A well-formed identifier.
pub const V5C: &str = "1234567890";

/// A shared ledger plus the registry configuration every executor uses.
pub struct TestLedger {
    pub store: Arc<LedgerStore>,
    pub config: RegistryConfig,
}

impl TestLedger {
    /// Fresh ledger with the registry already initialized.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let ledger = Self {
            store: Arc::new(LedgerStore::new()),
            config,
        };
        ledger
            .regulator()
            .execute(Command::Init {
                credentials: vec![],
            })
            .unwrap();
        ledger
    }

    /// Executor acting as `username` holding `role`.
    pub fn as_user(&self, username: &str, role: &str) -> Executor {
        Executor::new(
            Arc::clone(&self.store),
            self.config.clone(),
            Arc::new(StaticIdentity::new(username, role)),
        )
    }

    pub fn regulator(&self) -> Executor {
        self.as_user(DVLA, "regulator")
    }

    pub fn private(&self, username: &str) -> Executor {
        self.as_user(username, "private")
    }

    /// Create `id` as the regulator and hand it to `owner`.
    pub fn register_to(&self, id: &str, owner: &str) {
        let dvla = self.regulator();
        dvla.invoke("createAsset", &asset_args(serde_json::json!({ "assetID": id })))
            .unwrap();
        dvla.invoke(
            "updateAsset",
            &asset_args(serde_json::json!({ "assetID": id, "ownerId": owner, "caller": DVLA })),
        )
        .unwrap();
    }
}

/// Wrap an asset object in the `{"asset": ...}` payload envelope.
pub fn asset_args(asset: Value) -> Vec<String> {
    vec![serde_json::json!({ "asset": asset }).to_string()]
}

/// Parse invocation output as JSON.
pub fn json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

/// A temp directory holding a snapshot path.
pub fn snapshot_dir() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    (dir, path)
}

/// Reload a ledger from `path` behind a regulator executor.
pub fn reopen(path: &Path) -> Executor {
    Executor::new(
        Arc::new(LedgerStore::load_snapshot(path).unwrap()),
        RegistryConfig::default(),
        Arc::new(StaticIdentity::new(DVLA, "regulator")),
    )
}
