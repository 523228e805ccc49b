//! Custody - multi-party asset custody registry
//!
//! Custody keeps one record per regulated asset on a versioned key-value
//! ledger. A regulator registers assets; the current owner amends them or
//! hands them on; reads are limited to the owner and the regulator.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use custody::{Executor, LedgerStore, RegistryConfig, StaticIdentity};
//!
//! let executor = Executor::new(
//!     Arc::new(LedgerStore::new()),
//!     RegistryConfig::default(),
//!     Arc::new(StaticIdentity::new("DVLA", "regulator")),
//! );
//! executor.invoke("init", &[])?;
//! executor.invoke("createAsset", &[r#"{"asset":{"assetID":"1234567890"}}"#.into()])?;
//! let envelope = executor.invoke("readAsset", &[r#"{"asset":{"assetID":"1234567890"}}"#.into()])?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which runs each command in
//! its own optimistic ledger transaction. Internal layers (storage,
//! concurrency, engine) are not re-exported beyond the types the executor
//! API needs.

// Re-export the public API from custody-executor
pub use custody_executor::*;
