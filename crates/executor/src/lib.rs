//! # Custody Executor
//!
//! The public API for the custody registry.
//!
//! This is the only crate users need to import. It provides:
//! - [`Executor`] - runs commands against a ledger, one transaction each
//! - [`Command`]/[`Output`] - the command interface and its results
//! - [`Error`] - serializable execution errors with stable codes
//!
//! ## Quick Start
//!
//! ```text
//! use custody_executor::{Executor, LedgerStore, RegistryConfig, StaticIdentity};
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
//! ## Invocation surface
//!
//! | Name | Operation |
//! |------|-----------|
//! | `create_vehicle` / `createAsset` | create a record |
//! | `updateAsset` | owner-gated partial update |
//! | `updateDoc` | owner-gated document replacement |
//! | `get_vehicle_details` / `readAsset` | read one record |
//! | `get_vehicles` / `readAllAssets` | list every record |
//! | `check_unique_v5c` | is the identifier free |
//! | `readDoc` | read one document |
//! | `init` / `get_ecert` | registry setup and credential lookup |
//! | `ping` | liveness |

#![warn(missing_docs)]

mod access;
mod command;
mod convert;
mod error;
mod executor;
mod identity;
mod output;
mod request;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

pub use access::AccessMode;
pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use identity::StaticIdentity;
pub use output::{Output, PONG};

// Re-export the types callers need so they don't import the layer crates
pub use custody_core::{
    AssetId, AssetPatch, AssetRecord, CallerIdentity, DomainField, IdentityResolver, Role,
    TxnTimestamp,
};
pub use custody_engine::{
    AssetEnvelope, DocumentEnvelope, IdentifierShape, IdentityBinding, ListPolicy,
    QueryEnvelope, RegistryConfig, CONFIG_FILE_NAME,
};
pub use custody_storage::{LedgerStore, SnapshotError};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
