//! Registry engine for custody
//!
//! This crate holds the business rules of the registry:
//! - Record Store Adapter: asset records to and from the ledger
//! - Uniqueness Index: append-only log of every created identifier
//! - Authorization Engine: who may create, read, update or list
//! - Field Merge Engine: partial updates that never erase
//! - Query Envelope Builder: read results wrapped with transaction metadata
//! - Registry: the operations the dispatch shell calls
//!
//! The engine is written against the `LedgerState` and `TxnContext` traits
//! from `custody-core` and never sees the concrete ledger.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod authz;
pub mod config;
pub mod envelope;
pub mod index;
pub mod merge;
pub mod record_store;
pub mod registry;

#[cfg(test)]
mod testing;

pub use authz::{AccessPolicy, Operation};
pub use config::{IdentifierShape, IdentityBinding, ListPolicy, RegistryConfig, CONFIG_FILE_NAME};
pub use envelope::{AssetState, QueryEnvelope};
pub use index::{UniquenessIndex, INDEX_KEY};
pub use registry::{credential_key, AssetEnvelope, DocumentEnvelope, Registry, CREDENTIAL_PREFIX};
