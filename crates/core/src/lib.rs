//! Core types and traits for the custody registry
//!
//! This crate defines the foundational types used throughout the system:
//! - AssetRecord: the persisted custody record and its domain fields
//! - AssetPatch: the caller-supplied partial update
//! - Role / IdentityContext: who is calling and in which capacity
//! - TxnTimestamp: transaction timestamp as supplied by the ledger
//! - RegistryError: error taxonomy shared by every layer
//! - Traits: collaborator interfaces (LedgerState, TxnContext, IdentityResolver)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod record;
pub mod timestamp;
pub mod traits;
pub mod types;

pub use error::{RegistryError, RegistryResult, ValidationFailure};
pub use limits::{check_document_len, validate_document, MAX_DOCUMENT_CHARS};
pub use record::{AssetPatch, AssetRecord, DomainField, SENTINEL};
pub use timestamp::{TxnTimestamp, TIMESTAMP_FORMAT};
pub use traits::{IdentityResolver, LedgerState, TxnContext};
pub use types::{AssetId, CallerIdentity, IdentityContext, Role};
