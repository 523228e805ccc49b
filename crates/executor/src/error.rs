//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Coded**: Each variant has a stable machine-readable [`Error::code`]

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Validation | `Validation` | Bad identifier, document or payload |
/// | Existence | `DuplicateAsset`, `NotFound`, `CorruptRecord` | Record state |
/// | Access | `PermissionDenied`, `AccessDenied` | Caller or executor mode |
/// | Ledger | `Store`, `Conflict` | Storage and commit failures |
/// | Dispatch | `UnknownOperation` | Unrecognized invocation name |
/// | System | `Serialization`, `Internal` | Infrastructure errors |
///
/// # Example
///
/// ```ignore
/// match executor.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::PermissionDenied { operation, reason }) => {
///         println!("{} denied: {}", operation, reason);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation ====================
    /// Malformed identifier, empty or oversized document, unparsable payload
    #[error("validation error: {reason}")]
    Validation { reason: String },

    // ==================== Existence ====================
    /// A record already exists for the identifier
    #[error("asset already exists: {id}")]
    DuplicateAsset { id: String },

    /// No entry for the key
    #[error("not found: {key}")]
    NotFound { key: String },

    /// Stored bytes failed to parse
    #[error("corrupt record at '{key}': {reason}")]
    CorruptRecord { key: String, reason: String },

    // ==================== Access ====================
    /// Caller may not perform the operation
    #[error("permission denied: {operation}: {reason}")]
    PermissionDenied { operation: String, reason: String },

    /// Write command rejected by a read-only executor
    #[error("access denied: {command} is not allowed in read-only mode")]
    AccessDenied { command: String },

    // ==================== Ledger ====================
    /// Ledger get/put failure
    #[error("store error: {reason}")]
    Store { reason: String },

    /// Commit rejected; resubmit the invocation
    #[error("conflict: {reason}")]
    Conflict { reason: String },

    // ==================== Dispatch ====================
    /// Invocation name not recognized
    #[error("unknown operation: {name}")]
    UnknownOperation { name: String },

    // ==================== System ====================
    /// Output could not be rendered
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Internal error (invariant violation)
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl Error {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Validation { .. } => "VALIDATION",
            Error::DuplicateAsset { .. } => "DUPLICATE_ASSET",
            Error::NotFound { .. } => "NOT_FOUND",
            Error::CorruptRecord { .. } => "CORRUPT_RECORD",
            Error::PermissionDenied { .. } => "PERMISSION_DENIED",
            Error::AccessDenied { .. } => "ACCESS_DENIED",
            Error::Store { .. } => "STORE",
            Error::Conflict { .. } => "CONFLICT",
            Error::UnknownOperation { .. } => "UNKNOWN_OPERATION",
            Error::Serialization { .. } => "SERIALIZATION",
            Error::Internal { .. } => "INTERNAL",
        }
    }

    /// True if resubmitting the same invocation may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Conflict { .. })
    }
}
