//! Error types for the custody registry
//!
//! Every failure the registry can report is a variant of [`RegistryError`].
//! All of them are terminal: nothing in this layer retries, and the message
//! is surfaced verbatim to the caller. We use `thiserror` for `Display` and
//! `Error` implementations.

use std::fmt;
use thiserror::Error;

/// Result type alias for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Why a request failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Candidate identifier does not match the configured shape
    InvalidIdentifier {
        /// The identifier as supplied
        candidate: String,
        /// Human-readable shape description, e.g. "exactly 10 digits"
        expected: &'static str,
    },

    /// Document text was empty on a document update
    EmptyDocument,

    /// Document text exceeds the code point limit
    DocumentTooLarge {
        /// Code points supplied
        chars: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Request payload or configuration could not be parsed
    MalformedPayload {
        /// Parser message
        reason: String,
    },
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::InvalidIdentifier {
                candidate,
                expected,
            } => write!(
                f,
                "invalid asset identifier '{}': expected {}",
                candidate, expected
            ),
            ValidationFailure::EmptyDocument => write!(f, "document cannot be empty"),
            ValidationFailure::DocumentTooLarge { chars, max } => write!(
                f,
                "document is {} characters, larger than the {} character limit",
                chars, max
            ),
            ValidationFailure::MalformedPayload { reason } => {
                write!(f, "malformed payload: {}", reason)
            }
        }
    }
}

/// Error taxonomy for the custody registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Malformed identifier, empty or oversized document, unparsable payload
    #[error("validation error: {reason}")]
    Validation {
        /// What was wrong
        reason: ValidationFailure,
    },

    /// A record already exists for the identifier
    #[error("asset already exists: {id}")]
    DuplicateAsset {
        /// Identifier that collided
        id: String,
    },

    /// No entry for the key
    #[error("not found: {key}")]
    NotFound {
        /// Ledger key looked up
        key: String,
    },

    /// Bytes were present but failed to parse
    #[error("corrupt record at '{key}': {reason}")]
    CorruptRecord {
        /// Ledger key holding the bad bytes
        key: String,
        /// Decoder message
        reason: String,
    },

    /// Caller may not perform the operation
    #[error("permission denied: {operation}: {reason}")]
    PermissionDenied {
        /// Operation that was attempted
        operation: String,
        /// Why it was denied
        reason: String,
    },

    /// Ledger get/put failure
    #[error("store error: {reason}")]
    Store {
        /// Ledger message
        reason: String,
    },

    /// The ledger rejected the commit because a key read by this
    /// transaction was committed by another one first
    #[error("transaction conflict: {reason}")]
    Conflict {
        /// Conflicting keys
        reason: String,
    },

    /// Invocation name not recognized by the dispatch shell
    #[error("unknown operation: {name}")]
    UnknownOperation {
        /// Name as supplied
        name: String,
    },

    /// Registry invariant breach (e.g. uniqueness index missing)
    #[error("internal error: {reason}")]
    Internal {
        /// Description
        reason: String,
    },
}

impl RegistryError {
    /// Shorthand for a validation failure.
    pub fn validation(reason: ValidationFailure) -> Self {
        RegistryError::Validation { reason }
    }

    /// Shorthand for a malformed payload.
    pub fn malformed(reason: impl Into<String>) -> Self {
        RegistryError::Validation {
            reason: ValidationFailure::MalformedPayload {
                reason: reason.into(),
            },
        }
    }

    /// Shorthand for a permission denial.
    pub fn permission_denied(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        RegistryError::PermissionDenied {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a not-found key.
    pub fn not_found(key: impl Into<String>) -> Self {
        RegistryError::NotFound { key: key.into() }
    }

    /// Shorthand for a ledger failure.
    pub fn store(reason: impl Into<String>) -> Self {
        RegistryError::Store {
            reason: reason.into(),
        }
    }

    /// Shorthand for an internal fault.
    pub fn internal(reason: impl Into<String>) -> Self {
        RegistryError::Internal {
            reason: reason.into(),
        }
    }

    /// True for `PermissionDenied`.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, RegistryError::PermissionDenied { .. })
    }

    /// True for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound { .. })
    }

    /// True for `Validation`.
    pub fn is_validation(&self) -> bool {
        matches!(self, RegistryError::Validation { .. })
    }
}
