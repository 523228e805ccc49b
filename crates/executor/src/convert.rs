//! Error conversion from internal error types.
//!
//! This module provides conversions from registry and commit errors to the
//! executor's [`Error`] type.

use crate::Error;
use custody_concurrency::CommitError;
use custody_core::RegistryError;

/// Convert a RegistryError to an executor Error.
///
/// Variant for variant; validation reasons are flattened to their message.
impl From<RegistryError> for Error {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Validation { reason } => Error::Validation {
                reason: reason.to_string(),
            },
            RegistryError::DuplicateAsset { id } => Error::DuplicateAsset { id },
            RegistryError::NotFound { key } => Error::NotFound { key },
            RegistryError::CorruptRecord { key, reason } => Error::CorruptRecord { key, reason },
            RegistryError::PermissionDenied { operation, reason } => {
                Error::PermissionDenied { operation, reason }
            }
            RegistryError::Store { reason } => Error::Store { reason },
            RegistryError::Conflict { reason } => Error::Conflict { reason },
            RegistryError::UnknownOperation { name } => Error::UnknownOperation { name },
            RegistryError::Internal { reason } => Error::Internal { reason },
        }
    }
}

impl From<CommitError> for Error {
    fn from(err: CommitError) -> Self {
        RegistryError::from(err).into()
    }
}

/// Convert a registry result.
pub(crate) fn convert_result<T>(r: custody_core::RegistryResult<T>) -> crate::Result<T> {
    r.map_err(Error::from)
}
