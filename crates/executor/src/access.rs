//! Executor access mode.

use serde::{Deserialize, Serialize};

/// Controls whether the executor allows writes or is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessMode {
    /// Allow both reads and writes (default).
    #[default]
    ReadWrite,
    /// Read-only mode: every write command returns `AccessDenied`.
    ReadOnly,
}
