//! Command enum defining all registry operations.
//!
//! Commands are the "instruction set" of the registry. Every invocation the
//! dispatch shell accepts is parsed into one variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: No closures or executable code

use custody_core::{AssetId, AssetPatch, RegistryError};
use serde::{Deserialize, Serialize};

use crate::request;
use crate::Result;

/// A command is a self-contained, serializable operation.
///
/// # Invocation names
///
/// | Name(s) | Command | Output |
/// |---------|---------|--------|
/// | `init` | `Init` | `Unit` |
/// | `create_vehicle`, `createAsset` | `CreateAsset` | `Unit` |
/// | `updateAsset` | `UpdateAsset` | `Unit` |
/// | `updateDoc` | `UpdateDocument` | `Unit` |
/// | `get_vehicle_details`, `readAsset` | `ReadAsset` | `Asset` |
/// | `readDoc` | `ReadDocument` | `Document` |
/// | `get_vehicles`, `readAllAssets` | `ReadAllAssets` | `Assets` |
/// | `check_unique_v5c` | `CheckUniqueness` | `Bool` |
/// | `get_ecert` | `GetEcert` | `Credential` |
/// | `ping` | `Ping` | `Pong` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Create the uniqueness index if missing and store credentials.
    Init {
        /// `(username, credential)` pairs
        credentials: Vec<(String, String)>,
    },

    /// Create a record.
    CreateAsset {
        /// Candidate identifier
        asset_id: AssetId,
    },

    /// Partial update of a record.
    UpdateAsset {
        /// Target, declared caller and new values
        patch: AssetPatch,
    },

    /// Replace the document of a record.
    UpdateDocument {
        /// Target, declared caller and document
        patch: AssetPatch,
    },

    /// Read one record.
    ReadAsset {
        /// Target record
        asset_id: AssetId,
        /// Declared caller, empty to use the resolved identity
        #[serde(default)]
        caller: String,
    },

    /// Read the document of one record.
    ReadDocument {
        /// Target record
        asset_id: AssetId,
        /// Declared caller, empty to use the resolved identity
        #[serde(default)]
        caller: String,
    },

    /// Read every record.
    ReadAllAssets,

    /// Is the identifier still free?
    CheckUniqueness {
        /// Candidate identifier
        asset_id: AssetId,
    },

    /// Fetch a stored credential.
    GetEcert {
        /// Credential owner
        username: String,
    },

    /// Liveness probe.
    Ping,
}

impl Command {
    /// Parse an external invocation.
    ///
    /// Asset operations take one JSON argument, `{"asset": {...}}`. `init`
    /// takes username/credential pairs, `get_ecert` a username.
    pub fn from_invocation(name: &str, args: &[String]) -> Result<Command> {
        let cmd = match name {
            "init" => Command::Init {
                credentials: request::credential_pairs(args)?,
            },
            "create_vehicle" | "createAsset" => Command::CreateAsset {
                asset_id: request::asset_id(&request::required_patch(name, args)?),
            },
            "updateAsset" => Command::UpdateAsset {
                patch: request::required_patch(name, args)?,
            },
            "updateDoc" => Command::UpdateDocument {
                patch: request::required_patch(name, args)?,
            },
            "get_vehicle_details" | "readAsset" => {
                let patch = request::required_patch(name, args)?;
                Command::ReadAsset {
                    asset_id: request::asset_id(&patch),
                    caller: patch.caller,
                }
            }
            "readDoc" => {
                let patch = request::required_patch(name, args)?;
                Command::ReadDocument {
                    asset_id: request::asset_id(&patch),
                    caller: patch.caller,
                }
            }
            "get_vehicles" | "readAllAssets" => {
                request::optional_patch(args)?;
                Command::ReadAllAssets
            }
            "check_unique_v5c" => Command::CheckUniqueness {
                asset_id: request::asset_id(&request::required_patch(name, args)?),
            },
            "get_ecert" => Command::GetEcert {
                username: args.first().cloned().ok_or_else(|| {
                    RegistryError::malformed("get_ecert expects a username argument")
                })?,
            },
            "ping" => Command::Ping,
            other => {
                return Err(RegistryError::UnknownOperation {
                    name: other.to_string(),
                }
                .into())
            }
        };
        Ok(cmd)
    }

    /// Returns `true` if this command writes to the ledger.
    ///
    /// Used by the access-mode guard to reject writes when the executor is
    /// read-only.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::Init { .. }
                | Command::CreateAsset { .. }
                | Command::UpdateAsset { .. }
                | Command::UpdateDocument { .. }
        )
    }

    /// Returns the variant name as a static string.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Init { .. } => "Init",
            Command::CreateAsset { .. } => "CreateAsset",
            Command::UpdateAsset { .. } => "UpdateAsset",
            Command::UpdateDocument { .. } => "UpdateDocument",
            Command::ReadAsset { .. } => "ReadAsset",
            Command::ReadDocument { .. } => "ReadDocument",
            Command::ReadAllAssets => "ReadAllAssets",
            Command::CheckUniqueness { .. } => "CheckUniqueness",
            Command::GetEcert { .. } => "GetEcert",
            Command::Ping => "Ping",
        }
    }
}
