//! Registry configuration via `custody.toml`
//!
//! A default `custody.toml` is written next to the ledger on first use. To
//! change settings, edit the file and restart.

use custody_core::{RegistryError, RegistryResult, Role};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name placed next to the ledger snapshot.
pub const CONFIG_FILE_NAME: &str = "custody.toml";

/// Identifier shape accepted by `create`. Always a full-string match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierShape {
    /// Exactly ten ASCII digits
    #[default]
    TenDigits,
    /// Two ASCII letters followed by seven digits
    LegacyV5c,
}

impl IdentifierShape {
    /// Human-readable description used in validation errors.
    pub fn describe(&self) -> &'static str {
        match self {
            IdentifierShape::TenDigits => "exactly 10 digits",
            IdentifierShape::LegacyV5c => "two letters followed by 7 digits",
        }
    }
}

/// How the declared caller in a request relates to the resolved identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityBinding {
    /// Declared caller is trusted as-is for ownership checks
    #[default]
    Declared,
    /// A non-empty declared caller must equal the resolved username
    Bound,
}

/// What `listAll` does when one record fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListPolicy {
    /// Omit the record and keep going
    #[default]
    SkipAndContinue,
    /// Fail the whole listing
    FailFast,
}

/// Registry configuration loaded from `custody.toml`.
///
/// # Example
///
/// ```toml
/// identifier_shape = "ten_digits"
/// regulator_owner = "DVLA"
/// regulator_role = "regulator"
/// identity_binding = "declared"
/// list_policy = "skip_and_continue"
/// assume_regulator_on_create = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Identifier shape accepted by `create`
    pub identifier_shape: IdentifierShape,
    /// Owner written into freshly created records
    pub regulator_owner: String,
    /// Role allowed to create records, read any record and list them all
    pub regulator_role: Role,
    /// Declared-vs-resolved caller binding
    pub identity_binding: IdentityBinding,
    /// Partial-result policy for `listAll`
    pub list_policy: ListPolicy,
    /// Dispatch `create` as the regulatory role instead of the resolved role
    pub assume_regulator_on_create: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            identifier_shape: IdentifierShape::default(),
            regulator_owner: "DVLA".to_string(),
            regulator_role: Role::Regulator,
            identity_binding: IdentityBinding::default(),
            list_policy: ListPolicy::default(),
            assume_regulator_on_create: true,
        }
    }
}

impl RegistryConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Custody registry configuration
#
# Identifier shape accepted on create (always a full-string match):
#   "ten_digits" = exactly 10 digits (default)
#   "legacy_v5c" = two letters followed by 7 digits
identifier_shape = "ten_digits"

# Owner written into a freshly created record.
regulator_owner = "DVLA"

# Role allowed to create records, read any record and list them all.
# One of: regulator, manufacturer, private, lease_company, scrap_merchant
regulator_role = "regulator"

# Declared caller handling for update and document update:
#   "declared" = trust the caller field of the request (default)
#   "bound"    = a non-empty caller field must equal the resolved username
identity_binding = "declared"

# readAllAssets behavior when one record cannot be loaded:
#   "skip_and_continue" = omit it (default)
#   "fail_fast"         = fail the listing
list_policy = "skip_and_continue"

# Create as the regulatory role regardless of the resolved role.
assume_regulator_on_create = true
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// `Internal` if the file cannot be read, `Validation` if it cannot be
    /// parsed.
    pub fn from_file(path: &Path) -> RegistryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RegistryError::internal(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            RegistryError::malformed(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> RegistryResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                RegistryError::internal(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> RegistryResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RegistryError::internal(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            RegistryError::internal(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
