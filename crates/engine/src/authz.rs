//! Authorization Engine
//!
//! Stateless checks. Every decision is a pure function of the policy, the
//! caller and (for record-scoped checks) the current record. Nothing here
//! touches the ledger; the duplicate check on create lives in the registry.
//!
//! ## Callers
//!
//! Two identities reach these checks:
//!
//! - the resolved [`IdentityContext`] (username and role from the identity
//!   collaborator)
//! - the declared caller, a free-text field of the request
//!
//! Ownership compares the record owner with the declared caller. Under
//! [`IdentityBinding::Bound`] a non-empty declared caller must also equal the
//! resolved username; an empty one falls back to the resolved username.

use crate::config::{IdentifierShape, IdentityBinding, RegistryConfig};
use custody_core::{
    AssetId, AssetRecord, IdentityContext, RegistryError, RegistryResult, Role, ValidationFailure,
};
use once_cell::sync::Lazy;
use regex::Regex;

static TEN_DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid ten digit regex"));
static LEGACY_V5C_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2}[0-9]{7}$").expect("valid legacy v5c regex"));

/// Operations gated by the policy, as named in denial messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Credential registration on an initialized registry
    Init,
    /// Record creation
    Create,
    /// Field update
    Update,
    /// Document update
    UpdateDocument,
    /// Record read
    Read,
    /// Document read
    ReadDocument,
    /// Enumerate every record
    ListAll,
}

impl Operation {
    /// Invocation name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Init => "init",
            Operation::Create => "createAsset",
            Operation::Update => "updateAsset",
            Operation::UpdateDocument => "updateDoc",
            Operation::Read => "readAsset",
            Operation::ReadDocument => "readDoc",
            Operation::ListAll => "readAllAssets",
        }
    }
}

/// Access rules derived from the registry configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    regulator: Role,
    shape: IdentifierShape,
    binding: IdentityBinding,
}

impl AccessPolicy {
    /// Build a policy from explicit parts.
    pub fn new(regulator: Role, shape: IdentifierShape, binding: IdentityBinding) -> Self {
        Self {
            regulator,
            shape,
            binding,
        }
    }

    /// Build the policy a registry configuration describes.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(
            config.regulator_role,
            config.identifier_shape,
            config.identity_binding,
        )
    }

    /// The regulatory role.
    pub fn regulator(&self) -> Role {
        self.regulator
    }

    /// May `role` create `candidate`?
    ///
    /// Role is checked before shape: a non-regulatory caller is denied
    /// whatever the identifier looks like.
    pub fn check_create(&self, role: Option<Role>, candidate: &AssetId) -> RegistryResult<()> {
        if role != Some(self.regulator) {
            return Err(RegistryError::permission_denied(
                Operation::Create.name(),
                format!(
                    "only the {} role may create assets, caller role is {}",
                    self.regulator,
                    describe_role(role)
                ),
            ));
        }
        self.check_shape(candidate)
    }

    /// Full-string identifier shape check.
    pub fn check_shape(&self, candidate: &AssetId) -> RegistryResult<()> {
        let re = match self.shape {
            IdentifierShape::TenDigits => &TEN_DIGITS_RE,
            IdentifierShape::LegacyV5c => &LEGACY_V5C_RE,
        };
        if re.is_match(candidate.as_str()) {
            Ok(())
        } else {
            Err(RegistryError::validation(
                ValidationFailure::InvalidIdentifier {
                    candidate: candidate.to_string(),
                    expected: self.shape.describe(),
                },
            ))
        }
    }

    /// Resolve the caller name used for ownership comparisons.
    pub fn effective_caller<'a>(
        &self,
        op: Operation,
        declared: &'a str,
        identity: &'a IdentityContext,
    ) -> RegistryResult<&'a str> {
        if declared.is_empty() {
            return Ok(&identity.username);
        }
        if self.binding == IdentityBinding::Bound && declared != identity.username {
            return Err(RegistryError::permission_denied(
                op.name(),
                format!(
                    "declared caller '{}' does not match resolved identity '{}'",
                    declared, identity.username
                ),
            ));
        }
        Ok(declared)
    }

    /// May the caller mutate `record` (update or document update)?
    pub fn check_write(
        &self,
        op: Operation,
        record: &AssetRecord,
        declared: &str,
        identity: &IdentityContext,
    ) -> RegistryResult<()> {
        // Under the declared binding an empty caller never matches: the
        // resolved username is only substituted when the two are bound.
        let caller = match self.binding {
            IdentityBinding::Declared => declared,
            IdentityBinding::Bound => self.effective_caller(op, declared, identity)?,
        };
        if !caller.is_empty() && caller == record.owner_id {
            return Ok(());
        }
        Err(RegistryError::permission_denied(
            op.name(),
            format!(
                "caller '{}' is not the owner of {}",
                caller,
                record.key()
            ),
        ))
    }

    /// May the caller read `record`? Owner or regulatory role.
    pub fn check_read(
        &self,
        op: Operation,
        record: &AssetRecord,
        declared: &str,
        identity: &IdentityContext,
    ) -> RegistryResult<()> {
        let caller = self.effective_caller(op, declared, identity)?;
        if identity.has_role(self.regulator) || (!caller.is_empty() && caller == record.owner_id) {
            return Ok(());
        }
        Err(RegistryError::permission_denied(
            op.name(),
            format!(
                "caller '{}' should be the owner of {} or hold the {} role",
                caller,
                record.key(),
                self.regulator
            ),
        ))
    }

    /// May the caller register credentials on an already initialized
    /// registry? Regulatory role only.
    pub fn check_credential_write(&self, identity: &IdentityContext) -> RegistryResult<()> {
        if identity.has_role(self.regulator) {
            return Ok(());
        }
        Err(RegistryError::permission_denied(
            Operation::Init.name(),
            format!(
                "only the {} role may register credentials once initialized, caller role is {}",
                self.regulator,
                describe_role(identity.role)
            ),
        ))
    }

    /// May the caller enumerate every record? Regulatory role only.
    pub fn check_list(&self, identity: &IdentityContext) -> RegistryResult<()> {
        if identity.has_role(self.regulator) {
            return Ok(());
        }
        Err(RegistryError::permission_denied(
            Operation::ListAll.name(),
            format!(
                "only the {} role may list all assets, caller role is {}",
                self.regulator,
                describe_role(identity.role)
            ),
        ))
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::from_config(&RegistryConfig::default())
    }
}

fn describe_role(role: Option<Role>) -> &'static str {
    role.map(|r| r.label()).unwrap_or("unknown")
}
