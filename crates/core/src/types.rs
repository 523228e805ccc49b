//! Identity and addressing types
//!
//! - [`AssetId`]: the ledger key of one asset record
//! - [`Role`]: closed set of participant roles
//! - [`CallerIdentity`]: what the identity collaborator asserts
//! - [`IdentityContext`]: the resolved, typed caller for one invocation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger key of an asset record.
///
/// Construction does not validate shape; shape is a registry configuration
/// concern and is checked only when a record is created.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        AssetId(id.into())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        AssetId(s.to_string())
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        AssetId(s)
    }
}

/// Participant role.
///
/// `Regulator` is the only role that may create records and read or list
/// any record. The others matter only through record ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regulatory authority
    Regulator,
    /// Manufacturer
    Manufacturer,
    /// Private owner
    Private,
    /// Lease company
    LeaseCompany,
    /// Scrap merchant
    ScrapMerchant,
}

impl Role {
    /// All roles, in lifecycle order.
    pub const ALL: [Role; 5] = [
        Role::Regulator,
        Role::Manufacturer,
        Role::Private,
        Role::LeaseCompany,
        Role::ScrapMerchant,
    ];

    /// Label as carried in credentials.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Regulator => "regulator",
            Role::Manufacturer => "manufacturer",
            Role::Private => "private",
            Role::LeaseCompany => "lease_company",
            Role::ScrapMerchant => "scrap_merchant",
        }
    }

    /// Parse a credential label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.label() == label)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw assertion from the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    /// Asserted username
    pub username: String,
    /// Role label, untyped
    pub role: String,
}

impl CallerIdentity {
    /// Create a caller identity from username and role label.
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
        }
    }
}

/// Resolved caller for one invocation. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentityContext {
    /// Asserted username, empty when resolution failed
    pub username: String,
    /// Parsed role, `None` when the label is unknown or resolution failed
    pub role: Option<Role>,
}

impl IdentityContext {
    /// Identity with a known role.
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role: Some(role),
        }
    }

    /// Empty identity used when resolution fails. Every gated check denies it.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Type a raw collaborator assertion.
    pub fn from_caller(caller: CallerIdentity) -> Self {
        Self {
            role: Role::from_label(&caller.role),
            username: caller.username,
        }
    }

    /// True when the caller holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }

    /// True for the empty identity.
    pub fn is_anonymous(&self) -> bool {
        self.username.is_empty() && self.role.is_none()
    }
}
