//! Registry façade
//!
//! Wires the record store, the uniqueness index, the access policy, the
//! merge engine and the envelope builder into the operations the dispatch
//! shell exposes. Every method runs against one ledger view; atomicity and
//! conflict detection are the view's business.
//!
//! Control flow for a mutation: fetch → check → merge → put (→ index append
//! on create). For a read: fetch → check → wrap.

use crate::authz::{AccessPolicy, Operation};
use crate::config::{ListPolicy, RegistryConfig};
use crate::envelope::QueryEnvelope;
use crate::index::{UniquenessIndex, INDEX_KEY};
use crate::merge;
use crate::record_store;
use custody_core::{
    AssetId, AssetPatch, AssetRecord, IdentityContext, LedgerState, RegistryError,
    RegistryResult, Role, TxnContext,
};
use tracing::{debug, info, warn};

/// Ledger key prefix of credential entries. Asset identifiers never carry
/// it, so credentials and records cannot overwrite one another.
pub const CREDENTIAL_PREFIX: &str = "ecert/";

/// Ledger key of the credential stored for `username`.
pub fn credential_key(username: &str) -> String {
    format!("{}{}", CREDENTIAL_PREFIX, username)
}

/// Envelope around a full record.
pub type AssetEnvelope = QueryEnvelope<AssetRecord>;

/// Envelope around a document.
pub type DocumentEnvelope = QueryEnvelope<String>;

/// The custody registry.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    config: RegistryConfig,
    policy: AccessPolicy,
}

impl Registry {
    /// Registry with the given configuration.
    pub fn new(config: RegistryConfig) -> Self {
        let policy = AccessPolicy::from_config(&config);
        Self { config, policy }
    }

    /// Active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Active access policy.
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Initialize the registry: create the uniqueness index if missing and
    /// store `(username, credential)` pairs under [`CREDENTIAL_PREFIX`].
    ///
    /// The first initialization may be run by anyone. Once the index exists,
    /// registering further credentials takes the regulatory role.
    pub fn init<S: LedgerState + ?Sized>(
        &self,
        state: &mut S,
        credentials: &[(String, String)],
        identity: &IdentityContext,
    ) -> RegistryResult<()> {
        for (username, _) in credentials {
            if username.is_empty() {
                return Err(RegistryError::malformed(
                    "an empty string cannot be used as a credential username",
                ));
            }
        }

        let created = UniquenessIndex::new(state).init_if_missing()?;
        if !created && !credentials.is_empty() {
            self.policy
                .check_credential_write(identity)
                .map_err(|e| log_denial(Operation::Init, INDEX_KEY, e))?;
        }
        for (username, credential) in credentials {
            state.put_state(&credential_key(username), credential.as_bytes().to_vec())?;
        }
        info!(
            index_created = created,
            credentials = credentials.len(),
            "Registry initialized"
        );
        Ok(())
    }

    /// Create a record for `candidate` on behalf of a caller holding `role`.
    ///
    /// Checks, in order: role, identifier shape, duplicate. On success the
    /// record holds the sentinel in every field and is owned by the
    /// configured regulator owner.
    pub fn create<S: LedgerState + ?Sized>(
        &self,
        state: &mut S,
        candidate: &AssetId,
        role: Option<Role>,
    ) -> RegistryResult<AssetRecord> {
        self.policy
            .check_create(role, candidate)
            .map_err(|e| log_denial(Operation::Create, candidate, e))?;

        if record_store::exists(state, candidate)? {
            return Err(RegistryError::DuplicateAsset {
                id: candidate.to_string(),
            });
        }

        let record = AssetRecord::template(candidate, self.config.regulator_owner.clone());
        UniquenessIndex::new(state).append(candidate)?;
        record_store::put(state, &record)?;

        info!(asset = %candidate, owner = %record.owner_id, "Asset created");
        Ok(record)
    }

    /// Apply a partial update. The target is `patch.asset_id`; the declared
    /// caller is `patch.caller`.
    pub fn update<S: LedgerState + ?Sized>(
        &self,
        state: &mut S,
        patch: &AssetPatch,
        identity: &IdentityContext,
    ) -> RegistryResult<AssetRecord> {
        let id = AssetId::new(patch.asset_id.as_str());
        let mut record = record_store::get(state, &id)?;
        self.policy
            .check_write(Operation::Update, &record, &patch.caller, identity)
            .map_err(|e| log_denial(Operation::Update, &id, e))?;

        merge::apply_patch(&mut record, patch)?;
        record_store::put(state, &record)?;

        info!(asset = %id, owner = %record.owner_id, "Asset updated");
        Ok(record)
    }

    /// Replace the document of `patch.asset_id` with `patch.af_doc`.
    pub fn update_document<S: LedgerState + ?Sized>(
        &self,
        state: &mut S,
        patch: &AssetPatch,
        identity: &IdentityContext,
    ) -> RegistryResult<AssetRecord> {
        let id = AssetId::new(patch.asset_id.as_str());
        let mut record = record_store::get(state, &id)?;
        self.policy
            .check_write(Operation::UpdateDocument, &record, &patch.caller, identity)
            .map_err(|e| log_denial(Operation::UpdateDocument, &id, e))?;

        merge::apply_document(&mut record, &patch.af_doc)?;
        record_store::put(state, &record)?;

        info!(
            asset = %id,
            chars = record.af_doc.chars().count(),
            "Asset document updated"
        );
        Ok(record)
    }

    /// Read one record, wrapped in an envelope.
    pub fn read<S: LedgerState + TxnContext + ?Sized>(
        &self,
        state: &mut S,
        id: &AssetId,
        declared_caller: &str,
        identity: &IdentityContext,
    ) -> RegistryResult<AssetEnvelope> {
        let record = self.fetch_readable(state, Operation::Read, id, declared_caller, identity)?;
        debug!(asset = %id, txn_id = state.txn_id(), "Asset read");
        Ok(QueryEnvelope::wrap(record, &*state))
    }

    /// Read only the document of one record, wrapped in an envelope.
    pub fn read_document<S: LedgerState + TxnContext + ?Sized>(
        &self,
        state: &mut S,
        id: &AssetId,
        declared_caller: &str,
        identity: &IdentityContext,
    ) -> RegistryResult<DocumentEnvelope> {
        let record =
            self.fetch_readable(state, Operation::ReadDocument, id, declared_caller, identity)?;
        debug!(asset = %id, txn_id = state.txn_id(), "Asset document read");
        Ok(QueryEnvelope::wrap(record.af_doc, &*state))
    }

    /// Every record in index order, each wrapped in an envelope.
    ///
    /// A record that fails to load is handled per the configured
    /// [`ListPolicy`].
    pub fn list_all<S: LedgerState + TxnContext + ?Sized>(
        &self,
        state: &mut S,
        identity: &IdentityContext,
    ) -> RegistryResult<Vec<AssetEnvelope>> {
        self.policy
            .check_list(identity)
            .map_err(|e| log_denial(Operation::ListAll, "*", e))?;

        let ids = UniquenessIndex::new(state).load()?;
        let mut out = Vec::with_capacity(ids.len());
        for id in &ids {
            match record_store::get(state, id) {
                Ok(record) => out.push(QueryEnvelope::wrap(record, &*state)),
                Err(e) => match self.config.list_policy {
                    ListPolicy::SkipAndContinue => {
                        warn!(asset = %id, error = %e, "Skipping asset in listing");
                    }
                    ListPolicy::FailFast => return Err(e),
                },
            }
        }
        debug!(listed = out.len(), indexed = ids.len(), "Assets listed");
        Ok(out)
    }

    /// True if no record exists for `id`. Advisory only.
    pub fn check_uniqueness<S: LedgerState + ?Sized>(
        &self,
        state: &mut S,
        id: &AssetId,
    ) -> RegistryResult<bool> {
        Ok(!record_store::exists(state, id)?)
    }

    /// Stored credential for `username`.
    pub fn get_ecert<S: LedgerState + ?Sized>(
        &self,
        state: &mut S,
        username: &str,
    ) -> RegistryResult<Vec<u8>> {
        if username.is_empty() {
            return Err(RegistryError::malformed("credential username is empty"));
        }
        state
            .get_state(&credential_key(username))?
            .ok_or_else(|| RegistryError::not_found(username))
    }

    fn fetch_readable<S: LedgerState + ?Sized>(
        &self,
        state: &mut S,
        op: Operation,
        id: &AssetId,
        declared_caller: &str,
        identity: &IdentityContext,
    ) -> RegistryResult<AssetRecord> {
        let record = record_store::get(state, id)?;
        self.policy
            .check_read(op, &record, declared_caller, identity)
            .map_err(|e| log_denial(op, id, e))?;
        Ok(record)
    }
}

fn log_denial(
    op: Operation,
    target: impl std::fmt::Display,
    err: RegistryError,
) -> RegistryError {
    if err.is_permission_denied() {
        warn!(operation = op.name(), target = %target, error = %err, "Permission denied");
    }
    err
}
