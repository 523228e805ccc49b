//! The Executor - single entry point to the registry.
//!
//! The Executor routes commands to handlers. Each command runs in its own
//! ledger transaction: the handler's reads and writes go through the
//! transaction, and the writes are committed only if the handler succeeds.
//! A failed command drops its transaction and leaves the ledger untouched.

use std::sync::Arc;

use custody_concurrency::LedgerTransaction;
use custody_core::{IdentityResolver, TxnTimestamp};
use custody_engine::{Registry, RegistryConfig};
use custody_storage::LedgerStore;
use tracing::debug;

use crate::handlers::{asset, query};
use crate::identity::resolve_or_anonymous;
use crate::{AccessMode, Command, Error, Output, Result};

/// The command executor - single entry point to the registry.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads. Concurrent
/// commands are isolated by their transactions; a command whose reads were
/// invalidated by an earlier commit fails with [`Error::Conflict`].
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use custody_executor::{Command, Executor, StaticIdentity};
///
/// let executor = Executor::new(
///     Arc::new(LedgerStore::new()),
///     RegistryConfig::default(),
///     Arc::new(StaticIdentity::new("DVLA", "regulator")),
/// );
/// executor.execute(Command::Init { credentials: vec![] })?;
/// let bytes = executor.invoke("createAsset", &[r#"{"asset":{"assetID":"1234567890"}}"#.into()])?;
/// ```
pub struct Executor {
    store: Arc<LedgerStore>,
    registry: Registry,
    identity: Arc<dyn IdentityResolver>,
    access_mode: AccessMode,
}

impl Executor {
    /// Create a read-write executor.
    pub fn new(
        store: Arc<LedgerStore>,
        config: RegistryConfig,
        identity: Arc<dyn IdentityResolver>,
    ) -> Self {
        Self::new_with_mode(store, config, identity, AccessMode::ReadWrite)
    }

    /// Create an executor with an explicit access mode.
    pub fn new_with_mode(
        store: Arc<LedgerStore>,
        config: RegistryConfig,
        identity: Arc<dyn IdentityResolver>,
        access_mode: AccessMode,
    ) -> Self {
        Self {
            store,
            registry: Registry::new(config),
            identity,
            access_mode,
        }
    }

    /// The ledger this executor commits to.
    pub fn store(&self) -> &Arc<LedgerStore> {
        &self.store
    }

    /// The registry rules in force.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the access mode of this executor.
    pub fn access_mode(&self) -> AccessMode {
        self.access_mode
    }

    /// Execute a single command in a fresh transaction.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        self.run(LedgerTransaction::begin(&self.store), cmd)
    }

    /// Execute a single command with a caller-supplied transaction id and
    /// timestamp.
    pub fn execute_with_context(
        &self,
        cmd: Command,
        txn_id: &str,
        timestamp: TxnTimestamp,
    ) -> Result<Output> {
        self.run(
            LedgerTransaction::with_context(&self.store, txn_id, timestamp),
            cmd,
        )
    }

    /// Parse and execute an external invocation, rendering the output.
    pub fn invoke(&self, name: &str, args: &[String]) -> Result<Vec<u8>> {
        let cmd = Command::from_invocation(name, args)?;
        self.execute(cmd)?.into_bytes()
    }

    fn run(&self, mut txn: LedgerTransaction<'_>, cmd: Command) -> Result<Output> {
        if self.access_mode == AccessMode::ReadOnly && cmd.is_write() {
            return Err(Error::AccessDenied {
                command: cmd.name().to_string(),
            });
        }

        let command = cmd.name();
        let output = self.dispatch(&mut txn, cmd)?;

        if txn.has_writes() {
            let outcome = txn.commit()?;
            debug!(command, version = ?outcome.commit_version, keys = outcome.keys_written, "Command committed");
        } else {
            debug!(command, reads = txn.read_count(), "Command completed");
        }
        Ok(output)
    }

    fn dispatch(&self, txn: &mut LedgerTransaction<'_>, cmd: Command) -> Result<Output> {
        if let Command::Ping = cmd {
            return Ok(Output::Pong);
        }

        let identity = resolve_or_anonymous(self.identity.as_ref());
        let registry = &self.registry;

        match cmd {
            Command::Init { credentials } => asset::init(registry, txn, &identity, credentials),
            Command::CreateAsset { asset_id } => {
                asset::create_asset(registry, txn, &identity, asset_id)
            }
            Command::UpdateAsset { patch } => asset::update_asset(registry, txn, &identity, patch),
            Command::UpdateDocument { patch } => {
                asset::update_document(registry, txn, &identity, patch)
            }
            Command::ReadAsset { asset_id, caller } => {
                query::read_asset(registry, txn, &identity, asset_id, caller)
            }
            Command::ReadDocument { asset_id, caller } => {
                query::read_document(registry, txn, &identity, asset_id, caller)
            }
            Command::ReadAllAssets => query::read_all_assets(registry, txn, &identity),
            Command::CheckUniqueness { asset_id } => {
                query::check_uniqueness(registry, txn, asset_id)
            }
            Command::GetEcert { username } => query::get_ecert(registry, txn, username),
            Command::Ping => Ok(Output::Pong),
        }
    }
}
