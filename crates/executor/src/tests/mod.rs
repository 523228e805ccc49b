//! Test modules for the executor crate.


use std::sync::Arc;

use crate::{Executor, LedgerStore, RegistryConfig, StaticIdentity};

/// Executor over a fresh ledger, initialized, calling as `username`/`role`.
pub(crate) fn executor_as(username: &str, role: &str) -> Executor {
    let executor = Executor::new(
        Arc::new(LedgerStore::new()),
        RegistryConfig::default(),
        Arc::new(StaticIdentity::new(username, role)),
    );
    executor
        .execute(crate::Command::Init {
            credentials: vec![],
        })
        .unwrap();
    executor
}

/// Executor sharing `store`, calling as `username`/`role`.
pub(crate) fn executor_on(store: &Arc<LedgerStore>, username: &str, role: &str) -> Executor {
    Executor::new(
        Arc::clone(store),
        RegistryConfig::default(),
        Arc::new(StaticIdentity::new(username, role)),
    )
}

/// Asset payload argument.
pub(crate) fn payload(json: serde_json::Value) -> Vec<String> {
    vec![serde_json::json!({ "asset": json }).to_string()]
}
