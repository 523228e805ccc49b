//! Failed and uncommitted transactions leave no trace.

use crate::common::*;
use custody_concurrency::LedgerTransaction;
use custody_core::{AssetId, AssetPatch, IdentityContext, Role};
use custody_engine::Registry;
use serde_json::json;

#[test]
fn dropped_transaction_writes_nothing() {
    let ledger = TestLedger::new();
    let version = ledger.store.current_version();
    {
        let mut txn = LedgerTransaction::begin(&ledger.store);
        Registry::default()
            .create(&mut txn, &AssetId::new(V5C), Some(Role::Regulator))
            .unwrap();
    }
    assert_eq!(ledger.store.current_version(), version);
    assert!(ledger.store.get(V5C).is_none());
}

#[test]
fn uncommitted_writes_are_private() {
    let ledger = TestLedger::new();
    ledger.register_to(V5C, "alice");
    let registry = Registry::default();
    let alice = IdentityContext::new("alice", Role::Private);

    let mut txn = LedgerTransaction::begin(&ledger.store);
    let patch = AssetPatch::for_asset(V5C)
        .declared_by("alice")
        .with_owner("bob");
    registry.update(&mut txn, &patch, &alice).unwrap();

    let seen = json(
        &ledger
            .regulator()
            .invoke("readAsset", &asset_args(json!({ "assetID": V5C })))
            .unwrap(),
    );
    assert_eq!(seen["assetstate"]["asset"]["ownerId"], "alice");

    txn.commit().unwrap();
    let seen = json(
        &ledger
            .regulator()
            .invoke("readAsset", &asset_args(json!({ "assetID": V5C })))
            .unwrap(),
    );
    assert_eq!(seen["assetstate"]["asset"]["ownerId"], "bob");
}

#[test]
fn stale_update_conflicts() {
    let ledger = TestLedger::new();
    ledger.register_to(V5C, "alice");
    let registry = Registry::default();
    let alice = IdentityContext::new("alice", Role::Private);

    let mut stale = LedgerTransaction::begin(&ledger.store);
    registry
        .update(
            &mut stale,
            &AssetPatch::for_asset(V5C).declared_by("alice").with_owner("carol"),
            &alice,
        )
        .unwrap();

    ledger
        .private("alice")
        .invoke(
            "updateAsset",
            &asset_args(json!({ "assetID": V5C, "caller": "alice", "ownerId": "bob" })),
        )
        .unwrap();

    let err: custody::Error = stale.commit().unwrap_err().into();
    assert_eq!(err.code(), "CONFLICT");
}
