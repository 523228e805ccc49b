//! Authorization of reads, writes and listings.

use crate::common::*;
use custody::IdentityBinding;
use serde_json::json;

fn read_as(executor: &Executor, caller: &str) -> custody::Result<Vec<u8>> {
    executor.invoke(
        "readAsset",
        &asset_args(json!({ "assetID": V5C, "caller": caller })),
    )
}

#[test]
fn regulator_reads_any_record() {
    let ledger = TestLedger::new();
    ledger.register_to(V5C, "alice");
    read_as(&ledger.regulator(), "").unwrap();
    read_as(&ledger.regulator(), "someone-else").unwrap();
}

#[test]
fn stranger_cannot_read() {
    let ledger = TestLedger::new();
    ledger.register_to(V5C, "alice");
    let err = read_as(&ledger.private("bob"), "").unwrap_err();
    assert_eq!(err.code(), "PERMISSION_DENIED");
    let err = ledger
        .private("bob")
        .invoke("readDoc", &asset_args(json!({ "assetID": V5C })))
        .unwrap_err();
    assert_eq!(err.code(), "PERMISSION_DENIED");
}

#[test]
fn declared_binding_trusts_the_payload() {
    let ledger = TestLedger::new();
    ledger.register_to(V5C, "alice");
    let bob = ledger.private("bob");

    read_as(&bob, "alice").unwrap();
    bob.invoke(
        "updateAsset",
        &asset_args(json!({ "assetID": V5C, "caller": "alice", "grDma": "ok" })),
    )
    .unwrap();
}

#[test]
fn declared_binding_requires_a_caller_on_writes() {
    let ledger = TestLedger::new();
    ledger.register_to(V5C, "alice");
    let err = ledger
        .private("alice")
        .invoke(
            "updateAsset",
            &asset_args(json!({ "assetID": V5C, "grDma": "ok" })),
        )
        .unwrap_err();
    assert_eq!(err.code(), "PERMISSION_DENIED");
}

#[test]
fn bound_binding_rejects_impersonation() {
    let ledger = TestLedger::with_config(RegistryConfig {
        identity_binding: IdentityBinding::Bound,
        ..RegistryConfig::default()
    });
    ledger.register_to(V5C, "alice");
    let bob = ledger.private("bob");

    assert_eq!(read_as(&bob, "alice").unwrap_err().code(), "PERMISSION_DENIED");
    let err = bob
        .invoke(
            "updateAsset",
            &asset_args(json!({ "assetID": V5C, "caller": "alice", "grDma": "ok" })),
        )
        .unwrap_err();
    assert_eq!(err.code(), "PERMISSION_DENIED");

    // The resolved username stands in for an omitted caller.
    ledger
        .private("alice")
        .invoke(
            "updateAsset",
            &asset_args(json!({ "assetID": V5C, "grDma": "ok" })),
        )
        .unwrap();
}

#[test]
fn only_regulator_lists() {
    let ledger = TestLedger::new();
    ledger.register_to(V5C, "alice");
    for role in ["private", "manufacturer", ""] {
        let err = ledger
            .as_user("alice", role)
            .invoke("readAllAssets", &[])
            .unwrap_err();
        assert_eq!(err.code(), "PERMISSION_DENIED", "{:?}", role);
    }
}

#[test]
fn non_regulator_create_needs_config() {
    let ledger = TestLedger::with_config(RegistryConfig {
        assume_regulator_on_create: false,
        ..RegistryConfig::default()
    });
    let err = ledger
        .private("alice")
        .invoke("createAsset", &asset_args(json!({ "assetID": V5C })))
        .unwrap_err();
    assert_eq!(err.code(), "PERMISSION_DENIED");
    ledger
        .regulator()
        .invoke("createAsset", &asset_args(json!({ "assetID": V5C })))
        .unwrap();
}

#[test]
fn read_only_executor_refuses_writes() {
    let ledger = TestLedger::new();
    let ro = Executor::new_with_mode(
        std::sync::Arc::clone(&ledger.store),
        RegistryConfig::default(),
        std::sync::Arc::new(StaticIdentity::new(DVLA, "regulator")),
        AccessMode::ReadOnly,
    );
    match ro.invoke("createAsset", &asset_args(json!({ "assetID": V5C }))) {
        Err(Error::AccessDenied { command }) => assert_eq!(command, "CreateAsset"),
        other => panic!("expected AccessDenied, got {:?}", other),
    }
    assert_eq!(ro.invoke("check_unique_v5c", &asset_args(json!({ "assetID": V5C }))).unwrap(), b"true");
}
