//! Record lifecycle: create, update, transfer, document replacement.

use crate::common::*;
use serde_json::json;

#[test]
fn create_produces_sentinel_record() {
    let ledger = TestLedger::new();
    let dvla = ledger.regulator();
    dvla.invoke("create_vehicle", &asset_args(json!({ "assetID": V5C })))
        .unwrap();

    let env = json(
        &dvla
            .invoke("get_vehicle_details", &asset_args(json!({ "assetID": V5C })))
            .unwrap(),
    );
    let asset = &env["assetstate"]["asset"];
    assert_eq!(asset["v5cID"], V5C);
    assert_eq!(asset["assetId"], V5C);
    assert_eq!(asset["ownerId"], DVLA);
    for field in ["transactionType", "matnrAf", "poDma", "truckMod", "afDoc", "caller"] {
        assert_eq!(asset[field], "UNDEFINED", "{}", field);
    }
    assert!(!env["txnid"].as_str().unwrap().is_empty());
    assert!(env["txnts"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn create_rejects_bad_shapes() {
    let ledger = TestLedger::new();
    let dvla = ledger.regulator();
    for candidate in ["", "123456789", "12345678901", "12345abcde", "AB1234567"] {
        let err = dvla
            .invoke("createAsset", &asset_args(json!({ "assetID": candidate })))
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION", "{:?}", candidate);
    }
    assert_eq!(
        json(&dvla.invoke("get_vehicles", &[]).unwrap()),
        json!([])
    );
}

#[test]
fn legacy_shape_is_configurable() {
    let config = RegistryConfig {
        identifier_shape: custody::IdentifierShape::LegacyV5c,
        ..RegistryConfig::default()
    };
    let ledger = TestLedger::with_config(config);
    let dvla = ledger.regulator();
    dvla.invoke("createAsset", &asset_args(json!({ "assetID": "AB1234567" })))
        .unwrap();
    let err = dvla
        .invoke("createAsset", &asset_args(json!({ "assetID": V5C })))
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION");
}

#[test]
fn duplicate_create_is_rejected() {
    let ledger = TestLedger::new();
    let dvla = ledger.regulator();
    let args = asset_args(json!({ "assetID": V5C }));
    dvla.invoke("createAsset", &args).unwrap();
    match dvla.invoke("createAsset", &args) {
        Err(Error::DuplicateAsset { id }) => assert_eq!(id, V5C),
        other => panic!("expected DuplicateAsset, got {:?}", other),
    }
}

#[test]
fn owner_updates_merge_non_empty_fields() {
    let ledger = TestLedger::new();
    ledger.register_to(V5C, "alice");
    let alice = ledger.private("alice");

    alice
        .invoke(
            "updateAsset",
            &asset_args(json!({
                "assetID": V5C,
                "caller": "alice",
                "truckMod": "FH16",
                "poDma": "",
            })),
        )
        .unwrap();

    let asset = json(
        &alice
            .invoke("readAsset", &asset_args(json!({ "assetID": V5C })))
            .unwrap(),
    )["assetstate"]["asset"]
        .clone();
    assert_eq!(asset["truckMod"], "FH16");
    assert_eq!(asset["poDma"], "UNDEFINED");
    assert_eq!(asset["ownerId"], "alice");
    assert_eq!(asset["caller"], "alice");
}

#[test]
fn transfer_moves_write_rights() {
    let ledger = TestLedger::new();
    ledger.register_to(V5C, "alice");

    ledger
        .private("alice")
        .invoke(
            "updateAsset",
            &asset_args(json!({ "assetID": V5C, "caller": "alice", "ownerId": "bob" })),
        )
        .unwrap();

    let err = ledger
        .private("alice")
        .invoke(
            "updateAsset",
            &asset_args(json!({ "assetID": V5C, "caller": "alice", "grAf": "received" })),
        )
        .unwrap_err();
    assert_eq!(err.code(), "PERMISSION_DENIED");

    ledger
        .private("bob")
        .invoke(
            "updateAsset",
            &asset_args(json!({ "assetID": V5C, "caller": "bob", "grAf": "received" })),
        )
        .unwrap();
}

#[test]
fn update_of_missing_asset_is_not_found() {
    let ledger = TestLedger::new();
    let err = ledger
        .regulator()
        .invoke(
            "updateAsset",
            &asset_args(json!({ "assetID": V5C, "caller": DVLA })),
        )
        .unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
}

#[test]
fn document_round_trip_and_bound() {
    let ledger = TestLedger::new();
    ledger.register_to(V5C, "alice");
    let alice = ledger.private("alice");

    let doc = "é".repeat(250_000);
    alice
        .invoke(
            "updateDoc",
            &asset_args(json!({ "assetID": V5C, "caller": "alice", "afDoc": doc })),
        )
        .unwrap();
    let env = json(
        &alice
            .invoke("readDoc", &asset_args(json!({ "assetID": V5C })))
            .unwrap(),
    );
    assert_eq!(env["assetstate"]["asset"].as_str().unwrap().chars().count(), 250_000);

    let err = alice
        .invoke(
            "updateDoc",
            &asset_args(json!({
                "assetID": V5C,
                "caller": "alice",
                "afDoc": "x".repeat(250_001),
            })),
        )
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION");
}

#[test]
fn empty_document_is_rejected() {
    let ledger = TestLedger::new();
    ledger.register_to(V5C, "alice");
    let err = ledger
        .private("alice")
        .invoke(
            "updateDoc",
            &asset_args(json!({ "assetID": V5C, "caller": "alice", "afDoc": "" })),
        )
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION");
}
