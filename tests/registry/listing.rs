//! Enumeration through the uniqueness index.

use crate::common::*;
use custody::ListPolicy;
use serde_json::json;

fn listed_ids(executor: &Executor) -> Vec<String> {
    json(&executor.invoke("readAllAssets", &[]).unwrap())
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["assetstate"]["asset"]["v5cID"].as_str().unwrap().to_string())
        .collect()
}

fn corrupt(ledger: &TestLedger, id: &str) {
    ledger
        .store
        .write()
        .apply(vec![(id.to_string(), b"{not json".to_vec())]);
}

#[test]
fn listing_follows_creation_order() {
    let ledger = TestLedger::new();
    let dvla = ledger.regulator();
    let ids = ["3000000000", "1000000000", "2000000000"];
    for id in ids {
        dvla.invoke("createAsset", &asset_args(json!({ "assetID": id })))
            .unwrap();
    }
    assert_eq!(listed_ids(&dvla), ids);
}

#[test]
fn listing_envelopes_share_one_transaction() {
    let ledger = TestLedger::new();
    let dvla = ledger.regulator();
    for id in ["1000000000", "2000000000"] {
        dvla.invoke("createAsset", &asset_args(json!({ "assetID": id })))
            .unwrap();
    }
    let listed = json(&dvla.invoke("get_vehicles", &[]).unwrap());
    assert_eq!(listed[0]["txnid"], listed[1]["txnid"]);
    assert_eq!(listed[0]["txnts"], listed[1]["txnts"]);
}

#[test]
fn corrupt_record_is_skipped_by_default() {
    let ledger = TestLedger::new();
    let dvla = ledger.regulator();
    for id in ["1000000000", "2000000000", "3000000000"] {
        dvla.invoke("createAsset", &asset_args(json!({ "assetID": id })))
            .unwrap();
    }
    corrupt(&ledger, "2000000000");

    assert_eq!(listed_ids(&dvla), ["1000000000", "3000000000"]);
    let err = dvla
        .invoke("readAsset", &asset_args(json!({ "assetID": "2000000000" })))
        .unwrap_err();
    assert_eq!(err.code(), "CORRUPT_RECORD");
}

#[test]
fn fail_fast_policy_surfaces_corruption() {
    let ledger = TestLedger::with_config(RegistryConfig {
        list_policy: ListPolicy::FailFast,
        ..RegistryConfig::default()
    });
    let dvla = ledger.regulator();
    for id in ["1000000000", "2000000000"] {
        dvla.invoke("createAsset", &asset_args(json!({ "assetID": id })))
            .unwrap();
    }
    corrupt(&ledger, "1000000000");

    let err = dvla.invoke("readAllAssets", &[]).unwrap_err();
    assert_eq!(err.code(), "CORRUPT_RECORD");
}

#[test]
fn uniqueness_check_is_advisory() {
    let ledger = TestLedger::new();
    let dvla = ledger.regulator();
    let args = asset_args(json!({ "assetID": V5C }));
    assert_eq!(dvla.invoke("check_unique_v5c", &args).unwrap(), b"true");
    dvla.invoke("createAsset", &args).unwrap();
    assert_eq!(
        ledger
            .private("anyone")
            .invoke("check_unique_v5c", &args)
            .unwrap(),
        b"false"
    );
}
