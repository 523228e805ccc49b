//! Competing writers on the shared uniqueness index.

use std::sync::{Arc, Barrier};
use std::thread;

use crate::common::*;
use custody_concurrency::LedgerTransaction;
use custody_core::{AssetId, Role};
use custody_engine::Registry;
use serde_json::json;

#[test]
fn second_creator_conflicts_on_index() {
    let ledger = TestLedger::new();
    let registry = Registry::default();

    let mut first = LedgerTransaction::begin(&ledger.store);
    let mut second = LedgerTransaction::begin(&ledger.store);
    registry
        .create(&mut first, &AssetId::new("1000000000"), Some(Role::Regulator))
        .unwrap();
    registry
        .create(&mut second, &AssetId::new("2000000000"), Some(Role::Regulator))
        .unwrap();

    first.commit().unwrap();
    let err: custody::Error = second.commit().unwrap_err().into();
    assert_eq!(err.code(), "CONFLICT");
    assert!(err.is_retryable());

    let dvla = ledger.regulator();
    assert_eq!(
        dvla.invoke("check_unique_v5c", &asset_args(json!({ "assetID": "2000000000" })))
            .unwrap(),
        b"true"
    );
}

#[test]
fn same_identifier_race_has_one_winner() {
    let ledger = TestLedger::new();
    let registry = Registry::default();
    let id = AssetId::new(V5C);

    let mut a = LedgerTransaction::begin(&ledger.store);
    let mut b = LedgerTransaction::begin(&ledger.store);
    registry.create(&mut a, &id, Some(Role::Regulator)).unwrap();
    registry.create(&mut b, &id, Some(Role::Regulator)).unwrap();

    a.commit().unwrap();
    assert!(b.commit().is_err());

    let listed = json(&ledger.regulator().invoke("readAllAssets", &[]).unwrap());
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[test]
fn concurrent_creates_with_retry_all_land() {
    const THREADS: usize = 8;
    let ledger = Arc::new(TestLedger::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let ledger = Arc::clone(&ledger);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let dvla = ledger.regulator();
                let args = asset_args(json!({ "assetID": format!("{:010}", i + 1) }));
                barrier.wait();
                loop {
                    match dvla.invoke("createAsset", &args) {
                        Ok(_) => break,
                        Err(e) if e.is_retryable() => continue,
                        Err(e) => panic!("create failed: {:?}", e),
                    }
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let listed = json(&ledger.regulator().invoke("readAllAssets", &[]).unwrap());
    let mut ids: Vec<String> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["assetstate"]["asset"]["v5cID"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    let expected: Vec<String> = (1..=THREADS).map(|i| format!("{:010}", i)).collect();
    assert_eq!(ids, expected);
}
