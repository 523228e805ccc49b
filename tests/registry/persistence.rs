//! Ledger snapshots survive a restart.

use crate::common::*;
use serde_json::json;

#[test]
fn snapshot_restores_records_and_index() {
    let (_dir, path) = snapshot_dir();
    let ledger = TestLedger::new();
    ledger.register_to(V5C, "alice");
    ledger
        .private("alice")
        .invoke(
            "updateDoc",
            &asset_args(json!({ "assetID": V5C, "caller": "alice", "afDoc": "note" })),
        )
        .unwrap();
    ledger
        .regulator()
        .invoke("init", &["alice".into(), "cert-alice".into()])
        .unwrap();
    ledger.store.save_snapshot(&path).unwrap();

    let restored = reopen(&path);
    assert_eq!(
        restored.store().current_version(),
        ledger.store.current_version()
    );
    let listed = json(&restored.invoke("readAllAssets", &[]).unwrap());
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["assetstate"]["asset"]["ownerId"], "alice");
    assert_eq!(listed[0]["assetstate"]["asset"]["afDoc"], "note");
    assert_eq!(
        restored.invoke("get_ecert", &["alice".into()]).unwrap(),
        b"cert-alice"
    );

    let err = restored
        .invoke("createAsset", &asset_args(json!({ "assetID": V5C })))
        .unwrap_err();
    assert_eq!(err.code(), "DUPLICATE_ASSET");
}

#[test]
fn missing_snapshot_opens_empty() {
    let (_dir, path) = snapshot_dir();
    let store = LedgerStore::open_or_empty(&path).unwrap();
    assert!(store.is_empty());
    assert!(!path.exists());
}

#[test]
fn garbage_snapshot_is_rejected() {
    let (_dir, path) = snapshot_dir();
    std::fs::write(&path, b"not a snapshot").unwrap();
    assert!(matches!(
        LedgerStore::load_snapshot(&path),
        Err(custody::SnapshotError::Format { .. })
    ));
}
