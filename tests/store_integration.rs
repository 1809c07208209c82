//! End-to-end integration tests for the donation record store
//!
//! These tests run the full donation lifecycle against both bundled
//! backends and pin the persisted wire form.

use alms::store::{sample_donations, Donation, LedgerBackend, MemoryLedger, RecordStore, RedbLedger, StoreError};

/// Run the full lifecycle against any backend: seed, existence check,
/// transfer, delete, and the NotFound tail.
fn run_donation_lifecycle<B: LedgerBackend>(ledger: B) {
    let mut store = RecordStore::new(ledger);
    store
        .seed(&[Donation::new("d1", "money", 0, "Alice", 300)])
        .unwrap();

    assert!(store.exists("d1").unwrap());
    assert_eq!(store.transfer("d1", "Bob").unwrap(), "Alice");
    assert_eq!(store.read("d1").unwrap().donor, "Bob");

    store.delete("d1").unwrap();
    assert!(!store.exists("d1").unwrap());
    assert!(matches!(store.read("d1"), Err(StoreError::NotFound(_))));
}

#[test]
fn e2e_lifecycle_on_memory_ledger() {
    run_donation_lifecycle(MemoryLedger::new());
}

#[test]
fn e2e_lifecycle_on_redb_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = RedbLedger::open(dir.path().join("alms.redb")).unwrap();
    run_donation_lifecycle(ledger);
}

#[test]
fn e2e_seeded_ledger_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("alms.redb");

    {
        let ledger = RedbLedger::open(&db_path).unwrap();
        let mut store = RecordStore::new(ledger);
        store.seed(&sample_donations()).unwrap();
        store.delete("donation2").unwrap();
    }

    let ledger = RedbLedger::open(&db_path).unwrap();
    let store = RecordStore::new(ledger);

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), sample_donations().len() - 1);
    assert!(all.iter().all(|record| record.id != "donation2"));
}

#[test]
fn e2e_wire_form_is_stable_across_backends() {
    let record = Donation::new("d1", "money", 0, "Alice", 300);
    let expected =
        r#"{"AppraisedValue":300,"DonationType":"money","ID":"d1","Donor":"Alice","Size":0}"#;

    // What the store persists is exactly the canonical encoding
    let mut store = RecordStore::new(MemoryLedger::new());
    store.create(record.clone()).unwrap();
    assert_eq!(
        store.ledger().get("d1").unwrap().unwrap(),
        expected.as_bytes()
    );

    let dir = tempfile::tempdir().unwrap();
    let ledger = RedbLedger::open(dir.path().join("alms.redb")).unwrap();
    let mut store = RecordStore::new(ledger);
    store.create(record).unwrap();
    assert_eq!(
        store.ledger().get("d1").unwrap().unwrap(),
        expected.as_bytes()
    );
}
