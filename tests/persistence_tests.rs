use cashflow_core::{
    ledger::{CashflowSnapshot, Direction, Recurrence, TransactionRecord},
    utils::persistence,
};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::TempDir;

#[test]
fn snapshot_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");

    let mut snapshot = CashflowSnapshot::new(dec!(1250.75)).with_name("Household");
    snapshot.add_transaction(TransactionRecord::new(
        "Salary",
        dec!(3200),
        Direction::Income,
        Recurrence::Monthly {
            starts_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ends_on: None,
        },
    ));

    persistence::save_snapshot_to_file(&snapshot, &path).unwrap();
    let loaded = persistence::load_snapshot_from_file(&path).unwrap();
    assert_eq!(loaded, snapshot);
}

#[test]
fn loading_a_missing_snapshot_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist.json");
    assert!(persistence::load_snapshot_from_file(&missing).is_err());
}
