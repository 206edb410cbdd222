// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::commands::importer::{self, parse_snapshot};
use fintrack::error::Error;
use fintrack::models::{Category, NewTransaction, TransactionType};
use fintrack::store::TransactionStore;
use fintrack::cli;
use tempfile::tempdir;

fn seeded_store(path: &std::path::Path) -> TransactionStore {
    let mut store = TransactionStore::open(path);
    store
        .add(NewTransaction {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            description: "Existing".to_string(),
            amount: "10".parse().unwrap(),
            r#type: TransactionType::Expense,
            category: Category::Shopping,
        })
        .unwrap();
    store
}

#[test]
fn parse_rejects_json_object_with_shape_error() {
    let err = parse_snapshot("{}").unwrap_err();
    assert!(matches!(err, Error::ImportShape(_)));
    assert!(err.to_string().contains("got an object"));
}

#[test]
fn parse_rejects_invalid_json_with_parse_error() {
    let err = parse_snapshot("not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn parse_reports_index_of_malformed_record() {
    let raw = r#"[
        {"id":"a","date":"2024-06-01","description":"Coffee","amount":"4.50","type":"EXPENSE","category":"Food & Dining"},
        {"id":"b"}
    ]"#;
    match parse_snapshot(raw).unwrap_err() {
        Error::ImportRecord { index, .. } => assert_eq!(index, 1),
        other => panic!("expected ImportRecord, got {:?}", other),
    }
}

#[test]
fn parse_accepts_numeric_amounts_and_unknown_keys() {
    let raw = r#"[
        {"id":"a","date":"2024-06-01","description":"Coffee","amount":4.5,"type":"EXPENSE","category":"Food & Dining","memo":"extra"}
    ]"#;
    let snapshot = parse_snapshot(raw).unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].amount, "4.5".parse().unwrap());
    assert_eq!(snapshot[0].category, Category::FoodAndDining);
}

#[test]
fn parse_accepts_empty_array() {
    assert!(parse_snapshot("[]").unwrap().is_empty());
}

#[test]
fn import_replaces_snapshot_wholesale() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("transactions.json");
    let mut store = seeded_store(&store_path);

    let backup = dir.path().join("backup.json");
    std::fs::write(
        &backup,
        r#"[
            {"id":"x1","date":"2024-06-01","description":"Coffee","amount":"4.50","type":"EXPENSE","category":"Food & Dining"},
            {"id":"x2","date":"2024-06-05","description":"Paycheck","amount":"5000","type":"INCOME","category":"Salary"}
        ]"#,
    )
    .unwrap();

    let backup_str = backup.to_string_lossy().to_string();
    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["fintrack", "import", "snapshot", "--path", &backup_str]);
    if let Some(("import", import_m)) = matches.subcommand() {
        importer::handle(&mut store, import_m).unwrap();
    } else {
        panic!("no import subcommand");
    }

    assert_eq!(store.len(), 2);
    assert!(store.snapshot().iter().all(|t| t.description != "Existing"));

    let reopened = TransactionStore::open(&store_path);
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.snapshot()[0].id, "x1");
}

#[test]
fn failed_import_leaves_store_unchanged() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("transactions.json");
    let mut store = seeded_store(&store_path);

    let backup = dir.path().join("backup.json");
    std::fs::write(&backup, "{}").unwrap();

    let backup_str = backup.to_string_lossy().to_string();
    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["fintrack", "import", "snapshot", "--path", &backup_str]);
    if let Some(("import", import_m)) = matches.subcommand() {
        assert!(importer::handle(&mut store, import_m).is_err());
    } else {
        panic!("no import subcommand");
    }

    assert_eq!(store.len(), 1);
    assert_eq!(store.snapshot()[0].description, "Existing");

    let reopened = TransactionStore::open(&store_path);
    assert_eq!(reopened.len(), 1);
}
