// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::models::{Category, Language, NewTransaction, Transaction, TransactionType};
use fintrack::store::{self, TransactionStore};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn entry(
    date: &str,
    desc: &str,
    amount: &str,
    kind: TransactionType,
    category: Category,
) -> NewTransaction {
    NewTransaction {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        description: desc.to_string(),
        amount: amount.parse::<Decimal>().unwrap(),
        r#type: kind,
        category,
    }
}

#[test]
fn add_assigns_fresh_unique_ids() {
    let dir = tempdir().unwrap();
    let mut store = TransactionStore::open(dir.path().join("transactions.json"));

    let first = store
        .add(entry(
            "2024-06-01",
            "Coffee",
            "4.50",
            TransactionType::Expense,
            Category::FoodAndDining,
        ))
        .unwrap();
    assert_eq!(store.len(), 1);
    assert!(!first.id.is_empty());

    let second = store
        .add(entry(
            "2024-06-02",
            "Tea",
            "3.00",
            TransactionType::Expense,
            Category::FoodAndDining,
        ))
        .unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn add_and_remove_track_snapshot_size() {
    let dir = tempdir().unwrap();
    let mut store = TransactionStore::open(dir.path().join("transactions.json"));

    let a = store
        .add(entry(
            "2025-01-01",
            "Salary",
            "5000",
            TransactionType::Income,
            Category::Salary,
        ))
        .unwrap();
    store
        .add(entry(
            "2025-01-02",
            "Groceries",
            "120.35",
            TransactionType::Expense,
            Category::FoodAndDining,
        ))
        .unwrap();
    store
        .add(entry(
            "2025-01-03",
            "Bus",
            "2.50",
            TransactionType::Expense,
            Category::Transportation,
        ))
        .unwrap();
    assert_eq!(store.len(), 3);

    assert!(store.remove(&a.id).unwrap());
    assert_eq!(store.len(), 2);

    // Deleting a nonexistent id is a no-op, not an error.
    assert!(!store.remove(&a.id).unwrap());
    assert!(!store.remove("no-such-id").unwrap());
    assert_eq!(store.len(), 2);
}

#[test]
fn mutations_persist_for_reopened_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions.json");

    let mut store = TransactionStore::open(&path);
    let a = store
        .add(entry(
            "2025-02-01",
            "Rent",
            "1800",
            TransactionType::Expense,
            Category::HousingAndUtilities,
        ))
        .unwrap();
    store
        .add(entry(
            "2025-02-05",
            "Salary",
            "5000",
            TransactionType::Income,
            Category::Salary,
        ))
        .unwrap();

    let reopened = TransactionStore::open(&path);
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.snapshot()[0].id, a.id);
    assert_eq!(reopened.snapshot()[0].description, "Rent");

    let mut store = reopened;
    store.remove(&a.id).unwrap();
    let reopened = TransactionStore::open(&path);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.snapshot()[0].description, "Salary");
}

#[test]
fn open_is_fail_soft_on_corrupt_or_missing_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions.json");

    // Missing file
    assert!(TransactionStore::open(&path).is_empty());

    // Not JSON at all
    std::fs::write(&path, "definitely not json").unwrap();
    assert!(TransactionStore::open(&path).is_empty());

    // Valid JSON, wrong shape
    std::fs::write(&path, "{\"transactions\": []}").unwrap();
    assert!(TransactionStore::open(&path).is_empty());
}

#[test]
fn replace_all_discards_previous_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("transactions.json");

    let mut store = TransactionStore::open(&path);
    store
        .add(entry(
            "2025-03-01",
            "Cinema",
            "45",
            TransactionType::Expense,
            Category::Entertainment,
        ))
        .unwrap();

    let imported = vec![Transaction {
        id: "imported-1".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        description: "Year-end bonus".to_string(),
        amount: "999.99".parse().unwrap(),
        r#type: TransactionType::Income,
        category: Category::Salary,
    }];
    store.replace_all(imported).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.snapshot()[0].id, "imported-1");

    let reopened = TransactionStore::open(&path);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.snapshot()[0].id, "imported-1");
}

#[test]
fn language_round_trips_and_reads_fail_soft() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("language.json");

    // Missing file reads as the default.
    assert_eq!(store::load_language(&path), Language::Zh);

    store::save_language(&path, Language::En).unwrap();
    assert_eq!(store::load_language(&path), Language::En);

    std::fs::write(&path, "???").unwrap();
    assert_eq!(store::load_language(&path), Language::Zh);
}
