// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Error;
use crate::models::Transaction;
use crate::store::TransactionStore;
use anyhow::{Context, Result};

pub fn handle(store: &mut TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("snapshot", sub)) => import_snapshot(store, sub),
        _ => Ok(()),
    }
}

fn import_snapshot(store: &mut TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let raw = std::fs::read_to_string(path).with_context(|| format!("Open {}", path))?;
    let snapshot = parse_snapshot(&raw)?;
    let count = snapshot.len();
    store.replace_all(snapshot)?;
    println!(
        "Imported {} transactions from {} (previous snapshot replaced)",
        count, path
    );
    Ok(())
}

/// Accepts a JSON array of transaction records and nothing else. Invalid
/// JSON, a non-array top level, and an undecodable element are distinct
/// failures; on any of them the caller's store is left untouched. Unknown
/// extra keys on a record are ignored.
pub fn parse_snapshot(raw: &str) -> crate::error::Result<Vec<Transaction>> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => return Err(Error::ImportShape(json_kind(&other))),
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| Error::ImportRecord { index, source })
        })
        .collect()
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
