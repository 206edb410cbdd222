// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::store::TransactionStore;
use anyhow::Result;
use chrono::NaiveDate;

pub fn handle(store: &TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("snapshot", sub)) => export_snapshot(store, sub),
        _ => Ok(()),
    }
}

/// The date in the name is cosmetic; the content is just the snapshot.
pub fn default_file_name(today: NaiveDate) -> String {
    format!("finance_backup_{}.json", today.format("%Y-%m-%d"))
}

fn export_snapshot(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = match sub.get_one::<String>("out") {
        Some(p) => p.trim().to_string(),
        None => default_file_name(chrono::Utc::now().date_naive()),
    };

    match fmt.as_str() {
        "json" => write_json(store.snapshot(), &out)?,
        "csv" => write_csv(store.snapshot(), &out)?,
        _ => anyhow::bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} transactions to {}", store.len(), out);
    Ok(())
}

pub fn write_json(snapshot: &[Transaction], out: &str) -> Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(snapshot)?)?;
    Ok(())
}

pub fn write_csv(snapshot: &[Transaction], out: &str) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(["id", "date", "description", "amount", "type", "category"])?;
    for t in snapshot {
        let date = t.date.to_string();
        let amount = t.amount.to_string();
        wtr.write_record([
            t.id.as_str(),
            date.as_str(),
            t.description.as_str(),
            amount.as_str(),
            t.r#type.as_str(),
            t.category.label(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
