// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, NewTransaction, Transaction};
use crate::store::TransactionStore;
use crate::utils::{
    fmt_money, maybe_print_json, parse_amount, parse_category, parse_date, parse_month, parse_type,
    pretty_table,
};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &mut TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let kind = parse_type(sub.get_one::<String>("type").unwrap())?;
    let category = parse_category(sub.get_one::<String>("category").unwrap())?;
    let description = sub.get_one::<String>("desc").unwrap().trim().to_string();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };

    if description.is_empty() {
        anyhow::bail!("Description must not be empty");
    }
    // Entry-time convention; stored data is never checked against this.
    if !category.allows(kind) {
        let offered: Vec<&str> = Category::offered_for(kind)
            .iter()
            .map(|c| c.label())
            .collect();
        anyhow::bail!(
            "Category '{}' is not offered for {} entries (choose one of: {})",
            category,
            kind,
            offered.join(", ")
        );
    }

    let tx = store.add(NewTransaction {
        date,
        description,
        amount,
        r#type: kind,
        category,
    })?;
    println!(
        "Recorded {} {} '{}' ({}) on {} [{}]",
        tx.r#type,
        fmt_money(&tx.amount),
        tx.description,
        tx.category,
        tx.date,
        tx.id
    );
    Ok(())
}

fn list(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.r#type.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Description", "Amount", "Id"],
                rows,
            )
        );
    }
    Ok(())
}

fn remove(store: &mut TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if store.remove(id)? {
        println!("Deleted transaction {}", id);
    } else {
        println!("No transaction with id {} (nothing deleted)", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

pub fn query_rows(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let category = sub
        .get_one::<String>("category")
        .map(|s| parse_category(s))
        .transpose()?;
    let kind = sub
        .get_one::<String>("type")
        .map(|s| parse_type(s))
        .transpose()?;

    // Newest first; ties keep reverse insertion order (stable sort).
    let mut items: Vec<&Transaction> = store
        .snapshot()
        .iter()
        .rev()
        .filter(|t| {
            month
                .as_deref()
                .is_none_or(|m| t.date.format("%Y-%m").to_string() == m)
        })
        .filter(|t| category.is_none_or(|c| t.category == c))
        .filter(|t| kind.is_none_or(|k| t.r#type == k))
        .collect();
    items.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        items.truncate(*limit);
    }

    Ok(items
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            r#type: t.r#type.to_string(),
            category: t.category.to_string(),
            description: t.description.clone(),
            amount: t.amount.to_string(),
        })
        .collect())
}
