// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::TransactionStore;
use crate::summary::{category_breakdown, monthly_series, totals};
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;

pub fn handle(store: &TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("cashflow", sub)) => cashflow(store, sub)?,
        Some(("spend-by-category", sub)) => spend_by_category(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let t = totals(store.snapshot());
    if !maybe_print_json(json_flag, jsonl_flag, &t)? {
        let rows = vec![vec![
            fmt_money(&t.income),
            fmt_money(&t.expense),
            fmt_money(&t.balance),
        ]];
        println!("{}", pretty_table(&["Income", "Expense", "Balance"], rows));
    }
    Ok(())
}

fn cashflow(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&12);

    let mut series = monthly_series(store.snapshot());
    if series.len() > months {
        series.drain(..series.len() - months);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        let rows: Vec<Vec<String>> = series
            .iter()
            .map(|s| {
                vec![
                    s.month.clone(),
                    format!("{:.2}", s.income),
                    format!("{:.2}", s.expense),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expense"], rows));
    }
    Ok(())
}

fn spend_by_category(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;

    let breakdown = match month {
        Some(m) => {
            let scoped: Vec<_> = store
                .snapshot()
                .iter()
                .filter(|t| t.date.format("%Y-%m").to_string() == m)
                .cloned()
                .collect();
            category_breakdown(&scoped)
        }
        None => category_breakdown(store.snapshot()),
    };
    if !maybe_print_json(json_flag, jsonl_flag, &breakdown)? {
        let rows: Vec<Vec<String>> = breakdown
            .iter()
            .map(|c| vec![c.category.to_string(), format!("{:.2}", c.total)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}
