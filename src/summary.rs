// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over the transaction snapshot. Pure functions, recomputed
//! from the full snapshot on every call.

use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use crate::models::{Category, CategoryTotal, MonthlySummary, Totals, Transaction, TransactionType};

pub fn totals(snapshot: &[Transaction]) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in snapshot {
        match t.r#type {
            TransactionType::Income => income += t.amount,
            TransactionType::Expense => expense += t.amount,
        }
    }
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// One entry per month present in the data, ascending by month key. The
/// zero-padded YYYY-MM key makes lexicographic order chronological. Months
/// with no transactions are omitted.
pub fn monthly_series(snapshot: &[Transaction]) -> Vec<MonthlySummary> {
    let mut months: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for t in snapshot {
        let key = t.date.format("%Y-%m").to_string();
        let entry = months.entry(key).or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.r#type {
            TransactionType::Income => entry.0 += t.amount,
            TransactionType::Expense => entry.1 += t.amount,
        }
    }
    months
        .into_iter()
        .map(|(month, (income, expense))| MonthlySummary {
            month,
            income,
            expense,
        })
        .collect()
}

/// Expense totals per category, largest first. Income transactions are
/// excluded entirely.
pub fn category_breakdown(snapshot: &[Transaction]) -> Vec<CategoryTotal> {
    let mut agg: HashMap<Category, Decimal> = HashMap::new();
    for t in snapshot {
        if t.r#type == TransactionType::Expense {
            *agg.entry(t.category).or_insert(Decimal::ZERO) += t.amount;
        }
    }
    let mut items: Vec<CategoryTotal> = agg
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();
    items.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.label().cmp(b.category.label()))
    });
    items
}
