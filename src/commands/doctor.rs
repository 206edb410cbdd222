// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::TransactionStore;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Surfaces records the lenient import lets through: duplicate ids,
/// non-positive amounts, empty descriptions, and category/type pairings the
/// entry form would not have offered.
pub fn handle(store: &TransactionStore) -> Result<()> {
    let mut rows = Vec::new();

    let mut seen: HashSet<&str> = HashSet::new();
    for t in store.snapshot() {
        if !seen.insert(t.id.as_str()) {
            rows.push(vec!["duplicate_id".into(), t.id.clone()]);
        }
        if t.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".into(),
                format!("{} {}", t.id, t.amount),
            ]);
        }
        if t.description.trim().is_empty() {
            rows.push(vec!["empty_description".into(), t.id.clone()]);
        }
        if !t.category.allows(t.r#type) {
            rows.push(vec![
                "category_type_mismatch".into(),
                format!("{} {} '{}'", t.id, t.r#type, t.category),
            ]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
