// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Category;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => {
            let mut rows = Vec::new();
            for c in Category::INCOME {
                rows.push(vec!["INCOME".to_string(), c.label().to_string()]);
            }
            for c in Category::EXPENSE {
                rows.push(vec!["EXPENSE".to_string(), c.label().to_string()]);
            }
            println!("{}", pretty_table(&["Type", "Category"], rows));
        }
        _ => {}
    }
    Ok(())
}
