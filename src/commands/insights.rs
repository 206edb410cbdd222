// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::insight::InsightClient;
use crate::models::{Insight, Language};
use crate::store::{self, TransactionStore};
use crate::utils::maybe_print_json;
use anyhow::{Context, Result};

pub fn handle(store: &TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    if store.is_empty() {
        anyhow::bail!("No transactions recorded yet; nothing to analyze");
    }
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let language = match m.get_one::<String>("language") {
        Some(tag) => Language::from_tag(tag)
            .with_context(|| format!("Unknown language '{}', expected en or zh", tag))?,
        None => store::load_language(&store::data_dir()?.join(store::LANGUAGE_FILE)),
    };

    let client = InsightClient::from_env()?;
    let insight = client
        .request(store.snapshot(), language)
        .context("Insight unavailable (the snapshot was not changed; you can retry)")?;

    if !maybe_print_json(json_flag, jsonl_flag, &insight)? {
        render(&insight);
    }
    Ok(())
}

fn render(insight: &Insight) {
    println!("Analysis");
    println!("  {}", insight.analysis);
    println!();
    println!("Suggestions");
    for (i, s) in insight.suggestions.iter().enumerate() {
        println!("  {}. {}", i + 1, s);
    }
    println!();
    println!("Saving tip");
    println!("  {}", insight.saving_tips);
}
