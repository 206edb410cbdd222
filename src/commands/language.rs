// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Language;
use crate::store;
use anyhow::{Context, Result};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let path = store::data_dir()?.join(store::LANGUAGE_FILE);
    match m.subcommand() {
        Some(("set", sub)) => {
            let tag = sub.get_one::<String>("tag").unwrap();
            let lang = Language::from_tag(tag)
                .with_context(|| format!("Unknown language '{}', expected en or zh", tag))?;
            store::save_language(&path, lang)?;
            println!("Display language set to {}", lang);
        }
        Some(("show", _)) => {
            println!("{}", store::load_language(&path));
        }
        _ => {}
    }
    Ok(())
}
