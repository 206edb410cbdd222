// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{Language, NewTransaction, Transaction};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Fintrack", "fintrack"));

pub const TRANSACTIONS_FILE: &str = "transactions.json";
pub const LANGUAGE_FILE: &str = "language.json";

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(Error::DataDir)?;
    let dir = proj.data_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.to_path_buf())
}

/// The transaction snapshot, backed by a single JSON document.
///
/// Every mutating operation rewrites the document before returning, so the
/// on-disk snapshot always matches the in-memory one. Rehydration is
/// fail-soft: a missing file or a document that does not decode as a
/// transaction array reads as the empty snapshot.
#[derive(Debug)]
pub struct TransactionStore {
    path: PathBuf,
    items: Vec<Transaction>,
}

impl TransactionStore {
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(data_dir()?.join(TRANSACTIONS_FILE)))
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str::<Vec<Transaction>>(&raw).unwrap_or_default(),
            Err(_) => Vec::new(),
        };
        Self { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> &[Transaction] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Assigns a fresh random id, appends, persists, and returns the record.
    pub fn add(&mut self, new: NewTransaction) -> Result<Transaction> {
        let tx = Transaction {
            id: Uuid::new_v4().to_string(),
            date: new.date,
            description: new.description,
            amount: new.amount,
            r#type: new.r#type,
            category: new.category,
        };
        self.items.push(tx.clone());
        self.persist()?;
        Ok(tx)
    }

    /// Removes the record with `id` if present. Returns `false` (not an
    /// error) when no record matches; nothing is rewritten in that case.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Replaces the whole snapshot (import). Shape validation happens at the
    /// import-parse layer; a failed import never reaches this point.
    pub fn replace_all(&mut self, items: Vec<Transaction>) -> Result<()> {
        self.items = items;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(&self.items)?)?;
        Ok(())
    }
}

/// Fail-soft: missing or unreadable settings read as the default language.
pub fn load_language(path: &Path) -> Language {
    match fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        Err(_) => Language::default(),
    }
}

pub fn save_language(path: &Path, lang: Language) -> Result<()> {
    fs::write(path, serde_json::to_string(&lang)?)?;
    Ok(())
}
