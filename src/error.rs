// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for Fintrack. No kind here is fatal to the store: every
//! failure path leaves the persisted snapshot intact.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine platform-specific data dir")]
    DataDir,

    #[error("Import payload must be a JSON array of transactions, got {0}")]
    ImportShape(&'static str),

    #[error("Import record at index {index} is not a valid transaction: {source}")]
    ImportRecord {
        index: usize,
        source: serde_json::Error,
    },

    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Insight request timed out")]
    InsightTimeout,

    #[error("Invalid insight response: {0}")]
    InsightParse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
