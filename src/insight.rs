// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Financial insight via the Gemini generateContent API.
//!
//! The request carries a reduced view of the snapshot (date, type, amount,
//! category, desc) and a response schema constraining the reply to the
//! three-field insight shape. Transport failure, timeout, and shape
//! deviations are distinct error kinds; none is retried automatically.
//!
//! Configuration:
//! - `GEMINI_API_KEY`: API key (required)
//! - `GEMINI_MODEL`: model name (default: gemini-3-flash-preview)
//! - `GEMINI_BASE_URL`: endpoint override, mainly for testing

use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::{Insight, Language, Transaction};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const UA: &str = concat!(
    "fintrack/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/fintrack)"
);

#[derive(Debug, Clone)]
pub struct InsightClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl InsightClient {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| Error::MissingApiKey)?;
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(api_key, model, base_url)
    }

    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(UA)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// One blocking call; the snapshot is captured at invocation time.
    /// Callers should not hand this an empty snapshot.
    pub fn request(&self, snapshot: &[Transaction], language: Language) -> Result<Insight> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = build_request(snapshot, language);
        let reply: GenerateContentResponse = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(classify_transport)?
            .json()
            .map_err(classify_transport)?;
        parse_insight(&candidate_text(&reply)?)
    }
}

fn classify_transport(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::InsightTimeout
    } else if err.is_decode() {
        Error::InsightParse(err.to_string())
    } else {
        Error::Http(err)
    }
}

/// The generateContent request body: reduced transaction list in the prompt,
/// advisor persona and target language in the system instruction, and a
/// schema pinning the reply to exactly the insight fields.
pub fn build_request(snapshot: &[Transaction], language: Language) -> serde_json::Value {
    let reduced: Vec<serde_json::Value> = snapshot
        .iter()
        .map(|t| {
            json!({
                "date": t.date,
                "type": t.r#type,
                "amount": t.amount,
                "category": t.category,
                "desc": t.description,
            })
        })
        .collect();
    json!({
        "contents": [{
            "parts": [{
                "text": format!(
                    "Analyze these financial transactions (in CNY ¥) and provide insights in JSON format: {}",
                    serde_json::Value::Array(reduced)
                )
            }]
        }],
        "systemInstruction": {
            "parts": [{
                "text": format!(
                    "You are a world-class financial advisor. Analyze the user's spending habits in CNY (Yuan), \
                     suggest ways to save money, and provide a brief analysis of their financial health. \
                     You MUST return the response in {} language. Return ONLY a JSON object.",
                    language.prompt_name()
                )
            }]
        },
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "analysis": {
                        "type": "STRING",
                        "description": "Detailed analysis of the current financial situation"
                    },
                    "suggestions": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "List of actionable improvements"
                    },
                    "savingTips": {
                        "type": "STRING",
                        "description": "A specific tip for saving money this month"
                    }
                },
                "required": ["analysis", "suggestions", "savingTips"]
            }
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

fn candidate_text(reply: &GenerateContentResponse) -> Result<String> {
    let text: String = reply
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|c| c.parts.iter().map(|p| p.text.as_str()).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(Error::InsightParse(
            "response contains no candidate text".into(),
        ));
    }
    Ok(text)
}

/// Extract the insight object from candidate text. Models wrap JSON in prose
/// or code fences, so scan for the outermost `{...}` span before decoding.
pub fn parse_insight(response: &str) -> Result<Insight> {
    let response = response.trim();
    let start = response.find('{');
    let end = response.rfind('}');

    match (start, end) {
        (Some(s), Some(e)) if s < e => {
            let json_str = &response[s..=e];
            serde_json::from_str(json_str).map_err(|err| {
                let truncated: String = json_str.chars().take(200).collect();
                Error::InsightParse(format!(
                    "invalid JSON from model: {} | Raw: {}",
                    err, truncated
                ))
            })
        }
        _ => Err(Error::InsightParse(
            "no JSON object found in model response".into(),
        )),
    }
}
