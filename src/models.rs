// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed category set. Serialized by human-readable label so stored
/// snapshots match the labels users see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Salary,
    Freelance,
    Investment,
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    Transportation,
    #[serde(rename = "Housing & Utilities")]
    HousingAndUtilities,
    Entertainment,
    Shopping,
    #[serde(rename = "Health & Fitness")]
    HealthAndFitness,
    Education,
    Others,
}

impl Category {
    /// Categories offered for income entries.
    pub const INCOME: [Category; 4] = [
        Category::Salary,
        Category::Freelance,
        Category::Investment,
        Category::Others,
    ];

    /// Categories offered for expense entries.
    pub const EXPENSE: [Category; 8] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::HousingAndUtilities,
        Category::Entertainment,
        Category::Shopping,
        Category::HealthAndFitness,
        Category::Education,
        Category::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investment => "Investment",
            Self::FoodAndDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::HousingAndUtilities => "Housing & Utilities",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::HealthAndFitness => "Health & Fitness",
            Self::Education => "Education",
            Self::Others => "Others",
        }
    }

    pub fn from_label(s: &str) -> Option<Category> {
        let all = [
            Category::Salary,
            Category::Freelance,
            Category::Investment,
            Category::FoodAndDining,
            Category::Transportation,
            Category::HousingAndUtilities,
            Category::Entertainment,
            Category::Shopping,
            Category::HealthAndFitness,
            Category::Education,
            Category::Others,
        ];
        all.into_iter().find(|c| c.label().eq_ignore_ascii_case(s))
    }

    pub fn offered_for(kind: TransactionType) -> &'static [Category] {
        match kind {
            TransactionType::Income => &Self::INCOME,
            TransactionType::Expense => &Self::EXPENSE,
        }
    }

    /// Entry-time convention only; imported data may pair any category with
    /// any type.
    pub fn allows(self, kind: TransactionType) -> bool {
        Category::offered_for(kind).contains(&self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub category: Category,
}

/// A transaction as entered by the user; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: String, // YYYY-MM
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Structured reply from the insight service. Session-only, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub analysis: String,
    pub suggestions: Vec<String>,
    #[serde(rename = "savingTips")]
    pub saving_tips: String,
}

/// Display and insight language. The app shipped bilingual with Chinese as
/// the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Zh,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// The language name spelled out for the model prompt.
    pub fn prompt_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "Chinese",
        }
    }

    pub fn from_tag(s: &str) -> Option<Language> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
