//! Evaluation criterion models.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed grouping of evaluation criteria.
///
/// Each category's weights must independently add up to 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Output and results.
    Productivity,
    /// Workplace conduct and attitude.
    Conduct,
    /// Technical and soft skills.
    Skills,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Productivity, Category::Conduct, Category::Skills];

    /// The key used for this category on the wire and in weighted items.
    pub fn key(self) -> &'static str {
        match self {
            Category::Productivity => "productivity",
            Category::Conduct => "conduct",
            Category::Skills => "skills",
        }
    }

    /// Parses a wire key back into a category.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A criterion as returned by `/criteria`.
///
/// `weight` is a fraction in `0.01..=1.0`; `0.30` displays as `30.00%`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Category the criterion belongs to.
    pub category: Category,
    /// Default weight as a fraction.
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for `POST /criteria` and `PUT /criteria/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionRequest {
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category.
    pub category: Category,
    /// Weight as a fraction.
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,
}
