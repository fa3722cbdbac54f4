//! Evaluation template models.
//!
//! A template is a reusable bundle of criteria-with-weights used to
//! instantiate evaluations for many employees at once.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, WeightedItem};

/// A criterion entry inside a template. `weight` is a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCriterion {
    /// Referenced criterion.
    pub criterion_id: i64,
    /// Category the weight is balanced within.
    pub category: Category,
    /// Percentage weight inside the category.
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,
}

impl TemplateCriterion {
    /// Converts to an unlocked weighted item for normalization.
    pub fn to_weighted_item(&self) -> WeightedItem {
        WeightedItem::new(self.criterion_id, self.weight, self.category.key())
    }
}

/// A template as returned by `/templates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Weighted criteria.
    #[serde(default)]
    pub criteria: Vec<TemplateCriterion>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for `POST /templates` and `PUT /templates/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRequest {
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Weighted criteria.
    pub criteria: Vec<TemplateCriterion>,
}

impl TemplateRequest {
    /// Builds a request from edited weighted items.
    ///
    /// Items whose category key is not a known [`Category`] are skipped.
    pub fn from_items(
        name: impl Into<String>,
        description: Option<String>,
        items: &[WeightedItem],
    ) -> Self {
        let criteria = items
            .iter()
            .filter_map(|item| {
                Category::from_key(&item.category_key).map(|category| TemplateCriterion {
                    criterion_id: item.id,
                    category,
                    weight: item.weight,
                })
            })
            .collect();

        Self {
            name: name.into(),
            description,
            criteria,
        }
    }

    /// The criteria as weighted items, in order.
    pub fn weighted_items(&self) -> Vec<WeightedItem> {
        self.criteria
            .iter()
            .map(TemplateCriterion::to_weighted_item)
            .collect()
    }
}
