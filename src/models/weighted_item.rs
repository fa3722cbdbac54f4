//! Weighted criterion entries as edited in template and evaluation forms.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A criterion weight inside a category, as edited on screen.
///
/// `weight` is a percentage in `0..=100`. Within one category the weights
/// should add up to 100 before the form is submitted; the type does not
/// enforce that, validation does.
///
/// # Example
///
/// ```
/// use evaluation_admin::models::WeightedItem;
/// use rust_decimal::Decimal;
///
/// let item = WeightedItem::new(7, Decimal::new(50, 0), "productivity");
/// assert!(!item.locked);
/// assert_eq!(item.locked().weight, Decimal::new(50, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedItem {
    /// Criterion identifier.
    pub id: i64,
    /// Percentage weight within the category.
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,
    /// Pinned by the user; excluded from redistribution.
    #[serde(default)]
    pub locked: bool,
    /// Category the weight belongs to.
    pub category_key: String,
}

impl WeightedItem {
    /// Creates an unlocked item.
    pub fn new(id: i64, weight: Decimal, category_key: impl Into<String>) -> Self {
        Self {
            id,
            weight,
            locked: false,
            category_key: category_key.into(),
        }
    }

    /// Returns the same item with `locked` set.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}
