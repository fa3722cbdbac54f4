//! Lightweight reference projections used to populate form selectors.

use serde::{Deserialize, Serialize};

use super::Category;

/// An `{id, name}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Identifier of the referenced record.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// A criterion reference, carrying its category for grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionReference {
    /// Criterion identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Category.
    pub category: Category,
}

/// Returned by `/references/forms`: what the criterion and template forms need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReferences {
    /// Known criteria.
    #[serde(default)]
    pub criteria: Vec<CriterionReference>,
    /// Known templates.
    #[serde(default)]
    pub templates: Vec<Reference>,
}

/// Returned by `/references/evaluations`: what the evaluation forms need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReferences {
    /// Periods evaluations can be created in.
    #[serde(default)]
    pub periods: Vec<Reference>,
    /// Templates.
    #[serde(default)]
    pub templates: Vec<Reference>,
    /// Users allowed to evaluate.
    #[serde(default)]
    pub evaluators: Vec<Reference>,
}

/// Returned by `/references/all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllReferences {
    /// All users.
    #[serde(default)]
    pub users: Vec<Reference>,
    /// All periods.
    #[serde(default)]
    pub periods: Vec<Reference>,
    /// All criteria.
    #[serde(default)]
    pub criteria: Vec<CriterionReference>,
    /// All templates.
    #[serde(default)]
    pub templates: Vec<Reference>,
}
