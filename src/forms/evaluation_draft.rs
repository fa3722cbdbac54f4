//! Evaluation creation flows.
//!
//! The console creates evaluations three ways: manually with explicit
//! criteria, from a template for one employee, or from a template for many
//! employees at once. All three share the same draft, validation and
//! submission shape; [`EvaluationMode`] selects what differs.

use serde::{Deserialize, Serialize};

use crate::error::{AdminResult, ValidationErrors};
use crate::models::{
    BulkEvaluationRequest, Category, CreateEvaluationRequest, FromTemplateRequest,
    TemplateCriterion, WeightedItem,
};

use super::validation::{check_employees, check_weighted_items};

/// Which creation flow a draft belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// One employee, criteria chosen by hand.
    Manual,
    /// One employee, criteria copied from a template.
    FromTemplate,
    /// Many employees, criteria copied from a template.
    Bulk,
}

impl EvaluationMode {
    /// Whether the mode instantiates a template.
    pub fn uses_template(self) -> bool {
        matches!(self, EvaluationMode::FromTemplate | EvaluationMode::Bulk)
    }

    /// Whether the mode accepts more than one employee.
    pub fn allows_many_employees(self) -> bool {
        self == EvaluationMode::Bulk
    }
}

/// The in-progress state of an evaluation creation form.
///
/// # Example
///
/// ```
/// use evaluation_admin::forms::{EvaluationDraft, EvaluationMode, EvaluationSubmission};
///
/// let mut draft = EvaluationDraft::new(EvaluationMode::Bulk);
/// draft.period_id = Some(1);
/// draft.evaluator_id = Some(2);
/// draft.template_id = Some(3);
/// draft.employee_ids = vec![10, 11, 12];
///
/// match draft.into_submission().unwrap() {
///     EvaluationSubmission::Bulk(request) => assert_eq!(request.employee_ids.len(), 3),
///     other => panic!("unexpected submission: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationDraft {
    /// Creation flow.
    pub mode: EvaluationMode,
    /// Selected period.
    pub period_id: Option<i64>,
    /// Selected evaluator.
    pub evaluator_id: Option<i64>,
    /// Selected template (template-based modes).
    pub template_id: Option<i64>,
    /// Selected employees.
    pub employee_ids: Vec<i64>,
    /// Hand-picked criteria (manual mode).
    pub criteria: Vec<WeightedItem>,
}

/// A validated draft, ready to be sent to the endpoint of its mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationSubmission {
    /// `POST /evaluations`.
    Manual(CreateEvaluationRequest),
    /// `POST /evaluations/from-template`.
    FromTemplate(FromTemplateRequest),
    /// `POST /evaluations/bulk`.
    Bulk(BulkEvaluationRequest),
}

impl EvaluationDraft {
    /// Creates an empty draft for `mode`.
    pub fn new(mode: EvaluationMode) -> Self {
        Self {
            mode,
            period_id: None,
            evaluator_id: None,
            template_id: None,
            employee_ids: Vec::new(),
            criteria: Vec::new(),
        }
    }

    /// Checks the draft, collecting every failing field.
    pub fn validate(&self) -> AdminResult<()> {
        let mut errors = ValidationErrors::new();

        if self.period_id.is_none() {
            errors.add("period_id", "Period is required");
        }
        if self.evaluator_id.is_none() {
            errors.add("evaluator_id", "Evaluator is required");
        }

        check_employees(
            &mut errors,
            &self.employee_ids,
            self.evaluator_id,
            self.mode.allows_many_employees(),
        );

        if self.mode.uses_template() {
            if self.template_id.is_none() {
                errors.add("template_id", "Template is required");
            }
        } else {
            check_weighted_items(&mut errors, &self.criteria);
            if self
                .criteria
                .iter()
                .any(|item| Category::from_key(&item.category_key).is_none())
            {
                errors.add("criteria", "Unknown criterion category");
            }
        }

        errors.into_result()
    }

    /// Validates the draft and builds the request for its mode.
    pub fn into_submission(self) -> AdminResult<EvaluationSubmission> {
        self.validate()?;

        // validate() guarantees every field read below is present.
        let period_id = self.period_id.unwrap_or_default();
        let evaluator_id = self.evaluator_id.unwrap_or_default();
        let template_id = self.template_id.unwrap_or_default();
        let first_employee = self.employee_ids.first().copied().unwrap_or_default();

        Ok(match self.mode {
            EvaluationMode::Manual => EvaluationSubmission::Manual(CreateEvaluationRequest {
                employee_id: first_employee,
                evaluator_id,
                period_id,
                criteria: self
                    .criteria
                    .iter()
                    .filter_map(|item| {
                        Category::from_key(&item.category_key).map(|category| {
                            TemplateCriterion {
                                criterion_id: item.id,
                                category,
                                weight: item.weight,
                            }
                        })
                    })
                    .collect(),
            }),
            EvaluationMode::FromTemplate => {
                EvaluationSubmission::FromTemplate(FromTemplateRequest {
                    employee_id: first_employee,
                    evaluator_id,
                    period_id,
                    template_id,
                })
            }
            EvaluationMode::Bulk => EvaluationSubmission::Bulk(BulkEvaluationRequest {
                employee_ids: self.employee_ids,
                evaluator_id,
                period_id,
                template_id,
            }),
        })
    }
}
