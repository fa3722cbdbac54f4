//! Evaluation and scoring models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TemplateCriterion;

/// Where an evaluation is in its scoring workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    /// Created, no scores yet.
    Pending,
    /// Some scores saved, not submitted.
    InProgress,
    /// Submitted; scores are final.
    Completed,
}

impl EvaluationStatus {
    /// Wire value, also used as the `status` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            EvaluationStatus::Pending => "pending",
            EvaluationStatus::InProgress => "in_progress",
            EvaluationStatus::Completed => "completed",
        }
    }
}

/// A single criterion score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Scored criterion.
    pub criterion_id: i64,
    /// Score in `0..=100`.
    #[serde(with = "rust_decimal::serde::float")]
    pub score: Decimal,
    /// Optional evaluator comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// An evaluation as returned by `/evaluations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Backend identifier.
    pub id: i64,
    /// Evaluated employee.
    pub employee_id: i64,
    /// Assigned evaluator.
    pub evaluator_id: i64,
    /// Period the evaluation belongs to.
    pub period_id: i64,
    /// Template it was instantiated from, if any.
    #[serde(default)]
    pub template_id: Option<i64>,
    /// Workflow status.
    pub status: EvaluationStatus,
    /// Weighted total computed by the backend.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_score: Option<Decimal>,
    /// Saved scores.
    #[serde(default)]
    pub scores: Vec<Score>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for `POST /evaluations` (manual flow).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEvaluationRequest {
    /// Evaluated employee.
    pub employee_id: i64,
    /// Assigned evaluator.
    pub evaluator_id: i64,
    /// Period.
    pub period_id: i64,
    /// Criteria with percentage weights.
    pub criteria: Vec<TemplateCriterion>,
}

/// Payload for `POST /evaluations/from-template`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromTemplateRequest {
    /// Evaluated employee.
    pub employee_id: i64,
    /// Assigned evaluator.
    pub evaluator_id: i64,
    /// Period.
    pub period_id: i64,
    /// Source template.
    pub template_id: i64,
}

/// Payload for `POST /evaluations/bulk`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkEvaluationRequest {
    /// Evaluated employees.
    pub employee_ids: Vec<i64>,
    /// Assigned evaluator.
    pub evaluator_id: i64,
    /// Period.
    pub period_id: i64,
    /// Source template.
    pub template_id: i64,
}

/// Outcome of a bulk creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkEvaluationResult {
    /// Number of evaluations created.
    pub created: u32,
    /// Employees skipped by the backend (e.g. already evaluated in the period).
    #[serde(default)]
    pub skipped: Vec<i64>,
}

/// Payload for `PUT /evaluations/{id}/scores`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoresRequest {
    /// Scores to save.
    pub scores: Vec<Score>,
}

/// Query filters for `GET /evaluations`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationFilter {
    /// Only evaluations in this period.
    pub period_id: Option<i64>,
    /// Only evaluations of this employee.
    pub employee_id: Option<i64>,
    /// Only evaluations in this status.
    pub status: Option<EvaluationStatus>,
}

impl EvaluationFilter {
    /// Renders the filter as query pairs, omitting unset fields.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(period_id) = self.period_id {
            pairs.push(("period_id", period_id.to_string()));
        }
        if let Some(employee_id) = self.employee_id {
            pairs.push(("employee_id", employee_id.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_evaluation_with_scores() {
        let json = r#"{
            "id": 31,
            "employee_id": 5,
            "evaluator_id": 2,
            "period_id": 1,
            "template_id": 7,
            "status": "in_progress",
            "total_score": 82.5,
            "scores": [{"criterion_id": 3, "score": 90, "comment": "solid"}]
        }"#;
        let evaluation: Evaluation = serde_json::from_str(json).unwrap();
        assert_eq!(evaluation.status, EvaluationStatus::InProgress);
        assert_eq!(evaluation.total_score, Some(Decimal::new(825, 1)));
        assert_eq!(evaluation.scores[0].comment.as_deref(), Some("solid"));
    }

    #[test]
    fn test_missing_total_score_is_none() {
        let json = r#"{
            "id": 31,
            "employee_id": 5,
            "evaluator_id": 2,
            "period_id": 1,
            "status": "pending"
        }"#;
        let evaluation: Evaluation = serde_json::from_str(json).unwrap();
        assert_eq!(evaluation.total_score, None);
        assert!(evaluation.scores.is_empty());
    }

    #[test]
    fn test_filter_query_pairs_skip_unset_fields() {
        let filter = EvaluationFilter {
            period_id: Some(3),
            employee_id: None,
            status: Some(EvaluationStatus::Completed),
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("period_id", "3".to_string()),
                ("status", "completed".to_string())
            ]
        );
        assert!(EvaluationFilter::default().query_pairs().is_empty());
    }
}
