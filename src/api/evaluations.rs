//! `/evaluations` endpoints, including scoring, submission and export.

use tracing::info;

use crate::error::AdminResult;
use crate::forms::{
    EvaluationDraft, EvaluationSubmission, validate_bulk_request, validate_evaluation_request,
    validate_from_template_request, validate_scores,
};
use crate::models::{
    BulkEvaluationRequest, BulkEvaluationResult, CreateEvaluationRequest, Evaluation,
    EvaluationFilter, FromTemplateRequest, Score, ScoresRequest,
};

use super::client::ApiClient;

/// What a submitted draft produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatedEvaluations {
    /// Manual and from-template flows create one evaluation.
    Single(Evaluation),
    /// The bulk flow reports counts.
    Bulk(BulkEvaluationResult),
}

impl ApiClient {
    /// `GET /evaluations`, narrowed by `filter`.
    pub async fn list_evaluations(
        &self,
        filter: &EvaluationFilter,
    ) -> AdminResult<Vec<Evaluation>> {
        self.get_with_query("/evaluations", &filter.query_pairs()).await
    }

    /// `GET /evaluations/{id}`.
    pub async fn get_evaluation(&self, id: i64) -> AdminResult<Evaluation> {
        self.get(&format!("/evaluations/{}", id)).await
    }

    /// `POST /evaluations`, after checking the criteria balance per category.
    pub async fn create_evaluation(
        &self,
        request: &CreateEvaluationRequest,
    ) -> AdminResult<Evaluation> {
        validate_evaluation_request(request)?;
        self.post("/evaluations", request).await
    }

    /// `POST /evaluations/from-template`.
    pub async fn create_from_template(
        &self,
        request: &FromTemplateRequest,
    ) -> AdminResult<Evaluation> {
        validate_from_template_request(request)?;
        self.post("/evaluations/from-template", request).await
    }

    /// `POST /evaluations/bulk`.
    pub async fn create_bulk(
        &self,
        request: &BulkEvaluationRequest,
    ) -> AdminResult<BulkEvaluationResult> {
        validate_bulk_request(request)?;
        self.post("/evaluations/bulk", request).await
    }

    /// Validates a draft and sends it to the endpoint of its mode.
    pub async fn submit_draft(&self, draft: EvaluationDraft) -> AdminResult<CreatedEvaluations> {
        let mode = draft.mode;
        let created = match draft.into_submission()? {
            EvaluationSubmission::Manual(request) => {
                CreatedEvaluations::Single(self.create_evaluation(&request).await?)
            }
            EvaluationSubmission::FromTemplate(request) => {
                CreatedEvaluations::Single(self.create_from_template(&request).await?)
            }
            EvaluationSubmission::Bulk(request) => {
                CreatedEvaluations::Bulk(self.create_bulk(&request).await?)
            }
        };
        info!(mode = ?mode, "Evaluation draft submitted");
        Ok(created)
    }

    /// `PUT /evaluations/{id}/scores`, after validating ranges.
    pub async fn save_scores(&self, id: i64, scores: &[Score]) -> AdminResult<Evaluation> {
        validate_scores(scores)?;
        let request = ScoresRequest {
            scores: scores.to_vec(),
        };
        self.put(&format!("/evaluations/{}/scores", id), &request).await
    }

    /// `POST /evaluations/{id}/submit`: finalizes the scores.
    pub async fn submit_evaluation(&self, id: i64) -> AdminResult<Evaluation> {
        self.post(&format!("/evaluations/{}/submit", id), &serde_json::json!({})).await
    }

    /// `DELETE /evaluations/{id}`.
    pub async fn delete_evaluation(&self, id: i64) -> AdminResult<()> {
        self.delete(&format!("/evaluations/{}", id)).await
    }

    /// `GET /evaluations/{id}/export`: the rendered report as raw bytes.
    pub async fn export_evaluation(&self, id: i64) -> AdminResult<Vec<u8>> {
        self.get_bytes(&format!("/evaluations/{}/export", id)).await
    }
}
