//! `/periods` endpoints.

use crate::error::AdminResult;
use crate::forms::validate_period;
use crate::models::{EvaluationPeriod, PeriodRequest};

use super::client::ApiClient;

impl ApiClient {
    /// `GET /periods`.
    pub async fn list_periods(&self) -> AdminResult<Vec<EvaluationPeriod>> {
        self.get("/periods").await
    }

    /// `GET /periods/{id}`.
    pub async fn get_period(&self, id: i64) -> AdminResult<EvaluationPeriod> {
        self.get(&format!("/periods/{}", id)).await
    }

    /// `POST /periods`, after validating the dates.
    pub async fn create_period(&self, request: &PeriodRequest) -> AdminResult<EvaluationPeriod> {
        validate_period(request)?;
        self.post("/periods", request).await
    }

    /// `PUT /periods/{id}`, after validating the dates.
    pub async fn update_period(
        &self,
        id: i64,
        request: &PeriodRequest,
    ) -> AdminResult<EvaluationPeriod> {
        validate_period(request)?;
        self.put(&format!("/periods/{}", id), request).await
    }

    /// `DELETE /periods/{id}`.
    pub async fn delete_period(&self, id: i64) -> AdminResult<()> {
        self.delete(&format!("/periods/{}", id)).await
    }
}
