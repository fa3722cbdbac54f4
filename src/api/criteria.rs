//! `/criteria` endpoints.

use crate::error::AdminResult;
use crate::forms::validate_criterion;
use crate::models::{Criterion, CriterionRequest};

use super::client::ApiClient;

impl ApiClient {
    /// `GET /criteria`.
    pub async fn list_criteria(&self) -> AdminResult<Vec<Criterion>> {
        self.get("/criteria").await
    }

    /// `GET /criteria/{id}`.
    pub async fn get_criterion(&self, id: i64) -> AdminResult<Criterion> {
        self.get(&format!("/criteria/{}", id)).await
    }

    /// `POST /criteria`; weights outside `[0.01, 1.0]` never leave the client.
    pub async fn create_criterion(&self, request: &CriterionRequest) -> AdminResult<Criterion> {
        validate_criterion(request)?;
        self.post("/criteria", request).await
    }

    /// `PUT /criteria/{id}`.
    pub async fn update_criterion(
        &self,
        id: i64,
        request: &CriterionRequest,
    ) -> AdminResult<Criterion> {
        validate_criterion(request)?;
        self.put(&format!("/criteria/{}", id), request).await
    }

    /// `DELETE /criteria/{id}`.
    pub async fn delete_criterion(&self, id: i64) -> AdminResult<()> {
        self.delete(&format!("/criteria/{}", id)).await
    }
}
