//! `/templates` endpoints.

use crate::error::AdminResult;
use crate::forms::validate_template;
use crate::models::{Template, TemplateRequest};

use super::client::ApiClient;

impl ApiClient {
    /// `GET /templates`.
    pub async fn list_templates(&self) -> AdminResult<Vec<Template>> {
        self.get("/templates").await
    }

    /// `GET /templates/{id}`.
    pub async fn get_template(&self, id: i64) -> AdminResult<Template> {
        self.get(&format!("/templates/{}", id)).await
    }

    /// `POST /templates`; every category must add up to 100%.
    pub async fn create_template(&self, request: &TemplateRequest) -> AdminResult<Template> {
        validate_template(request)?;
        self.post("/templates", request).await
    }

    /// `PUT /templates/{id}`.
    pub async fn update_template(
        &self,
        id: i64,
        request: &TemplateRequest,
    ) -> AdminResult<Template> {
        validate_template(request)?;
        self.put(&format!("/templates/{}", id), request).await
    }

    /// `DELETE /templates/{id}`.
    pub async fn delete_template(&self, id: i64) -> AdminResult<()> {
        self.delete(&format!("/templates/{}", id)).await
    }
}
