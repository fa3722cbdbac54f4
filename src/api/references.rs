//! `/references` endpoints and the combined evaluation-form loader.

use crate::error::AdminResult;
use crate::models::{
    AllReferences, EvaluationPeriod, EvaluationReferences, FormReferences, Reference, Role,
};

use super::client::ApiClient;

/// Everything the evaluation creation form needs before it can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationFormContext {
    /// Selectable employees.
    pub employees: Vec<Reference>,
    /// Periods, templates and evaluators.
    pub references: EvaluationReferences,
    /// Full period records, for status display.
    pub periods: Vec<EvaluationPeriod>,
}

impl ApiClient {
    /// `GET /references/forms`.
    pub async fn form_references(&self) -> AdminResult<FormReferences> {
        self.get("/references/forms").await
    }

    /// `GET /references/evaluations`.
    pub async fn evaluation_references(&self) -> AdminResult<EvaluationReferences> {
        self.get("/references/evaluations").await
    }

    /// `GET /references/all`.
    pub async fn all_references(&self) -> AdminResult<AllReferences> {
        self.get("/references/all").await
    }

    /// `GET /references/users/{role}`.
    pub async fn users_by_role(&self, role: Role) -> AdminResult<Vec<Reference>> {
        self.get(&format!("/references/users/{}", role.as_str())).await
    }

    /// Loads employees, evaluation references and periods concurrently.
    ///
    /// The three requests are independent; the first failure is returned.
    pub async fn load_evaluation_form_context(&self) -> AdminResult<EvaluationFormContext> {
        let (employees, references, periods) = tokio::try_join!(
            self.users_by_role(Role::Employee),
            self.evaluation_references(),
            self.list_periods(),
        )?;

        Ok(EvaluationFormContext {
            employees,
            references,
            periods,
        })
    }
}
