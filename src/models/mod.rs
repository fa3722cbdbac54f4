//! Data shapes mirrored from the evaluation backend.
//!
//! These are pass-through projections of the backend DTOs plus the
//! [`WeightedItem`] used while editing category weights.

mod criterion;
mod dashboard;
mod evaluation;
mod period;
mod reference;
mod template;
mod user;
mod weighted_item;

pub use criterion::{Category, Criterion, CriterionRequest};
pub use dashboard::{DashboardStats, RecentEvaluation};
pub use evaluation::{
    BulkEvaluationRequest, BulkEvaluationResult, CreateEvaluationRequest, Evaluation,
    EvaluationFilter, EvaluationStatus, FromTemplateRequest, Score, ScoresRequest,
};
pub use period::{EvaluationPeriod, PeriodRequest};
pub use reference::{
    AllReferences, CriterionReference, EvaluationReferences, FormReferences, Reference,
};
pub use template::{Template, TemplateCriterion, TemplateRequest};
pub use user::{CreateUserRequest, ResetPasswordRequest, Role, UpdateUserRequest, User};
pub use weighted_item::WeightedItem;
