//! Form validation and the shared evaluation creation flow.
//!
//! Validation runs before any request is sent; a failing form never reaches
//! the backend.

mod evaluation_draft;
mod validation;

pub use evaluation_draft::{EvaluationDraft, EvaluationMode, EvaluationSubmission};
pub use validation::{
    MAX_CRITERION_WEIGHT, MAX_SCORE, MIN_CRITERION_WEIGHT, MIN_PASSWORD_LENGTH, MIN_SCORE,
    check_weighted_items, validate_bulk_request, validate_criterion, validate_evaluation_request,
    validate_from_template_request, validate_new_password, validate_new_user, validate_period,
    validate_scores, validate_template, validate_user_update,
};
