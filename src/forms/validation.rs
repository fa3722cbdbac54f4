//! Client-side form validation.
//!
//! Each validator collects every failing field into [`ValidationErrors`] and
//! returns [`AdminError::Validation`] when at least one field failed. Nothing
//! here sends a request; callers validate first and only submit on `Ok`.
//!
//! [`AdminError::Validation`]: crate::error::AdminError::Validation

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::calculation::{format_weight, parse_timestamp, unbalanced_categories};
use crate::error::{AdminResult, ValidationErrors};
use crate::models::{
    BulkEvaluationRequest, CreateEvaluationRequest, CreateUserRequest, CriterionRequest,
    FromTemplateRequest, PeriodRequest, Score, TemplateRequest, UpdateUserRequest, WeightedItem,
};

/// Smallest accepted criterion weight (0.01, i.e. 1%).
pub const MIN_CRITERION_WEIGHT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Largest accepted criterion weight (1.0, i.e. 100%).
pub const MAX_CRITERION_WEIGHT: Decimal = Decimal::ONE;

/// Lowest accepted score.
pub const MIN_SCORE: Decimal = Decimal::ZERO;

/// Highest accepted score.
pub const MAX_SCORE: Decimal = Decimal::ONE_HUNDRED;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

fn require(errors: &mut ValidationErrors, field: &str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{} is required", label));
    }
}

fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Validates a criterion create/update form.
///
/// # Example
///
/// ```
/// use evaluation_admin::forms::validate_criterion;
/// use evaluation_admin::models::{Category, CriterionRequest};
/// use rust_decimal::Decimal;
///
/// let mut request = CriterionRequest {
///     name: "Teamwork".to_string(),
///     description: None,
///     category: Category::Skills,
///     weight: Decimal::new(30, 2),
/// };
/// assert!(validate_criterion(&request).is_ok());
///
/// request.weight = Decimal::new(15, 1); // 1.5
/// assert!(validate_criterion(&request).is_err());
/// ```
pub fn validate_criterion(request: &CriterionRequest) -> AdminResult<()> {
    let mut errors = ValidationErrors::new();
    require(&mut errors, "name", &request.name, "Name");

    if request.weight < MIN_CRITERION_WEIGHT || request.weight > MAX_CRITERION_WEIGHT {
        errors.add("weight", "Weight must be between 0.01 and 1.0");
    }

    errors.into_result()
}

/// Validates a period form: name and all three dates required, and
/// `start <= end <= due`.
pub fn validate_period(request: &PeriodRequest) -> AdminResult<()> {
    let mut errors = ValidationErrors::new();
    require(&mut errors, "name", &request.name, "Name");

    let mut parse = |field: &str, raw: &str, label: &str| {
        if raw.trim().is_empty() {
            errors.add(field, format!("{} is required", label));
            None
        } else {
            let parsed = parse_timestamp(raw);
            if parsed.is_none() {
                errors.add(field, format!("{} is not a valid date", label));
            }
            parsed
        }
    };

    let start = parse("start_date", &request.start_date, "Start date");
    let end = parse("end_date", &request.end_date, "End date");
    let due = parse("due_date", &request.due_date, "Due date");

    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            errors.add("end_date", "End date must not be before the start date");
        }
    }
    if let (Some(end), Some(due)) = (end, due) {
        if due < end {
            errors.add("due_date", "Due date must not be before the end date");
        }
    }

    errors.into_result()
}

/// Validates a password against the minimum length.
fn check_password(errors: &mut ValidationErrors, field: &str, password: &str) {
    if password.is_empty() {
        errors.add(field, "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.add(
            field,
            format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ),
        );
    }
}

/// Validates a new-user form.
pub fn validate_new_user(request: &CreateUserRequest) -> AdminResult<()> {
    let mut errors = ValidationErrors::new();
    require(&mut errors, "name", &request.name, "Name");
    if !looks_like_email(&request.email) {
        errors.add("email", "Email is not valid");
    }
    check_password(&mut errors, "password", &request.password);
    errors.into_result()
}

/// Validates a user update form; only the fields being changed are checked.
pub fn validate_user_update(request: &UpdateUserRequest) -> AdminResult<()> {
    let mut errors = ValidationErrors::new();
    if let Some(name) = &request.name {
        require(&mut errors, "name", name, "Name");
    }
    if let Some(email) = &request.email {
        if !looks_like_email(email) {
            errors.add("email", "Email is not valid");
        }
    }
    errors.into_result()
}

/// Validates a reset-password form.
pub fn validate_new_password(password: &str) -> AdminResult<()> {
    let mut errors = ValidationErrors::new();
    check_password(&mut errors, "new_password", password);
    errors.into_result()
}

/// Records per-category balance and duplicate errors for weighted items.
///
/// Errors are keyed `criteria` (empty or duplicate) and
/// `criteria.<category>` (category not summing to 100).
pub fn check_weighted_items(errors: &mut ValidationErrors, items: &[WeightedItem]) {
    if items.is_empty() {
        errors.add("criteria", "At least one criterion is required");
        return;
    }

    let mut seen = HashSet::new();
    if items.iter().any(|item| !seen.insert(item.id)) {
        errors.add("criteria", "A criterion can only appear once");
    }

    for (index, item) in items.iter().enumerate() {
        if item.weight < Decimal::ZERO || item.weight > Decimal::ONE_HUNDRED {
            errors.add(
                format!("criteria[{}].weight", index),
                "Weight must be between 0 and 100",
            );
        }
    }

    for (category, total) in unbalanced_categories(items) {
        errors.add(
            format!("criteria.{}", category),
            format!(
                "Weights in {} must add up to 100.00% (currently {})",
                category,
                format_weight(total)
            ),
        );
    }
}

/// Validates a template form.
pub fn validate_template(request: &TemplateRequest) -> AdminResult<()> {
    let mut errors = ValidationErrors::new();
    require(&mut errors, "name", &request.name, "Name");
    check_weighted_items(&mut errors, &request.weighted_items());
    errors.into_result()
}

/// Records an error when a selected identifier is missing (zero or negative).
pub(crate) fn check_selected(errors: &mut ValidationErrors, field: &str, id: i64, label: &str) {
    if id <= 0 {
        errors.add(field, format!("{} is required", label));
    }
}

/// Records employee selection errors shared by every evaluation creation flow.
///
/// `allow_many` is false for the single-employee flows.
pub(crate) fn check_employees(
    errors: &mut ValidationErrors,
    employee_ids: &[i64],
    evaluator_id: Option<i64>,
    allow_many: bool,
) {
    match employee_ids.len() {
        0 => errors.add("employee_ids", "Select at least one employee"),
        1 => {}
        _ if !allow_many => errors.add("employee_ids", "Select exactly one employee"),
        _ => {}
    }

    let mut seen = HashSet::new();
    if employee_ids.iter().any(|id| !seen.insert(*id)) {
        errors.add("employee_ids", "An employee can only be selected once");
    }

    if let Some(evaluator) = evaluator_id {
        if employee_ids.contains(&evaluator) {
            errors.add("evaluator_id", "An employee cannot evaluate themselves");
        }
    }
}

/// Validates a manual evaluation: selections, no self-evaluation and
/// criteria balanced to 100 in every category.
///
/// # Example
///
/// ```
/// use evaluation_admin::forms::validate_evaluation_request;
/// use evaluation_admin::models::{Category, CreateEvaluationRequest, TemplateCriterion};
/// use rust_decimal::Decimal;
///
/// let mut request = CreateEvaluationRequest {
///     employee_id: 5,
///     evaluator_id: 2,
///     period_id: 1,
///     criteria: vec![TemplateCriterion {
///         criterion_id: 7,
///         category: Category::Skills,
///         weight: Decimal::ONE_HUNDRED,
///     }],
/// };
/// assert!(validate_evaluation_request(&request).is_ok());
///
/// request.criteria[0].weight = Decimal::TEN;
/// assert!(validate_evaluation_request(&request).is_err());
/// ```
pub fn validate_evaluation_request(request: &CreateEvaluationRequest) -> AdminResult<()> {
    let mut errors = ValidationErrors::new();
    check_selected(&mut errors, "period_id", request.period_id, "Period");
    check_selected(&mut errors, "evaluator_id", request.evaluator_id, "Evaluator");
    check_employees(&mut errors, &[request.employee_id], Some(request.evaluator_id), false);
    let items: Vec<WeightedItem> = request
        .criteria
        .iter()
        .map(|criterion| criterion.to_weighted_item())
        .collect();
    check_weighted_items(&mut errors, &items);
    errors.into_result()
}

/// Validates a single-employee evaluation created from a template.
pub fn validate_from_template_request(request: &FromTemplateRequest) -> AdminResult<()> {
    let mut errors = ValidationErrors::new();
    check_selected(&mut errors, "period_id", request.period_id, "Period");
    check_selected(&mut errors, "evaluator_id", request.evaluator_id, "Evaluator");
    check_selected(&mut errors, "template_id", request.template_id, "Template");
    check_employees(&mut errors, &[request.employee_id], Some(request.evaluator_id), false);
    errors.into_result()
}

/// Validates a bulk creation: at least one employee, none repeated, and the
/// evaluator not among them.
pub fn validate_bulk_request(request: &BulkEvaluationRequest) -> AdminResult<()> {
    let mut errors = ValidationErrors::new();
    check_selected(&mut errors, "period_id", request.period_id, "Period");
    check_selected(&mut errors, "evaluator_id", request.evaluator_id, "Evaluator");
    check_selected(&mut errors, "template_id", request.template_id, "Template");
    check_employees(&mut errors, &request.employee_ids, Some(request.evaluator_id), true);
    errors.into_result()
}

/// Validates a set of scores before saving.
pub fn validate_scores(scores: &[Score]) -> AdminResult<()> {
    let mut errors = ValidationErrors::new();

    let mut seen = HashSet::new();
    for (index, score) in scores.iter().enumerate() {
        if !seen.insert(score.criterion_id) {
            errors.add(
                format!("scores[{}].criterion_id", index),
                "A criterion can only be scored once",
            );
        }
        if score.score < MIN_SCORE || score.score > MAX_SCORE {
            errors.add(
                format!("scores[{}].score", index),
                "Score must be between 0 and 100",
            );
        }
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use crate::calculation::normalize_category;
    use crate::error::AdminError;
    use crate::models::{Category, Role, TemplateCriterion};

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn errors_of(result: AdminResult<()>) -> ValidationErrors {
        match result {
            Err(AdminError::Validation(errors)) => errors,
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    fn criterion(weight: &str) -> CriterionRequest {
        CriterionRequest {
            name: "Quality".to_string(),
            description: None,
            category: Category::Productivity,
            weight: dec(weight),
        }
    }

    fn period(start: &str, end: &str, due: &str) -> PeriodRequest {
        PeriodRequest {
            name: "Q1".to_string(),
            description: None,
            start_date: start.to_string(),
            end_date: end.to_string(),
            due_date: due.to_string(),
        }
    }

    #[test]
    fn test_criterion_weight_range_is_inclusive() {
        assert!(validate_criterion(&criterion("0.01")).is_ok());
        assert!(validate_criterion(&criterion("1.0")).is_ok());
        assert!(validate_criterion(&criterion("0.30")).is_ok());
    }

    #[test]
    fn test_criterion_weight_out_of_range() {
        for weight in ["0", "0.009", "1.01", "30"] {
            let errors = errors_of(validate_criterion(&criterion(weight)));
            assert!(errors.get("weight").is_some(), "weight {} accepted", weight);
        }
    }

    #[test]
    fn test_criterion_requires_name() {
        let mut request = criterion("0.5");
        request.name = "  ".to_string();
        assert_eq!(
            errors_of(validate_criterion(&request)).get("name"),
            Some("Name is required")
        );
    }

    #[test]
    fn test_period_valid_dates() {
        assert!(validate_period(&period("2025-01-01", "2025-01-31", "2025-02-07")).is_ok());
        assert!(validate_period(&period("2025-01-01", "2025-01-31", "2025-01-31")).is_ok());
    }

    #[test]
    fn test_period_date_order() {
        let errors = errors_of(validate_period(&period(
            "2025-02-01",
            "2025-01-31",
            "2025-01-15",
        )));
        assert!(errors.get("end_date").is_some());
        assert!(errors.get("due_date").is_some());
    }

    #[test]
    fn test_period_missing_and_bad_dates() {
        let errors = errors_of(validate_period(&period("", "31/01/2025", "2025-02-07")));
        assert_eq!(errors.get("start_date"), Some("Start date is required"));
        assert_eq!(errors.get("end_date"), Some("End date is not a valid date"));
        assert!(errors.get("due_date").is_none());
    }

    #[test]
    fn test_new_user_validation() {
        let mut request = CreateUserRequest {
            name: "Luis".to_string(),
            email: "luis@example.com".to_string(),
            password: "correct-horse".to_string(),
            role: Role::Employee,
        };
        assert!(validate_new_user(&request).is_ok());

        request.email = "luis@localhost".to_string();
        request.password = "short".to_string();
        let errors = errors_of(validate_new_user(&request));
        assert!(errors.get("email").is_some());
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_user_update_checks_only_present_fields() {
        assert!(validate_user_update(&UpdateUserRequest::default()).is_ok());
        let request = UpdateUserRequest {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(errors_of(validate_user_update(&request)).get("email").is_some());
    }

    #[test]
    fn test_new_password() {
        assert!(validate_new_password("longenough").is_ok());
        assert_eq!(
            errors_of(validate_new_password("")).get("new_password"),
            Some("Password is required")
        );
    }

    #[test]
    fn test_template_requires_balanced_categories() {
        let request = TemplateRequest {
            name: "Default".to_string(),
            description: None,
            criteria: vec![
                TemplateCriterion {
                    criterion_id: 1,
                    category: Category::Skills,
                    weight: dec("60"),
                },
                TemplateCriterion {
                    criterion_id: 2,
                    category: Category::Skills,
                    weight: dec("30"),
                },
                TemplateCriterion {
                    criterion_id: 3,
                    category: Category::Conduct,
                    weight: dec("100"),
                },
            ],
        };
        let errors = errors_of(validate_template(&request));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("criteria.skills"),
            Some("Weights in skills must add up to 100.00% (currently 90.00%)")
        );
    }

    #[test]
    fn test_template_requires_criteria() {
        let request = TemplateRequest {
            name: "Empty".to_string(),
            ..Default::default()
        };
        assert_eq!(
            errors_of(validate_template(&request)).get("criteria"),
            Some("At least one criterion is required")
        );
    }

    #[test]
    fn test_weighted_items_reject_duplicates() {
        let mut errors = ValidationErrors::new();
        let items = vec![
            WeightedItem::new(1, dec("50"), "skills"),
            WeightedItem::new(1, dec("50"), "skills"),
        ];
        check_weighted_items(&mut errors, &items);
        assert_eq!(errors.get("criteria"), Some("A criterion can only appear once"));
    }

    #[test]
    fn test_negative_residue_from_normalizer_is_rejected() {
        let mut items = vec![WeightedItem::new(0, dec("99.95"), "skills").locked()];
        items.extend((1..=10).map(|id| WeightedItem::new(id, Decimal::ZERO, "skills")));
        let normalized = normalize_category(&items);

        let mut errors = ValidationErrors::new();
        check_weighted_items(&mut errors, &normalized);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("criteria[10].weight"), Some("Weight must be between 0 and 100"));
    }

    #[test]
    fn test_scores_range_and_duplicates() {
        let scores = vec![
            Score {
                criterion_id: 1,
                score: dec("100"),
                comment: None,
            },
            Score {
                criterion_id: 1,
                score: dec("101"),
                comment: None,
            },
        ];
        let errors = errors_of(validate_scores(&scores));
        assert!(errors.get("scores[1].criterion_id").is_some());
        assert!(errors.get("scores[1].score").is_some());
        assert!(errors.get("scores[0].score").is_none());
    }

    fn manual_request(skills: &[&str]) -> CreateEvaluationRequest {
        CreateEvaluationRequest {
            employee_id: 5,
            evaluator_id: 2,
            period_id: 1,
            criteria: skills
                .iter()
                .enumerate()
                .map(|(i, weight)| TemplateCriterion {
                    criterion_id: i as i64 + 1,
                    category: Category::Skills,
                    weight: dec(weight),
                })
                .collect(),
        }
    }

    #[test]
    fn test_evaluation_request_balanced_is_ok() {
        assert!(validate_evaluation_request(&manual_request(&["60", "40"])).is_ok());
    }

    #[test]
    fn test_evaluation_request_unbalanced_and_self_evaluation() {
        let mut request = manual_request(&["10"]);
        request.evaluator_id = request.employee_id;
        let errors = errors_of(validate_evaluation_request(&request));
        assert_eq!(
            errors.get("criteria.skills"),
            Some("Weights in skills must add up to 100.00% (currently 10.00%)")
        );
        assert_eq!(errors.get("evaluator_id"), Some("An employee cannot evaluate themselves"));
    }

    #[test]
    fn test_evaluation_request_requires_criteria_and_period() {
        let mut request = manual_request(&[]);
        request.period_id = 0;
        let errors = errors_of(validate_evaluation_request(&request));
        assert_eq!(errors.get("period_id"), Some("Period is required"));
        assert_eq!(errors.get("criteria"), Some("At least one criterion is required"));
    }

    #[test]
    fn test_from_template_request() {
        let mut request = FromTemplateRequest {
            employee_id: 5,
            evaluator_id: 2,
            period_id: 1,
            template_id: 9,
        };
        assert!(validate_from_template_request(&request).is_ok());

        request.template_id = 0;
        request.evaluator_id = 5;
        let errors = errors_of(validate_from_template_request(&request));
        assert_eq!(errors.get("template_id"), Some("Template is required"));
        assert!(errors.get("evaluator_id").is_some());
    }

    #[test]
    fn test_bulk_request_employees() {
        let mut request = BulkEvaluationRequest {
            employee_ids: vec![5, 6, 7],
            evaluator_id: 2,
            period_id: 1,
            template_id: 9,
        };
        assert!(validate_bulk_request(&request).is_ok());

        request.employee_ids = vec![5, 2, 5];
        let errors = errors_of(validate_bulk_request(&request));
        assert_eq!(errors.get("employee_ids"), Some("An employee can only be selected once"));
        assert!(errors.get("evaluator_id").is_some());

        request.employee_ids.clear();
        assert_eq!(
            errors_of(validate_bulk_request(&request)).get("employee_ids"),
            Some("Select at least one employee")
        );
    }
}
