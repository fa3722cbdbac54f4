//! Evaluation period models.
//!
//! This module contains the [`EvaluationPeriod`] projection returned by the
//! backend and the payloads used to create or update one. Dates are kept as the
//! raw strings the backend sent; status is derived from them on demand and is
//! never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculation::{GapPolicy, PeriodStatus, resolve_period_status_str};

/// A bounded time window in which evaluations must be completed.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use evaluation_admin::calculation::{GapPolicy, PeriodStatus};
/// use evaluation_admin::models::EvaluationPeriod;
///
/// let period = EvaluationPeriod {
///     id: 1,
///     name: "Q1 2025".to_string(),
///     description: None,
///     start_date: "2025-01-01".to_string(),
///     end_date: "2025-01-31".to_string(),
///     due_date: "2025-02-07".to_string(),
///     created_at: None,
///     updated_at: None,
/// };
///
/// let now = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
/// assert_eq!(period.status_at(now, GapPolicy::Draft), Some(PeriodStatus::Active));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationPeriod {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Nominal start of the period.
    pub start_date: String,
    /// Nominal end of the period.
    pub end_date: String,
    /// Hard deadline for completing evaluations.
    pub due_date: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl EvaluationPeriod {
    /// Derives the lifecycle status at `now`.
    ///
    /// Returns `None` when any of the three dates cannot be parsed.
    pub fn status_at(&self, now: DateTime<Utc>, policy: GapPolicy) -> Option<PeriodStatus> {
        resolve_period_status_str(now, &self.start_date, &self.end_date, &self.due_date, policy)
    }

    /// Derives the lifecycle status against the current wall clock.
    pub fn current_status(&self, policy: GapPolicy) -> Option<PeriodStatus> {
        self.status_at(Utc::now(), policy)
    }
}

/// Payload for `POST /periods` and `PUT /periods/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Start date (`YYYY-MM-DD` or RFC 3339).
    pub start_date: String,
    /// End date.
    pub end_date: String,
    /// Due date.
    pub due_date: String,
}
