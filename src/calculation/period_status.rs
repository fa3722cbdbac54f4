//! Period lifecycle status derivation.
//!
//! A period's status is never stored. It is derived from `now` and the
//! period's start, end and due timestamps every time it is displayed.
//!
//! The window after the nominal end but before the due date has no agreed
//! label: some screens show it as a draft, others as unavailable. Callers pick
//! the behaviour explicitly through [`GapPolicy`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::formatting::{DATE_PLACEHOLDER, parse_timestamp};

/// Lifecycle status of an evaluation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    /// Not started yet.
    Draft,
    /// Between start and end, inclusive.
    Active,
    /// Past the due date.
    Completed,
    /// Past the end but not yet due, under [`GapPolicy::Unavailable`].
    Unavailable,
}

impl PeriodStatus {
    /// The label shown in the console.
    pub fn label(self) -> &'static str {
        match self {
            PeriodStatus::Draft => "Borrador",
            PeriodStatus::Active => "Activo",
            PeriodStatus::Completed => "Completado",
            PeriodStatus::Unavailable => "No disponible",
        }
    }

    /// Whether evaluations can currently be scored in the period.
    pub fn accepts_scores(self) -> bool {
        self == PeriodStatus::Active
    }
}

impl fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How to classify `end < now <= due`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    /// Report the gap as [`PeriodStatus::Draft`].
    Draft,
    /// Report the gap as [`PeriodStatus::Unavailable`].
    Unavailable,
}

impl FromStr for GapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(GapPolicy::Draft),
            "unavailable" => Ok(GapPolicy::Unavailable),
            other => Err(format!("unknown gap policy: {}", other)),
        }
    }
}

/// Classifies a period at `now`.
///
/// - `now < start` is [`PeriodStatus::Draft`]
/// - `start <= now <= end` is [`PeriodStatus::Active`]
/// - `now > due` is [`PeriodStatus::Completed`]
/// - anything else (`end < now <= due`) follows `policy`
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use evaluation_admin::calculation::{GapPolicy, PeriodStatus, resolve_period_status};
///
/// let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap();
/// let due = Utc.with_ymd_and_hms(2025, 2, 7, 0, 0, 0).unwrap();
/// let now = Utc.with_ymd_and_hms(2025, 2, 3, 0, 0, 0).unwrap();
///
/// assert_eq!(
///     resolve_period_status(now, start, end, due, GapPolicy::Unavailable),
///     PeriodStatus::Unavailable
/// );
/// assert_eq!(
///     resolve_period_status(now, start, end, due, GapPolicy::Draft),
///     PeriodStatus::Draft
/// );
/// ```
pub fn resolve_period_status(
    now: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    due: DateTime<Utc>,
    policy: GapPolicy,
) -> PeriodStatus {
    if now < start {
        PeriodStatus::Draft
    } else if now <= end {
        PeriodStatus::Active
    } else if now > due {
        PeriodStatus::Completed
    } else {
        match policy {
            GapPolicy::Draft => PeriodStatus::Draft,
            GapPolicy::Unavailable => PeriodStatus::Unavailable,
        }
    }
}

/// Like [`resolve_period_status`], over raw backend date strings.
///
/// Returns `None` if any date fails to parse.
pub fn resolve_period_status_str(
    now: DateTime<Utc>,
    start: &str,
    end: &str,
    due: &str,
    policy: GapPolicy,
) -> Option<PeriodStatus> {
    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;
    let due = parse_timestamp(due)?;
    Some(resolve_period_status(now, start, end, due, policy))
}

/// The status label for raw dates, or the placeholder if a date is unusable.
pub fn period_status_label(
    now: DateTime<Utc>,
    start: &str,
    end: &str,
    due: &str,
    policy: GapPolicy,
) -> String {
    resolve_period_status_str(now, start, end, due, policy)
        .map(|status| status.label().to_string())
        .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
}
