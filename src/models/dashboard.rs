//! Dashboard summary models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EvaluationStatus;

/// Counters returned by `/dashboard/stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Number of users.
    #[serde(default)]
    pub total_users: u32,
    /// Number of periods.
    #[serde(default)]
    pub total_periods: u32,
    /// Number of evaluations across all periods.
    #[serde(default)]
    pub total_evaluations: u32,
    /// Evaluations not yet completed.
    #[serde(default)]
    pub pending_evaluations: u32,
    /// Evaluations completed.
    #[serde(default)]
    pub completed_evaluations: u32,
    /// Average total score of completed evaluations.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub average_score: Option<Decimal>,
}

impl DashboardStats {
    /// Completed evaluations as a fraction of all evaluations, `0` when empty.
    pub fn completion_rate(&self) -> Decimal {
        if self.total_evaluations == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.completed_evaluations) / Decimal::from(self.total_evaluations)
    }
}

/// A row of `/dashboard/recent-evaluations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEvaluation {
    /// Evaluation identifier.
    pub id: i64,
    /// Evaluated employee's name.
    pub employee_name: String,
    /// Period name.
    pub period_name: String,
    /// Workflow status.
    pub status: EvaluationStatus,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_rate() {
        let stats = DashboardStats {
            total_evaluations: 8,
            completed_evaluations: 2,
            ..Default::default()
        };
        assert_eq!(stats.completion_rate(), Decimal::new(25, 2));
    }

    #[test]
    fn test_completion_rate_with_no_evaluations() {
        assert_eq!(DashboardStats::default().completion_rate(), Decimal::ZERO);
    }
}
