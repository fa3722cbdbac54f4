//! `/dashboard` endpoints.

use crate::error::AdminResult;
use crate::models::{DashboardStats, RecentEvaluation};

use super::client::ApiClient;

impl ApiClient {
    /// `GET /dashboard/stats`.
    pub async fn dashboard_stats(&self) -> AdminResult<DashboardStats> {
        self.get("/dashboard/stats").await
    }

    /// `GET /dashboard/recent-evaluations?limit=n`.
    pub async fn recent_evaluations(&self, limit: u32) -> AdminResult<Vec<RecentEvaluation>> {
        self.get_with_query(
            "/dashboard/recent-evaluations",
            &[("limit", limit.to_string())],
        )
        .await
    }
}
