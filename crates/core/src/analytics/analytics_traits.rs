use chrono::{DateTime, Utc};

use super::analytics_model::{AnalyticsRange, DashboardSummary, RangeSummary};

/// Read-only views over the deal store and the profile.
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Goal progress, the trailing week, the day strip and the latest deals.
    fn get_dashboard(&self, now: DateTime<Utc>) -> DashboardSummary;

    /// Histogram for one range around `now`.
    fn get_range_summary(&self, range: AnalyticsRange, now: DateTime<Utc>) -> RangeSummary;
}
