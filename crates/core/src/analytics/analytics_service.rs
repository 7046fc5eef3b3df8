use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::debug;
use std::sync::Arc;

use super::analytics_model::{
    AnalyticsRange, DashboardSummary, GoalProgress, RangeSummary, WindowSummary,
};
use super::analytics_traits::AnalyticsServiceTrait;
use super::binning::range_summary;
use super::goal_progress::goal_progress;
use super::recent::recent_deals;
use super::rolling_window::{day_strip, window_summary};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, RECENT_DEALS_LIMIT, ROLLING_WINDOW_DAYS};
use crate::deals::DealServiceTrait;
use crate::profile::ProfileServiceTrait;

/// Computes dashboard and analytics views from the current store contents.
/// Every call reads a fresh snapshot of the stores.
pub struct AnalyticsService {
    deal_service: Arc<dyn DealServiceTrait>,
    profile_service: Arc<dyn ProfileServiceTrait>,
    calendar_tz: Tz,
}

impl AnalyticsService {
    pub fn new(
        deal_service: Arc<dyn DealServiceTrait>,
        profile_service: Arc<dyn ProfileServiceTrait>,
        calendar_tz: Tz,
    ) -> Self {
        Self {
            deal_service,
            profile_service,
            calendar_tz,
        }
    }

    pub fn calendar_tz(&self) -> Tz {
        self.calendar_tz
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn get_dashboard(&self, now: DateTime<Utc>) -> DashboardSummary {
        let deals = self.deal_service.get_deals();
        let profile = self.profile_service.get_profile();
        debug!(
            "Building dashboard at {} over {} deals in {}",
            now,
            deals.len(),
            self.calendar_tz
        );

        let goal = goal_progress(&deals, now, profile.monthly_goal, self.calendar_tz);
        let weekly_trend = window_summary(&deals, now, ROLLING_WINDOW_DAYS, self.calendar_tz);

        DashboardSummary {
            goal: GoalProgress {
                month_to_date_total: goal.month_to_date_total.round_dp(DISPLAY_DECIMAL_PRECISION),
                monthly_goal: goal.monthly_goal.round_dp(DISPLAY_DECIMAL_PRECISION),
                ..goal
            },
            weekly_trend: WindowSummary {
                total: weekly_trend.total.round_dp(DISPLAY_DECIMAL_PRECISION),
                count: weekly_trend.count,
            },
            day_strip: day_strip(&deals, now, ROLLING_WINDOW_DAYS, self.calendar_tz),
            recent_deals: recent_deals(&deals, RECENT_DEALS_LIMIT),
        }
    }

    fn get_range_summary(&self, range: AnalyticsRange, now: DateTime<Utc>) -> RangeSummary {
        let deals = self.deal_service.get_deals();
        debug!("Building {} summary at {} over {} deals", range, now, deals.len());

        let mut summary = range_summary(range, &deals, now, self.calendar_tz);
        for bin in &mut summary.bins {
            bin.commission_total = bin.commission_total.round_dp(DISPLAY_DECIMAL_PRECISION);
        }
        summary.total_commission = summary.total_commission.round_dp(DISPLAY_DECIMAL_PRECISION);
        summary
    }
}
