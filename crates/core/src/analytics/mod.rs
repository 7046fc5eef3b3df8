//! Aggregations over the deal collection.
//!
//! The free functions are pure: they take a deal slice, the current instant
//! and a calendar zone, and never touch storage. [`AnalyticsService`] wires
//! them to the live stores.

mod analytics_model;
mod analytics_service;
mod analytics_traits;
mod binning;
mod goal_progress;
mod recent;
mod rolling_window;


pub use analytics_model::{
    AnalyticsRange, Bin, DashboardSummary, DayActivity, GoalProgress, RangeSummary,
    WindowSummary,
};
pub use analytics_service::AnalyticsService;
pub use analytics_traits::AnalyticsServiceTrait;
pub use binning::{bins_for_range, range_summary};
pub use goal_progress::{goal_progress, month_to_date_total, progress_percent, progress_ratio};
pub use recent::recent_deals;
pub use rolling_window::{
    day_strip, has_deal_on_date, has_deal_on_day, total_commission, window_start, window_summary,
};
