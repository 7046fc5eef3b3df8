use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::deals::Deal;
use crate::errors::{Error, ValidationError};

/// Sum and count of the deals inside a trailing window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSummary {
    pub total: Decimal,
    pub count: usize,
}

/// Month-to-date commission measured against the monthly goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub month_to_date_total: Decimal,
    pub monthly_goal: Decimal,
    /// Always within `[0, 1]`; zero when there is no positive goal
    pub progress: f64,
    /// `progress` as a whole percentage, rounded half-up
    pub percent: u32,
}

/// Analytics range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsRange {
    #[default]
    Week,
    Month,
    Quarter,
    Year,
}

impl AnalyticsRange {
    pub const ALL: [AnalyticsRange; 4] = [
        AnalyticsRange::Week,
        AnalyticsRange::Month,
        AnalyticsRange::Quarter,
        AnalyticsRange::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsRange::Week => "week",
            AnalyticsRange::Month => "month",
            AnalyticsRange::Quarter => "quarter",
            AnalyticsRange::Year => "year",
        }
    }

    /// Title-cased name for headings and pickers.
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalyticsRange::Week => "Week",
            AnalyticsRange::Month => "Month",
            AnalyticsRange::Quarter => "Quarter",
            AnalyticsRange::Year => "Year",
        }
    }
}

impl fmt::Display for AnalyticsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(AnalyticsRange::Week),
            "month" => Ok(AnalyticsRange::Month),
            "quarter" => Ok(AnalyticsRange::Quarter),
            "year" => Ok(AnalyticsRange::Year),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown range '{}', expected week, month, quarter or year",
                other
            ))
            .into()),
        }
    }
}

/// A labelled half-open interval `[start, end)` with the deals it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bin {
    pub label: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub commission_total: Decimal,
    pub units: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSummary {
    pub range: AnalyticsRange,
    pub bins: Vec<Bin>,
    pub total_commission: Decimal,
    pub total_units: usize,
}

/// One bubble of the dashboard's day strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayActivity {
    pub date: NaiveDate,
    pub day_of_month: u32,
    pub has_deal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub goal: GoalProgress,
    pub weekly_trend: WindowSummary,
    pub day_strip: Vec<DayActivity>,
    pub recent_deals: Vec<Deal>,
}
