//! Trailing-window totals and per-day activity.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use log::warn;
use rust_decimal::Decimal;

use super::analytics_model::{DayActivity, WindowSummary};
use crate::deals::Deal;
use crate::utils::decimal_utils::{saturating_add, saturating_sum};
use crate::utils::time_utils::{
    add_days, calendar_date_from_utc, get_days_between, is_same_day, start_of_date,
};

/// Start of a `window_days`-day window ending today: the start of the
/// calendar day `window_days - 1` days before `now`.
///
/// `None` for an empty window or a date outside the calendar range.
pub fn window_start(now: DateTime<Utc>, window_days: u32, tz: Tz) -> Option<DateTime<Utc>> {
    if window_days == 0 {
        return None;
    }
    let today = calendar_date_from_utc(now, tz);
    let first_day = add_days(today, -(i64::from(window_days) - 1))?;
    start_of_date(first_day, tz)
}

/// Total and count of deals dated within `[window_start, now]`.
pub fn window_summary(
    deals: &[Deal],
    now: DateTime<Utc>,
    window_days: u32,
    tz: Tz,
) -> WindowSummary {
    if window_days == 0 {
        return WindowSummary::default();
    }
    let Some(start) = window_start(now, window_days, tz) else {
        warn!(
            "Could not resolve start of {}-day window ending {} in {}",
            window_days, now, tz
        );
        return WindowSummary::default();
    };

    deals
        .iter()
        .filter(|deal| deal.date >= start && deal.date <= now)
        .fold(WindowSummary::default(), |mut summary, deal| {
            summary.total = saturating_add(summary.total, deal.commission);
            summary.count += 1;
            summary
        })
}

/// True if any deal falls on the same calendar day as `day`.
pub fn has_deal_on_day(deals: &[Deal], day: DateTime<Utc>, tz: Tz) -> bool {
    deals.iter().any(|deal| is_same_day(deal.date, day, tz))
}

pub fn has_deal_on_date(deals: &[Deal], date: NaiveDate, tz: Tz) -> bool {
    deals
        .iter()
        .any(|deal| calendar_date_from_utc(deal.date, tz) == date)
}

/// The last `days` calendar days, oldest first, flagged with activity.
pub fn day_strip(deals: &[Deal], now: DateTime<Utc>, days: u32, tz: Tz) -> Vec<DayActivity> {
    if days == 0 {
        return Vec::new();
    }
    let today = calendar_date_from_utc(now, tz);
    let Some(first) = add_days(today, -(i64::from(days) - 1)) else {
        return Vec::new();
    };

    get_days_between(first, today)
        .into_iter()
        .map(|date| DayActivity {
            date,
            day_of_month: date.day(),
            has_deal: has_deal_on_date(deals, date, tz),
        })
        .collect()
}

/// Sum of commissions, for callers that already filtered. Saturates at
/// `Decimal::MAX`.
pub fn total_commission<'a>(deals: impl IntoIterator<Item = &'a Deal>) -> Decimal {
    saturating_sum(deals.into_iter().map(|deal| deal.commission))
}
