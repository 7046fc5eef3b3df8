//! Month-to-date totals and progress toward the monthly goal.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::warn;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::analytics_model::GoalProgress;
use super::rolling_window::total_commission;
use crate::deals::Deal;
use crate::utils::time_utils::start_of_month;

/// Sum of commissions dated on or after the start of `now`'s calendar month.
pub fn month_to_date_total(deals: &[Deal], now: DateTime<Utc>, tz: Tz) -> Decimal {
    let Some(month_start) = start_of_month(now, tz) else {
        warn!("Could not resolve start of month for {} in {}", now, tz);
        return Decimal::ZERO;
    };
    total_commission(deals.iter().filter(|deal| deal.date >= month_start))
}

/// `total / goal` clamped to `[0, 1]`. A goal of zero or less means there
/// is no goal and yields zero.
pub fn progress_ratio(total: Decimal, goal: Decimal) -> Decimal {
    if goal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match total.checked_div(goal) {
        Some(ratio) => ratio.clamp(Decimal::ZERO, Decimal::ONE),
        // Only overflows when the ratio is astronomically large.
        None if total > Decimal::ZERO => Decimal::ONE,
        None => Decimal::ZERO,
    }
}

/// Whole-number percentage of a ratio in `[0, 1]`, rounded half-up.
pub fn progress_percent(ratio: Decimal) -> u32 {
    (ratio.clamp(Decimal::ZERO, Decimal::ONE) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

pub fn goal_progress(
    deals: &[Deal],
    now: DateTime<Utc>,
    monthly_goal: Decimal,
    tz: Tz,
) -> GoalProgress {
    let month_to_date_total = month_to_date_total(deals, now, tz);
    let ratio = progress_ratio(month_to_date_total, monthly_goal);
    GoalProgress {
        month_to_date_total,
        monthly_goal,
        progress: ratio.to_f64().unwrap_or(0.0),
        percent: progress_percent(ratio),
    }
}
