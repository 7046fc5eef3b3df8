//! Plain-text rendering of the view models.

use chrono_tz::Tz;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use moneymark_core::analytics::{DashboardSummary, RangeSummary};
use moneymark_core::constants::DISPLAY_DECIMAL_PRECISION;
use moneymark_core::deals::Deal;
use moneymark_core::profile::UserProfile;

const BAR_WIDTH: usize = 30;

/// `$41,300.00` style amount.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Horizontal bar of `value / max` filled to `width` cells.
pub fn bar(value: Decimal, max: Decimal, width: usize) -> String {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return String::new();
    }
    let cells = (value / max * Decimal::from(width as u64))
        .round_dp_with_strategy(0, RoundingStrategy::AwayFromZero)
        .to_usize()
        .unwrap_or(0)
        .clamp(1, width);
    "█".repeat(cells)
}

pub fn dashboard(summary: &DashboardSummary, tz: Tz) -> String {
    let goal = &summary.goal;
    let mut out = String::new();

    out.push_str(&format!("Monthly goal    {}\n", format_currency(goal.monthly_goal)));
    out.push_str(&format!(
        "Month to date   {}  ({}%)\n",
        format_currency(goal.month_to_date_total),
        goal.percent
    ));
    let filled = (goal.progress * BAR_WIDTH as f64).round() as usize;
    out.push_str(&format!(
        "[{}{}]\n\n",
        "#".repeat(filled.min(BAR_WIDTH)),
        "-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
    ));

    out.push_str(&format!(
        "Last 7 days     {} across {} {}\n",
        format_currency(summary.weekly_trend.total),
        summary.weekly_trend.count,
        if summary.weekly_trend.count == 1 { "deal" } else { "deals" }
    ));
    let days: Vec<String> = summary
        .day_strip
        .iter()
        .map(|day| format!("{:>3}", day.day_of_month))
        .collect();
    let marks: Vec<String> = summary
        .day_strip
        .iter()
        .map(|day| format!("{:>3}", if day.has_deal { "●" } else { "·" }))
        .collect();
    out.push_str(&format!("{}\n{}\n\n", days.join(""), marks.join("")));

    out.push_str("Recent deals\n");
    if summary.recent_deals.is_empty() {
        out.push_str("  No deals yet\n");
    } else {
        out.push_str(&deal_table(&summary.recent_deals, tz));
    }
    out
}

pub fn range_summary(summary: &RangeSummary) -> String {
    let mut out = format!(
        "{}: {} across {} {}\n",
        summary.range.display_name(),
        format_currency(summary.total_commission),
        summary.total_units,
        if summary.total_units == 1 { "unit" } else { "units" }
    );
    if summary.bins.is_empty() {
        out.push_str("  No calendar data for this range\n");
        return out;
    }

    let max = summary
        .bins
        .iter()
        .map(|bin| bin.commission_total)
        .max()
        .unwrap_or(Decimal::ZERO);
    for bin in &summary.bins {
        out.push_str(&format!(
            "  {:<4} {:>12} {:>3}  {}\n",
            bin.label,
            format_currency(bin.commission_total),
            bin.units,
            bar(bin.commission_total, max, BAR_WIDTH)
        ));
    }
    out
}

pub fn deal_table(deals: &[Deal], tz: Tz) -> String {
    deals
        .iter()
        .map(|deal| {
            let number = deal
                .deal_number
                .as_deref()
                .map(|n| format!(" #{}", n))
                .unwrap_or_default();
            format!(
                "  {}  {:<20} {:<24} {:>12}{}\n",
                deal.date.with_timezone(&tz).format("%Y-%m-%d"),
                deal.customer_name,
                deal.vehicle,
                format_currency(deal.commission),
                number
            )
        })
        .collect()
}

pub fn profile(profile: &UserProfile) -> String {
    let or_dash = |value: &str| {
        if value.is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        }
    };
    format!(
        "Name            {}\nBrand           {}\nAvg cars/month  {}\nMonthly goal    {}\n",
        or_dash(&profile.name),
        or_dash(&profile.brand),
        profile.avg_monthly_cars,
        format_currency(profile.monthly_goal)
    )
}
