//! Calendar-aligned histogram bins for the analytics ranges.
//!
//! | Range   | Bins | Each bin                                   | Label   |
//! |---------|------|--------------------------------------------|---------|
//! | week    | 7    | one calendar day, six days ago to today    | `14`    |
//! | month   | 4-6  | Monday-first week, clipped to the month    | `W2`    |
//! | quarter | 3    | one calendar month of the current quarter  | `Apr`   |
//! | year    | 12   | one calendar month of the current year     | `Apr`   |
//!
//! Every interval is half-open `[start, end)`, so a deal dated exactly on a
//! boundary lands in the later bin.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use log::{debug, warn};

use super::analytics_model::{AnalyticsRange, Bin, RangeSummary};
use super::rolling_window::total_commission;
use crate::deals::Deal;
use crate::utils::decimal_utils::saturating_sum;
use crate::utils::time_utils::{
    add_days, add_months, calendar_date_from_utc, first_of_month, first_of_quarter,
    first_of_year, next_week_start, start_of_date, week_of_month,
};

/// Bins for `range` around `now`. Empty if a boundary cannot be resolved
/// in `tz`.
pub fn bins_for_range(
    range: AnalyticsRange,
    deals: &[Deal],
    now: DateTime<Utc>,
    tz: Tz,
) -> Vec<Bin> {
    match compute_bins(range, deals, now, tz) {
        Some(bins) => {
            debug!("Computed {} {} bins over {} deals", bins.len(), range, deals.len());
            bins
        }
        None => {
            warn!(
                "Calendar boundaries for {} range at {} could not be resolved in {}",
                range, now, tz
            );
            Vec::new()
        }
    }
}

pub fn range_summary(
    range: AnalyticsRange,
    deals: &[Deal],
    now: DateTime<Utc>,
    tz: Tz,
) -> RangeSummary {
    let bins = bins_for_range(range, deals, now, tz);
    let total_commission = saturating_sum(bins.iter().map(|bin| bin.commission_total));
    let total_units = bins.iter().map(|bin| bin.units).sum();
    RangeSummary {
        range,
        bins,
        total_commission,
        total_units,
    }
}

fn compute_bins(
    range: AnalyticsRange,
    deals: &[Deal],
    now: DateTime<Utc>,
    tz: Tz,
) -> Option<Vec<Bin>> {
    let today = calendar_date_from_utc(now, tz);
    match range {
        AnalyticsRange::Week => day_bins(add_days(today, -6)?, 7, deals, tz),
        AnalyticsRange::Month => week_of_month_bins(first_of_month(today)?, deals, tz),
        AnalyticsRange::Quarter => month_bins(first_of_quarter(today)?, 3, deals, tz),
        AnalyticsRange::Year => month_bins(first_of_year(today)?, 12, deals, tz),
    }
}

fn day_bins(first: NaiveDate, count: i64, deals: &[Deal], tz: Tz) -> Option<Vec<Bin>> {
    (0..count)
        .map(|offset| {
            let day = add_days(first, offset)?;
            let next = add_days(day, 1)?;
            date_bin(day.day().to_string(), day, next, deals, tz)
        })
        .collect()
}

/// Weeks of the month starting at `first`; the first and last bins are
/// clipped to the month.
fn week_of_month_bins(first: NaiveDate, deals: &[Deal], tz: Tz) -> Option<Vec<Bin>> {
    let next_month = add_months(first, 1)?;
    let mut bins = Vec::new();
    let mut cursor = first;
    while cursor < next_month {
        let end = next_week_start(cursor)?.min(next_month);
        bins.push(date_bin(
            format!("W{}", week_of_month(cursor)),
            cursor,
            end,
            deals,
            tz,
        )?);
        cursor = end;
    }
    Some(bins)
}

fn month_bins(first: NaiveDate, count: u32, deals: &[Deal], tz: Tz) -> Option<Vec<Bin>> {
    (0..count)
        .map(|offset| {
            let month = add_months(first, offset)?;
            let next = add_months(first, offset + 1)?;
            date_bin(month.format("%b").to_string(), month, next, deals, tz)
        })
        .collect()
}

/// Bin spanning the start of `start` up to the start of `end` in `tz`.
fn date_bin(
    label: String,
    start: NaiveDate,
    end: NaiveDate,
    deals: &[Deal],
    tz: Tz,
) -> Option<Bin> {
    Some(make_bin(
        label,
        start_of_date(start, tz)?,
        start_of_date(end, tz)?,
        deals,
    ))
}

fn make_bin(label: String, start: DateTime<Utc>, end: DateTime<Utc>, deals: &[Deal]) -> Bin {
    let subset: Vec<&Deal> = deals
        .iter()
        .filter(|deal| deal.date >= start && deal.date < end)
        .collect();
    Bin {
        label,
        start,
        end,
        commission_total: total_commission(subset.iter().copied()),
        units: subset.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    const UTC: Tz = chrono_tz::UTC;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn deal(date: DateTime<Utc>, commission: Decimal) -> Deal {
        Deal {
            id: format!("deal-{}", date.timestamp()),
            customer_name: "Customer".to_string(),
            vehicle: "Pathfinder".to_string(),
            deal_number: None,
            commission,
            date,
        }
    }

    fn labels(bins: &[Bin]) -> Vec<String> {
        bins.iter().map(|bin| bin.label.clone()).collect()
    }

    fn assert_contiguous(bins: &[Bin]) {
        for pair in bins.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        for bin in bins {
            assert!(bin.start < bin.end);
        }
    }

    #[test]
    fn test_week_bins_are_seven_days_oldest_first() {
        let now = at(2025, 3, 2, 9);
        let deals = vec![
            deal(at(2025, 2, 24, 10), dec!(100)),
            deal(at(2025, 3, 2, 8), dec!(50)),
            deal(at(2025, 3, 2, 8), dec!(25)),
            deal(at(2025, 2, 23, 23), dec!(999)),
        ];

        let bins = bins_for_range(AnalyticsRange::Week, &deals, now, UTC);

        assert_eq!(labels(&bins), vec!["24", "25", "26", "27", "28", "1", "2"]);
        assert_eq!(bins[0].start, at(2025, 2, 24, 0));
        assert_eq!(bins[6].end, at(2025, 3, 3, 0));
        assert_eq!(bins[0].commission_total, dec!(100));
        assert_eq!(bins[6].commission_total, dec!(75));
        assert_eq!(bins[6].units, 2);
        assert_contiguous(&bins);
    }

    #[test]
    fn test_month_bins_are_clipped_weeks() {
        // 2024-09-01 is a Sunday and the 30th is a Monday.
        let bins = bins_for_range(AnalyticsRange::Month, &[], at(2024, 9, 15, 12), UTC);

        assert_eq!(labels(&bins), vec!["W1", "W2", "W3", "W4", "W5", "W6"]);
        assert_eq!(bins[0].start, at(2024, 9, 1, 0));
        assert_eq!(bins[0].end, at(2024, 9, 2, 0));
        assert_eq!(bins[5].start, at(2024, 9, 30, 0));
        assert_eq!(bins[5].end, at(2024, 10, 1, 0));
        assert_contiguous(&bins);
    }

    #[test]
    fn test_month_starting_midweek() {
        // 2025-01-01 is a Wednesday.
        let bins = bins_for_range(AnalyticsRange::Month, &[], at(2025, 1, 20, 12), UTC);

        assert_eq!(labels(&bins), vec!["W1", "W2", "W3", "W4", "W5"]);
        assert_eq!(bins[0].end, at(2025, 1, 6, 0));
        assert_eq!(bins[4].start, at(2025, 1, 27, 0));
        assert_eq!(bins[4].end, at(2025, 2, 1, 0));
    }

    #[test]
    fn test_boundary_deal_lands_in_later_bin() {
        let deals = vec![deal(at(2025, 1, 6, 0), dec!(400))];
        let bins = bins_for_range(AnalyticsRange::Month, &deals, at(2025, 1, 20, 12), UTC);

        assert_eq!(bins[0].units, 0);
        assert_eq!(bins[1].units, 1);
        assert_eq!(bins[1].commission_total, dec!(400));
    }

    #[test]
    fn test_quarter_bins() {
        let deals = vec![
            deal(at(2025, 3, 31, 23), dec!(1)),
            deal(at(2025, 4, 1, 0), dec!(10)),
            deal(at(2025, 6, 30, 23), dec!(20)),
            deal(at(2025, 7, 1, 0), dec!(2)),
        ];
        let bins = bins_for_range(AnalyticsRange::Quarter, &deals, at(2025, 5, 15, 12), UTC);

        assert_eq!(labels(&bins), vec!["Apr", "May", "Jun"]);
        assert_eq!(bins[0].commission_total, dec!(10));
        assert_eq!(bins[1].commission_total, Decimal::ZERO);
        assert_eq!(bins[2].commission_total, dec!(20));
        assert_contiguous(&bins);
    }

    #[test]
    fn test_year_bins_cover_whole_year() {
        let bins = bins_for_range(AnalyticsRange::Year, &[], at(2025, 8, 1, 0), UTC);

        assert_eq!(
            labels(&bins),
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        assert_eq!(bins[0].start, at(2025, 1, 1, 0));
        assert_eq!(bins[11].end, at(2026, 1, 1, 0));
        assert_contiguous(&bins);
    }

    #[test]
    fn test_bins_follow_calendar_zone() {
        let tz = chrono_tz::America::New_York;
        // Still Dec 31st in New York.
        let now = at(2025, 1, 1, 3);
        let deals = vec![deal(at(2025, 1, 1, 3), dec!(300))];

        let bins = bins_for_range(AnalyticsRange::Year, &deals, now, tz);

        assert_eq!(bins[0].start, at(2024, 1, 1, 5));
        assert_eq!(bins[11].commission_total, dec!(300));
    }

    #[test]
    fn test_range_summary_totals_bins() {
        let deals = vec![
            deal(at(2025, 5, 2, 9), dec!(250.50)),
            deal(at(2025, 5, 20, 9), dec!(749.50)),
            deal(at(2024, 5, 20, 9), dec!(1000)),
        ];
        let summary = range_summary(AnalyticsRange::Month, &deals, at(2025, 5, 25, 9), UTC);

        assert_eq!(summary.range, AnalyticsRange::Month);
        assert_eq!(summary.total_commission, dec!(1000.00));
        assert_eq!(summary.total_units, 2);
    }

    #[test]
    fn test_empty_deals_give_zero_bins() {
        for range in AnalyticsRange::ALL {
            let summary = range_summary(range, &[], at(2025, 5, 25, 9), UTC);
            assert!(!summary.bins.is_empty());
            assert!(summary.bins.iter().all(|bin| bin.units == 0));
            assert_eq!(summary.total_commission, Decimal::ZERO);
        }
    }

    #[test]
    fn test_huge_commissions_saturate() {
        let deals = vec![
            deal(at(2025, 1, 10, 9), dec!(60000000000000000000000000000)),
            deal(at(2025, 1, 11, 9), dec!(60000000000000000000000000000)),
            deal(at(2025, 2, 11, 9), dec!(60000000000000000000000000000)),
        ];
        let summary = range_summary(AnalyticsRange::Year, &deals, at(2025, 6, 1, 0), UTC);

        assert_eq!(summary.bins[0].commission_total, Decimal::MAX);
        assert_eq!(summary.total_commission, Decimal::MAX);
        assert_eq!(summary.total_units, 3);
    }

    #[test]
    fn test_day_without_midnight_starts_at_first_existing_minute() {
        // Chile skipped midnight on 2019-09-08; the day began at 01:00 (UTC-3).
        let tz = chrono_tz::America::Santiago;
        let deals = vec![deal(at(2019, 9, 8, 4), dec!(80))];
        let bins = bins_for_range(AnalyticsRange::Week, &deals, at(2019, 9, 10, 15), tz);

        assert_eq!(labels(&bins), vec!["4", "5", "6", "7", "8", "9", "10"]);
        assert_eq!(bins[4].start, at(2019, 9, 8, 4));
        assert_eq!(bins[4].units, 1);
        assert_eq!(bins[3].units, 0);
        assert_contiguous(&bins);
    }

    #[test]
    fn test_month_without_midnight_on_the_first() {
        // Paraguay skipped midnight on 2023-10-01.
        let tz = chrono_tz::America::Asuncion;
        let deals = vec![deal(at(2023, 10, 10, 15), dec!(5000))];
        let summary = range_summary(AnalyticsRange::Month, &deals, at(2023, 10, 20, 15), tz);

        assert_eq!(summary.bins.first().map(|bin| bin.start), Some(at(2023, 10, 1, 4)));
        assert_eq!(summary.total_commission, dec!(5000));
        assert_eq!(summary.total_units, 1);
        assert_contiguous(&summary.bins);
    }
}
