use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Default calendar zone used when none is configured.
/// Deals are stored as UTC instants; every day, week and month boundary is
/// derived by projecting those instants into a calendar zone first.
pub const DEFAULT_CALENDAR_TZ: Tz = chrono_tz::UTC;

/// Converts a UTC instant to its calendar date in the given timezone.
///
/// This is the single source of truth for turning a deal timestamp into a
/// "business date".
pub fn calendar_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Longest stretch of local time a zone has ever skipped at once.
const MAX_LOCAL_GAP_MINUTES: i64 = 24 * 60;

/// Returns the UTC instant at which `date` begins in `tz`.
///
/// Usually local midnight. In a DST overlap the earlier instant wins; when
/// midnight falls in a gap the day starts at its first local minute that
/// exists. `None` only for dates chrono cannot represent.
pub fn start_of_date(date: NaiveDate, tz: Tz) -> Option<DateTime<Utc>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    (0..MAX_LOCAL_GAP_MINUTES)
        .map_while(|minute| midnight.checked_add_signed(Duration::minutes(minute)))
        .take_while(|local| local.date() == date)
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map(|local| local.with_timezone(&Utc))
}

/// Start of the calendar day containing `instant`.
pub fn start_of_day(instant: DateTime<Utc>, tz: Tz) -> Option<DateTime<Utc>> {
    start_of_date(calendar_date_from_utc(instant, tz), tz)
}

/// Start of the calendar month containing `instant`.
pub fn start_of_month(instant: DateTime<Utc>, tz: Tz) -> Option<DateTime<Utc>> {
    let first = first_of_month(calendar_date_from_utc(instant, tz))?;
    start_of_date(first, tz)
}

/// True when both instants fall on the same calendar day in `tz`.
pub fn is_same_day(a: DateTime<Utc>, b: DateTime<Utc>, tz: Tz) -> bool {
    calendar_date_from_utc(a, tz) == calendar_date_from_utc(b, tz)
}

pub fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

pub fn first_of_quarter(date: NaiveDate) -> Option<NaiveDate> {
    let quarter_month = (date.month0() / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), quarter_month, 1)
}

pub fn first_of_year(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), 1, 1)
}

pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}

pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Week-of-month index (1-based) using Monday-first weeks.
///
/// Week 1 is the possibly partial week containing the 1st; every Monday
/// after that opens the next week.
pub fn week_of_month(date: NaiveDate) -> u32 {
    let Some(first) = first_of_month(date) else {
        return 1;
    };
    let offset = first.weekday().num_days_from_monday();
    (date.day0() + offset) / 7 + 1
}

/// The first Monday strictly after `date`.
pub fn next_week_start(date: NaiveDate) -> Option<NaiveDate> {
    let days_until_monday = 7 - i64::from(date.weekday().num_days_from_monday());
    add_days(date, days_until_monday)
}

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            break;
        }
    }
    days
}
