/// Number of trailing days used by the dashboard's weekly trend
pub const ROLLING_WINDOW_DAYS: u32 = 7;

/// Number of deals shown in the "last sold" list
pub const RECENT_DEALS_LIMIT: usize = 5;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Monthly goal assigned to a fresh profile
pub const DEFAULT_MONTHLY_GOAL: i64 = 10_000;

/// Average cars per month assigned to a fresh profile
pub const DEFAULT_AVG_MONTHLY_CARS: u32 = 10;

/// Upper bound accepted for the average-cars-per-month estimate
pub const MAX_AVG_MONTHLY_CARS: u32 = 200;
