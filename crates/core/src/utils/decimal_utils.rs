use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::{Result, ValidationError};

/// Parses an amount typed by the user, e.g. `"1,250.50"`.
///
/// Grouping commas are ignored. Blank input is reported as a missing
/// `field`; the sign is left to the caller.
pub fn parse_amount(text: &str, field: &str) -> Result<Decimal> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }
    Decimal::from_str(&cleaned).map_err(|e| ValidationError::DecimalParse(e).into())
}

/// `a + b`, pinned to `Decimal::MAX` or `Decimal::MIN` instead of
/// overflowing.
pub fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(if b.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Sum that saturates rather than panicking on overflow.
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values.into_iter().fold(Decimal::ZERO, saturating_add)
}
