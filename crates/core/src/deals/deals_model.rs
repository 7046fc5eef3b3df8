//! Deal domain models.

use crate::errors::{Result, ValidationError};
use crate::utils::decimal_utils::parse_amount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded sale.
///
/// Deals are immutable once created; the store only ever appends them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub customer_name: String,
    /// The car that was sold
    pub vehicle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_number: Option<String>,
    pub commission: Decimal,
    pub date: DateTime<Utc>,
}

/// Input model for recording a new deal
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewDeal {
    pub id: Option<String>,
    pub customer_name: String,
    pub vehicle: String,
    pub deal_number: Option<String>,
    pub commission: Decimal,
    /// Defaults to the moment the deal is recorded
    pub date: Option<DateTime<Utc>>,
}

impl NewDeal {
    pub fn validate(&self) -> Result<()> {
        if self.customer_name.trim().is_empty() {
            return Err(ValidationError::MissingField("customerName".to_string()).into());
        }
        if self.vehicle.trim().is_empty() {
            return Err(ValidationError::MissingField("vehicle".to_string()).into());
        }
        if self.commission <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Commission must be greater than zero, got {}",
                self.commission
            ))
            .into());
        }
        Ok(())
    }

    /// Validates the input and turns it into a stored deal.
    ///
    /// Text fields are trimmed and a blank deal number is dropped. `now`
    /// is used when no date was supplied.
    pub fn into_deal(self, now: DateTime<Utc>) -> Result<Deal> {
        self.validate()?;
        let deal_number = self
            .deal_number
            .map(|number| number.trim().to_string())
            .filter(|number| !number.is_empty());
        Ok(Deal {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            customer_name: self.customer_name.trim().to_string(),
            vehicle: self.vehicle.trim().to_string(),
            deal_number,
            commission: self.commission,
            date: self.date.unwrap_or(now),
        })
    }
}

/// Parses a commission typed by the user, e.g. `"1,250.50"`.
///
/// The sign is not checked here; see [`NewDeal::validate`].
pub fn parse_commission(text: &str) -> Result<Decimal> {
    parse_amount(text, "commission")
}
