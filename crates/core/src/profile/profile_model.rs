//! User profile domain models.

use crate::constants::{DEFAULT_AVG_MONTHLY_CARS, DEFAULT_MONTHLY_GOAL, MAX_AVG_MONTHLY_CARS};
use crate::errors::{Result, ValidationError};
use crate::utils::decimal_utils::parse_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The single salesperson profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub brand: String,
    /// Informational only; analytics never read it
    pub avg_monthly_cars: u32,
    /// Commission target for the current calendar month
    pub monthly_goal: Decimal,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: String::new(),
            brand: String::new(),
            avg_monthly_cars: DEFAULT_AVG_MONTHLY_CARS,
            monthly_goal: Decimal::from(DEFAULT_MONTHLY_GOAL),
        }
    }
}

/// Input model for changing the profile. Absent fields keep their value.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub avg_monthly_cars: Option<u32>,
    pub monthly_goal: Option<Decimal>,
}

impl ProfileUpdate {
    pub fn goal(monthly_goal: Decimal) -> Self {
        ProfileUpdate {
            monthly_goal: Some(monthly_goal),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(goal) = self.monthly_goal {
            if goal < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "Monthly goal cannot be negative, got {}",
                    goal
                ))
                .into());
            }
        }
        if let Some(cars) = self.avg_monthly_cars {
            if cars > MAX_AVG_MONTHLY_CARS {
                return Err(ValidationError::InvalidInput(format!(
                    "Average monthly cars must be between 0 and {}, got {}",
                    MAX_AVG_MONTHLY_CARS, cars
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Produces the replacement profile. Does not validate.
    pub fn apply_to(&self, current: &UserProfile) -> UserProfile {
        UserProfile {
            name: self
                .name
                .as_deref()
                .map(str::trim)
                .map(str::to_string)
                .unwrap_or_else(|| current.name.clone()),
            brand: self
                .brand
                .as_deref()
                .map(str::trim)
                .map(str::to_string)
                .unwrap_or_else(|| current.brand.clone()),
            avg_monthly_cars: self.avg_monthly_cars.unwrap_or(current.avg_monthly_cars),
            monthly_goal: self.monthly_goal.unwrap_or(current.monthly_goal),
        }
    }
}

/// Parses a monthly goal typed by the user, e.g. `"12,000"`.
pub fn parse_monthly_goal(text: &str) -> Result<Decimal> {
    parse_amount(text, "monthlyGoal")
}
