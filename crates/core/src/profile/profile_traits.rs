use crate::errors::Result;
use crate::profile::profile_model::{ProfileUpdate, UserProfile};
use rust_decimal::Decimal;

/// Trait for profile persistence
pub trait ProfileRepositoryTrait: Send + Sync {
    /// Returns `None` when no profile has been saved yet.
    fn load_profile(&self) -> Result<Option<UserProfile>>;
    fn save_profile(&self, profile: &UserProfile) -> Result<()>;
}

/// Trait for the in-memory profile store
pub trait ProfileServiceTrait: Send + Sync {
    fn get_profile(&self) -> UserProfile;
    fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile>;
    fn set_monthly_goal(&self, monthly_goal: Decimal) -> Result<UserProfile>;
    fn reset_to_defaults(&self) -> UserProfile;
}
