//! Profile module - the single user profile and its store.

mod profile_model;
mod profile_service;
mod profile_traits;

pub use profile_model::{parse_monthly_goal, ProfileUpdate, UserProfile};
pub use profile_service::ProfileService;
pub use profile_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
