use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::{Arc, PoisonError, RwLock};

use super::profile_model::{ProfileUpdate, UserProfile};
use super::profile_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};

pub struct ProfileService {
    repository: Arc<dyn ProfileRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
    profile: RwLock<UserProfile>,
}

impl ProfileService {
    /// Loads the saved profile, substituting defaults when there is none
    /// or it cannot be read.
    pub fn new(
        repository: Arc<dyn ProfileRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        let profile = match repository.load_profile() {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                debug!("No saved profile, using defaults");
                UserProfile::default()
            }
            Err(e) => {
                warn!("Failed to load profile, using defaults: {}", e);
                UserProfile::default()
            }
        };

        ProfileService {
            repository,
            event_sink,
            profile: RwLock::new(profile),
        }
    }

    /// Replaces the profile wholesale, saves it best-effort and notifies.
    fn replace(&self, next: UserProfile) -> UserProfile {
        {
            let mut profile = self.profile.write().unwrap_or_else(PoisonError::into_inner);
            *profile = next.clone();
        }
        if let Err(e) = self.repository.save_profile(&next) {
            warn!("Failed to persist profile: {}", e);
        }
        self.event_sink
            .emit(DomainEvent::profile_updated(next.monthly_goal));
        next
    }
}

impl ProfileServiceTrait for ProfileService {
    fn get_profile(&self) -> UserProfile {
        self.profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile> {
        update.validate()?;
        let next = update.apply_to(&self.get_profile());
        debug!("Updating profile, monthly goal {}", next.monthly_goal);
        Ok(self.replace(next))
    }

    fn set_monthly_goal(&self, monthly_goal: Decimal) -> Result<UserProfile> {
        self.update_profile(ProfileUpdate::goal(monthly_goal))
    }

    fn reset_to_defaults(&self) -> UserProfile {
        self.replace(UserProfile::default())
    }
}
