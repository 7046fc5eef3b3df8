use std::path::Path;

use moneymark_core::profile::{ProfileRepositoryTrait, UserProfile};
use moneymark_core::Result;

use crate::document::JsonDocument;
use crate::get_profile_path;

/// Stores the single user profile as one JSON object.
pub struct ProfileRepository {
    document: JsonDocument,
}

impl ProfileRepository {
    pub fn new(data_dir: &Path) -> Self {
        ProfileRepository {
            document: JsonDocument::new(get_profile_path(data_dir)),
        }
    }
}

impl ProfileRepositoryTrait for ProfileRepository {
    fn load_profile(&self) -> Result<Option<UserProfile>> {
        Ok(self.document.read()?)
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        self.document.write(profile)?;
        Ok(())
    }
}
