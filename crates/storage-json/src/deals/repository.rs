use std::path::Path;

use log::debug;
use moneymark_core::deals::{Deal, DealRepositoryTrait};
use moneymark_core::Result;

use crate::document::JsonDocument;
use crate::get_deals_path;

/// Stores the deal collection as a single JSON array.
pub struct DealRepository {
    document: JsonDocument,
}

impl DealRepository {
    pub fn new(data_dir: &Path) -> Self {
        DealRepository {
            document: JsonDocument::new(get_deals_path(data_dir)),
        }
    }
}

impl DealRepositoryTrait for DealRepository {
    fn load_deals(&self) -> Result<Vec<Deal>> {
        let deals: Vec<Deal> = self.document.read()?.unwrap_or_default();
        debug!(
            "Loaded {} deals from {}",
            deals.len(),
            self.document.path().display()
        );
        Ok(deals)
    }

    fn save_deals(&self, deals: &[Deal]) -> Result<()> {
        self.document.write(deals)?;
        Ok(())
    }
}
