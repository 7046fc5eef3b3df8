use crate::deals::deals_model::{Deal, NewDeal};
use crate::errors::Result;

/// Trait for deal persistence.
///
/// The whole collection is written on every change; there is no
/// per-record update.
pub trait DealRepositoryTrait: Send + Sync {
    /// Loads every persisted deal. A missing document is an empty list.
    fn load_deals(&self) -> Result<Vec<Deal>>;

    /// Replaces the persisted collection.
    fn save_deals(&self, deals: &[Deal]) -> Result<()>;
}

/// Trait for the in-memory deal store.
pub trait DealServiceTrait: Send + Sync {
    /// Snapshot of every deal, newest first.
    fn get_deals(&self) -> Vec<Deal>;

    /// Validates and appends a deal, then persists best-effort.
    fn add_deal(&self, new_deal: NewDeal) -> Result<Deal>;

    /// The `limit` most recently dated deals.
    fn recent_deals(&self, limit: usize) -> Vec<Deal>;

    /// Removes every deal.
    fn wipe_all(&self);
}
