use chrono::Utc;
use log::{debug, warn};
use std::sync::{Arc, PoisonError, RwLock};

use super::deals_model::{Deal, NewDeal};
use super::deals_traits::{DealRepositoryTrait, DealServiceTrait};
use crate::analytics::recent_deals;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};

/// Owned, observable container for the deal collection.
///
/// The in-memory list is the source of truth for every read. Writes to the
/// repository are best-effort: a failed save is logged and dropped.
pub struct DealService {
    repository: Arc<dyn DealRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
    deals: RwLock<Vec<Deal>>,
}

impl DealService {
    /// Loads the persisted deals, falling back to an empty list.
    pub fn new(
        repository: Arc<dyn DealRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        let mut deals = match repository.load_deals() {
            Ok(deals) => deals,
            Err(e) => {
                warn!("Failed to load deals, starting empty: {}", e);
                Vec::new()
            }
        };
        sort_newest_first(&mut deals);
        debug!("Deal store initialised with {} deals", deals.len());

        DealService {
            repository,
            event_sink,
            deals: RwLock::new(deals),
        }
    }

    fn persist(&self, deals: &[Deal]) {
        if let Err(e) = self.repository.save_deals(deals) {
            warn!("Failed to persist {} deals: {}", deals.len(), e);
        }
    }
}

impl DealServiceTrait for DealService {
    fn get_deals(&self) -> Vec<Deal> {
        self.deals
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn add_deal(&self, new_deal: NewDeal) -> Result<Deal> {
        let deal = new_deal.into_deal(Utc::now())?;
        debug!("Adding deal {} dated {}", deal.id, deal.date);

        {
            let mut deals = self.deals.write().unwrap_or_else(PoisonError::into_inner);
            deals.push(deal.clone());
            sort_newest_first(&mut deals);
            self.persist(&deals);
        }

        self.event_sink
            .emit(DomainEvent::deals_added(vec![deal.id.clone()]));
        Ok(deal)
    }

    fn recent_deals(&self, limit: usize) -> Vec<Deal> {
        let deals = self.deals.read().unwrap_or_else(PoisonError::into_inner);
        recent_deals(&deals, limit)
    }

    fn wipe_all(&self) {
        {
            let mut deals = self.deals.write().unwrap_or_else(PoisonError::into_inner);
            deals.clear();
            self.persist(&deals);
        }
        self.event_sink.emit(DomainEvent::deals_cleared());
    }
}

/// Stable, so deals sharing a timestamp keep insertion order.
fn sort_newest_first(deals: &mut [Deal]) {
    deals.sort_by(|a, b| b.date.cmp(&a.date));
}
