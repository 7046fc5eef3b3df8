//! Unit tests for the deal store.

use super::*;
use crate::errors::{Error, Result, StorageError};
use crate::events::{DomainEvent, MockDomainEventSink, NoOpDomainEventSink};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockDealRepository {
    stored: Mutex<Vec<Deal>>,
    save_calls: Mutex<usize>,
    fail_load: bool,
    fail_save: bool,
}

impl MockDealRepository {
    fn with_deals(deals: Vec<Deal>) -> Self {
        Self {
            stored: Mutex::new(deals),
            ..Default::default()
        }
    }

    fn stored(&self) -> Vec<Deal> {
        self.stored.lock().unwrap().clone()
    }

    fn save_calls(&self) -> usize {
        *self.save_calls.lock().unwrap()
    }
}

impl DealRepositoryTrait for MockDealRepository {
    fn load_deals(&self) -> Result<Vec<Deal>> {
        if self.fail_load {
            return Err(Error::Storage(StorageError::Malformed(
                "expected value at line 1 column 1".to_string(),
            )));
        }
        Ok(self.stored())
    }

    fn save_deals(&self, deals: &[Deal]) -> Result<()> {
        *self.save_calls.lock().unwrap() += 1;
        if self.fail_save {
            return Err(Error::Storage(StorageError::WriteFailed(
                "disk full".to_string(),
            )));
        }
        *self.stored.lock().unwrap() = deals.to_vec();
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn deal(id: &str, date: DateTime<Utc>) -> Deal {
    Deal {
        id: id.to_string(),
        customer_name: format!("Customer {}", id),
        vehicle: "Sentra".to_string(),
        deal_number: None,
        commission: dec!(250),
        date,
    }
}

fn new_deal(name: &str, date: DateTime<Utc>) -> NewDeal {
    NewDeal {
        customer_name: name.to_string(),
        vehicle: "Pathfinder".to_string(),
        commission: dec!(800),
        date: Some(date),
        ..Default::default()
    }
}

fn service(repository: Arc<MockDealRepository>) -> (DealService, Harness) {
    let sink = MockDomainEventSink::new();
    let service = DealService::new(repository.clone(), Arc::new(sink.clone()));
    (service, Harness { repository, sink })
}

struct Harness {
    repository: Arc<MockDealRepository>,
    sink: MockDomainEventSink,
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_loads_and_sorts_newest_first() {
    let repository = Arc::new(MockDealRepository::with_deals(vec![
        deal("old", at(2025, 1, 1, 9)),
        deal("new", at(2025, 1, 3, 9)),
        deal("mid", at(2025, 1, 2, 9)),
    ]));
    let (service, _) = service(repository);

    let ids: Vec<String> = service.get_deals().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[test]
fn test_unreadable_store_starts_empty() {
    let repository = Arc::new(MockDealRepository {
        fail_load: true,
        ..Default::default()
    });
    let (service, _) = service(repository);

    assert!(service.get_deals().is_empty());
}

#[test]
fn test_add_deal_persists_and_emits() {
    let repository = Arc::new(MockDealRepository::with_deals(vec![deal(
        "existing",
        at(2025, 1, 2, 9),
    )]));
    let (service, handle) = service(repository);

    let added = service
        .add_deal(new_deal("Alex", at(2025, 1, 5, 14)))
        .unwrap();

    let deals = service.get_deals();
    assert_eq!(deals.len(), 2);
    assert_eq!(deals[0].id, added.id);

    let stored = handle.repository.stored();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].customer_name, "Alex");

    assert_eq!(
        handle.sink.events(),
        vec![DomainEvent::deals_added(vec![added.id])]
    );
}

#[test]
fn test_add_deal_survives_failed_write() {
    let repository = Arc::new(MockDealRepository {
        fail_save: true,
        ..Default::default()
    });
    let (service, handle) = service(repository);

    let result = service.add_deal(new_deal("Alex", at(2025, 1, 5, 14)));

    assert!(result.is_ok());
    assert_eq!(service.get_deals().len(), 1);
    assert_eq!(handle.repository.save_calls(), 1);
    assert!(handle.repository.stored().is_empty());
    assert_eq!(handle.sink.len(), 1);
}

#[test]
fn test_add_deal_rejects_invalid_input() {
    let repository = Arc::new(MockDealRepository::default());
    let (service, handle) = service(repository);

    let invalid = NewDeal {
        commission: dec!(0),
        ..new_deal("Alex", at(2025, 1, 5, 14))
    };
    assert!(service.add_deal(invalid).is_err());

    assert!(service.get_deals().is_empty());
    assert_eq!(handle.repository.save_calls(), 0);
    assert!(handle.sink.is_empty());
}

#[test]
fn test_equal_timestamps_keep_insertion_order() {
    let repository = Arc::new(MockDealRepository::default());
    let (service, _) = service(repository);
    let same = at(2025, 2, 1, 12);

    let first = service.add_deal(new_deal("First", same)).unwrap();
    let second = service.add_deal(new_deal("Second", same)).unwrap();

    let ids: Vec<String> = service.get_deals().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn test_recent_deals_limits_without_mutating() {
    let repository = Arc::new(MockDealRepository::with_deals(
        (1..=7).map(|day| deal(&format!("d{}", day), at(2025, 3, day, 10))).collect(),
    ));
    let (service, _) = service(repository);

    let recent = service.recent_deals(5);
    let ids: Vec<&str> = recent.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["d7", "d6", "d5", "d4", "d3"]);
    assert_eq!(service.get_deals().len(), 7);
}

#[test]
fn test_wipe_all_clears_persists_and_emits() {
    let repository = Arc::new(MockDealRepository::with_deals(vec![deal(
        "a",
        at(2025, 1, 1, 9),
    )]));
    let (service, handle) = service(repository);

    service.wipe_all();

    assert!(service.get_deals().is_empty());
    assert!(handle.repository.stored().is_empty());
    assert_eq!(handle.sink.events(), vec![DomainEvent::DealsCleared]);
}

#[test]
fn test_store_without_listeners() {
    let repository = Arc::new(MockDealRepository::default());
    let service = DealService::new(repository.clone(), Arc::new(NoOpDomainEventSink));

    service.add_deal(new_deal("Quinn", at(2025, 2, 1, 9))).unwrap();
    service.wipe_all();

    assert!(service.get_deals().is_empty());
    assert_eq!(repository.save_calls(), 2);
    assert!(repository.stored().is_empty());
}
