//! Deals module - domain models, the record store, and traits.

mod deals_model;
mod deals_service;
mod deals_traits;

pub use deals_model::{parse_commission, Deal, NewDeal};
pub use deals_service::DealService;
pub use deals_traits::{DealRepositoryTrait, DealServiceTrait};

#[cfg(test)]
mod deals_service_tests;
