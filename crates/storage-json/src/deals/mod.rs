//! JSON storage implementation for deals.

mod repository;

pub use repository::DealRepository;
