//! MoneyMark Core - Domain entities, services, and traits.
//!
//! This crate contains the deal records, the user profile, and the
//! aggregation engine that turns a list of dated commissions into goal
//! progress, rolling-window totals and calendar-aligned bins.
//! It is storage-agnostic and defines traits that are implemented
//! by the `storage-json` crate.

pub mod analytics;
pub mod constants;
pub mod deals;
pub mod errors;
pub mod events;
pub mod profile;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
