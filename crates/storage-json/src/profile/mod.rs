//! JSON storage implementation for the user profile.

mod repository;

pub use repository::ProfileRepository;
