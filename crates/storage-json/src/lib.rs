//! JSON file storage implementation for MoneyMark.
//!
//! This crate implements the repository traits defined in `moneymark-core`
//! on top of two pretty-printed JSON documents inside a data directory:
//!
//! ```text
//! <data dir>/
//! ├── user_profile.json   single profile object
//! └── deals.json          array of deals
//! ```
//!
//! Every save rewrites the whole document through a temporary sibling file
//! and a rename, so a crash mid-write leaves the previous version intact.

pub mod deals;
pub mod document;
pub mod errors;
pub mod profile;

use std::fs;
use std::path::{Path, PathBuf};

pub use deals::DealRepository;
pub use document::JsonDocument;
pub use errors::StorageError;
pub use profile::ProfileRepository;

pub use moneymark_core::errors::{Error, Result};

pub const PROFILE_FILE_NAME: &str = "user_profile.json";
pub const DEALS_FILE_NAME: &str = "deals.json";

/// Creates the data directory if needed and returns its path.
pub fn init(data_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(data_dir).map_err(|source| StorageError::WriteFailed {
        path: data_dir.to_path_buf(),
        source,
    })?;
    log::debug!("Using data directory {}", data_dir.display());
    Ok(data_dir.to_path_buf())
}

pub fn get_profile_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PROFILE_FILE_NAME)
}

pub fn get_deals_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DEALS_FILE_NAME)
}
