use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StorageError;

/// One JSON document on disk.
///
/// Reads and writes are serialised through an internal lock so a save never
/// interleaves with a load of the same file.
#[derive(Debug)]
pub struct JsonDocument {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonDocument {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decodes the document. A missing or blank file is `None`.
    pub fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, StorageError> {
        let _guard = self.lock()?;
        self.load_locked()
    }

    /// Replaces the document with the pretty-printed `value`.
    pub fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), StorageError> {
        let _guard = self.lock()?;
        self.persist_locked(value)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>, StorageError> {
        self.lock
            .lock()
            .map_err(|_| StorageError::LockPoisoned(self.path.display().to_string()))
    }

    fn load_locked<T: DeserializeOwned>(&self) -> Result<Option<T>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read(&self.path).map_err(|source| StorageError::ReadFailed {
            path: self.path.clone(),
            source,
        })?;
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })
    }

    fn persist_locked<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(value)?;
        let write_failed = |source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }

        let tmp_path = self.tmp_path();
        let mut file = File::create(&tmp_path).map_err(write_failed)?;
        file.write_all(json.as_bytes()).map_err(write_failed)?;
        file.sync_all().map_err(write_failed)?;
        drop(file);
        fs::rename(&tmp_path, &self.path).map_err(write_failed)?;

        debug!("Wrote {} bytes to {}", json.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
