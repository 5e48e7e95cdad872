//! File-backed record stores (`data.json`, `history.json`).
//!
//! A store holds one JSON array of one record type. Every mutation rewrites
//! the whole array; a missing or blank file reads as an empty list.

mod file;

use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::item::Item;
use crate::core::message::Message;

/// Backing file of the item store, relative to the working directory.
pub const ITEMS_FILE: &str = "data.json";

/// Backing file of the conversation store, relative to the working directory.
pub const HISTORY_FILE: &str = "history.json";

/// Errors when reading or writing a store file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not a valid record list: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Ordered list of `T` persisted as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

pub type ItemStore = RecordStore<Item>;
pub type HistoryStore = RecordStore<Message>;

impl<T> RecordStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Load all records. Empty when the file is absent or blank.
    pub fn load(&self) -> Result<Vec<T>, StoreError> {
        let Some(data) = file::read_if_present(&self.path).map_err(|e| self.io_error(e))? else {
            log::debug!("{} not found, starting empty", self.path.display());
            return Ok(Vec::new());
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<T> =
            serde_json::from_str(&data).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        log::debug!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Replace the file with `records`.
    pub fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| self.io_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        file::replace(&self.path, &json).map_err(|e| self.io_error(e))?;
        log::debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    /// Delete the backing file. A file that is already gone is not an error.
    pub fn clear(&self) -> Result<(), StoreError> {
        let existed = file::remove_if_present(&self.path).map_err(|e| self.io_error(e))?;
        if !existed {
            log::debug!("{} already absent", self.path.display());
        }
        Ok(())
    }
}

impl ItemStore {
    /// `data.json` in the working directory.
    pub fn default_items() -> Self {
        Self::new(ITEMS_FILE)
    }
}

impl HistoryStore {
    /// `history.json` in the working directory.
    pub fn default_history() -> Self {
        Self::new(HISTORY_FILE)
    }
}
