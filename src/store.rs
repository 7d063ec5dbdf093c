use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::model::attendance::AttendanceRecord;

/// Everything the system knows, keyed by calendar date. `NaiveDate`
/// serializes to `YYYY-MM-DD`, which is exactly the on-disk key format.
pub type AttendanceBook = BTreeMap<NaiveDate, Vec<AttendanceRecord>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read attendance file: {0}")]
    Read(#[source] io::Error),
    #[error("attendance file is not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("failed to write attendance file: {0}")]
    Write(#[source] io::Error),
}

/// Load/save contract for the attendance book. Handlers only ever see this
/// trait, so tests can swap the JSON file for an in-memory double.
pub trait AttendanceStore: Send + Sync {
    /// A missing backing file is an empty book; an unreadable or corrupt
    /// one is an error, and the caller decides whether to degrade.
    fn load(&self) -> Result<AttendanceBook, StoreError>;

    /// Serializes the whole book, overwriting prior content. No partial
    /// updates, no locking: concurrent writers are last-write-wins.
    fn save(&self, book: &AttendanceBook) -> Result<(), StoreError>;
}

/// Single pretty-printed JSON document on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AttendanceStore for FileStore {
    fn load(&self) -> Result<AttendanceBook, StoreError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "attendance file absent, starting empty");
                return Ok(AttendanceBook::new());
            }
            Err(e) => return Err(StoreError::Read(e)),
        };
        serde_json::from_slice(&raw).map_err(StoreError::Corrupt)
    }

    fn save(&self, book: &AttendanceBook) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(book)
            .map_err(|e| StoreError::Write(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        fs::write(&self.path, json).map_err(StoreError::Write)
    }
}
