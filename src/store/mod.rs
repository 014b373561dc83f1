//! Timestamped JSON persistence.
//!
//! One file per invocation: `<base>/<subdir>/<prefix>_<timestamp>.json`,
//! pretty-printed, with colons in the timestamp replaced so the name is safe
//! on every filesystem.  Records are written once and never read back.

use crate::records::timestamp;
use crate::scout_log;
use log::Level;
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output-directory handle built from the `[output]` config table.
#[derive(Debug, Clone)]
pub struct Store {
    base: PathBuf,
}

impl Store {
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        Store { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Write one timestamped file under `subdir` and return its path.
    pub fn write<T: Serialize>(
        &self,
        records: &[T],
        subdir: &str,
        prefix: &str,
    ) -> Result<PathBuf, StoreError> {
        let folder = self.base.join(subdir);
        fs::create_dir_all(&folder)?;
        let name = format!("{}_{}.json", prefix, timestamp().replace(':', "-"));
        let path = folder.join(name);
        let body = serde_json::to_string_pretty(records)?;
        fs::write(&path, body)?;
        Ok(path)
    }

    /// Best-effort variant: failures are logged, the record set is dropped.
    pub fn persist<T: Serialize>(&self, records: &[T], subdir: &str, prefix: &str) {
        match self.write(records, subdir, prefix) {
            Ok(path) => {
                scout_log!(Level::Info, "store", "Saved {} record(s) to {:?}", records.len(), path);
            }
            Err(e) => {
                scout_log!(Level::Error, "store", "JSON write error: {}", e);
            }
        }
    }
}
