//! JSON file store.
//!
//! # Invariants
//! - A missing file is created with the default document on first load.
//! - An unreadable or malformed file loads as the default document.
//! - Saves go through a sibling temp file and a rename.

use super::{DocumentStore, StoreError, StoreResult};
use crate::model::item::AppData;
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Archive document stored as pretty-printed JSON on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    fn write_document(&self, data: &AppData) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let encoded = serde_json::to_string_pretty(data)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, encoded).map_err(|source| StoreError::Io {
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "data.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> StoreResult<AppData> {
        let started_at = Instant::now();

        if !self.path.exists() {
            let data = AppData::default();
            self.write_document(&data)?;
            info!(
                "event=store_load module=store status=created path={} duration_ms={}",
                self.path.display(),
                started_at.elapsed().as_millis()
            );
            return Ok(data);
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "event=store_load module=store status=fallback path={} error_code=read_failed error={}",
                    self.path.display(),
                    err
                );
                return Ok(AppData::default());
            }
        };

        match serde_json::from_str::<AppData>(&raw) {
            Ok(data) => {
                info!(
                    "event=store_load module=store status=ok path={} items={} phrases={} duration_ms={}",
                    self.path.display(),
                    data.items.len(),
                    data.custom_phrases.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(data)
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=fallback path={} error_code=parse_failed error={}",
                    self.path.display(),
                    err
                );
                Ok(AppData::default())
            }
        }
    }

    fn save(&self, data: &AppData) -> StoreResult<()> {
        let started_at = Instant::now();
        match self.write_document(data) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok path={} items={} duration_ms={}",
                    self.path.display(),
                    data.items.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
