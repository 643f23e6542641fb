//! File-backed storage slot.
//!
//! The collection lives in one JSON document at
//! `<data_dir>/<namespace>.json`. The directory is created on first write.
//! Writes go to a hidden sibling file that is renamed over the document, so
//! readers see either the old document or the new one, never a torn write.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, StorageError};
use crate::port::StoragePort;

/// Default namespace, and so the default file stem.
pub const DEFAULT_NAMESPACE: &str = "recipes";

/// Storage port backed by a single file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a slot for `namespace` inside `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{namespace}.json")),
        }
    }

    /// Creates a slot at an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling that a write is staged in before the rename.
    pub fn staging_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

impl StoragePort for FileStorage {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io_with_path(e, &self.path)),
        }
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io_with_path(e, parent))?;
            }
        }

        let staging = self.staging_path();
        if let Err(e) = write_synced(&staging, bytes) {
            let _ = fs::remove_file(&staging);
            return Err(StorageError::io_with_path(e, &staging));
        }
        if let Err(e) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(StorageError::io_with_path(e, &self.path));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
