//! In-process storage slot.
//!
//! Used as the test double for the record store and for ephemeral sessions.
//! Clones share the same slot, so a test can keep one handle to inspect or
//! corrupt the raw bytes while the store owns another.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{Result, StorageError};
use crate::port::StoragePort;

#[derive(Debug, Default)]
struct Slot {
    document: Option<Vec<u8>>,
    quota: Option<usize>,
    unavailable: Option<String>,
    writes: usize,
}

/// Storage port backed by memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Slot>>,
}

impl MemoryStorage {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-filled with `bytes`.
    pub fn with_document(bytes: impl Into<Vec<u8>>) -> Self {
        let storage = Self::new();
        storage.lock().document = Some(bytes.into());
        storage
    }

    /// Rejects writes larger than `limit` bytes.
    pub fn with_quota(self, limit: usize) -> Self {
        self.lock().quota = Some(limit);
        self
    }

    /// Makes every read and write fail until [`MemoryStorage::enable`].
    pub fn disable(&self, reason: impl Into<String>) {
        self.lock().unavailable = Some(reason.into());
    }

    /// Clears a previous [`MemoryStorage::disable`].
    pub fn enable(&self) {
        self.lock().unavailable = None;
    }

    /// Overwrites the raw document, bypassing any failure injection.
    pub fn set_raw(&self, bytes: impl Into<Vec<u8>>) {
        self.lock().document = Some(bytes.into());
    }

    /// Returns a copy of the raw document.
    pub fn raw(&self) -> Option<Vec<u8>> {
        self.lock().document.clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        let slot = self.lock();
        if let Some(reason) = &slot.unavailable {
            return Err(StorageError::unavailable(reason.clone()));
        }
        Ok(slot.document.clone())
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        let mut slot = self.lock();
        if let Some(reason) = &slot.unavailable {
            return Err(StorageError::unavailable(reason.clone()));
        }
        if let Some(limit) = slot.quota {
            if bytes.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    needed: bytes.len(),
                    limit,
                });
            }
        }
        slot.document = Some(bytes.to_vec());
        slot.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
