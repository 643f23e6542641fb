//! The storage port: a single slot holding one serialized document.

use crate::error::Result;

/// A persistence medium holding the whole recipe collection under one key.
///
/// Implementations only move bytes; they know nothing about recipes.
/// `read` returns `Ok(None)` when the slot has never been written.
pub trait StoragePort {
    /// Reads the current document, if any.
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replaces the document with `bytes`.
    fn write(&self, bytes: &[u8]) -> Result<()>;

    /// Short human-readable location, used in log lines.
    fn describe(&self) -> String;
}

impl<P: StoragePort + ?Sized> StoragePort for &P {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        (**self).read()
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        (**self).write(bytes)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<P: StoragePort + ?Sized> StoragePort for Box<P> {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        (**self).read()
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        (**self).write(bytes)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
