//! In-memory storage backend.
//!
//! Holds the slot in a mutex-guarded `Option<String>`. Used for ephemeral
//! sessions and throughout the test suites, where it doubles as a probe:
//! it counts writes and can be switched into failing mode to exercise the
//! adapter's swallow-and-log paths.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::error::StorageError;
use crate::storage::CartStorage;

/// Cart slot held in process memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
    writes: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    /// An empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-seeded with a raw payload.
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        let storage = Self::default();
        *storage.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner) =
            Some(payload.into());
        storage
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make all subsequent reads fail.
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    /// Make all subsequent writes fail.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("simulated read failure".into()));
        }
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("simulated write failure".into()));
        }
        *self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(payload.to_owned());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
