//! Error types for the persistence adapter.
//!
//! These errors stop at the adapter boundary: `load` recovers to an empty
//! cart and `save` logs and swallows, so nothing in this module ever reaches
//! a consumer. They exist so storage backends can report *why* a slot
//! operation failed and so tests can assert on failure paths.

use thiserror::Error;

/// Failure reading or writing the persisted cart slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure (missing directory, permissions, disk full).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend rejected the write (e.g., quota exceeded).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The line sequence could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}
