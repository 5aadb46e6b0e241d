//! Persistence adapter: one durable key-value slot for the cart.
//!
//! Backends implement [`CartStorage`], a raw read/write pair over a single
//! text slot. The policy layer lives in [`load`] and [`save`]: `load` is
//! total (absent, unreadable, or malformed data degrades to an empty line
//! sequence), and `save` logs and swallows write failures because the
//! in-memory store stays the source of truth regardless of persistence
//! success. No other part of the system touches the slot.

pub mod file;
pub mod memory;

use golden_fig_core::CartLine;

use crate::decode;
use crate::error::StorageError;

/// A single durable text slot holding the serialized cart.
pub trait CartStorage: Send + Sync {
    /// Read the raw slot value, `None` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the slot exists but cannot be read.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value cannot be written.
    fn write(&self, payload: &str) -> Result<(), StorageError>;
}

/// Load the persisted cart lines.
///
/// Total: every failure path degrades to an empty sequence. Read errors and
/// malformed payloads are logged at warn level and never propagated; entries
/// that fail the structural filter are silently dropped.
pub fn load(storage: &dyn CartStorage) -> Vec<CartLine> {
    let raw = match storage.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("failed to read persisted cart, starting empty: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => decode::filter_lines(value),
        Err(e) => {
            tracing::warn!("persisted cart is not valid JSON, starting empty: {e}");
            Vec::new()
        }
    }
}

/// Persist the given line sequence.
///
/// Write failures are logged and swallowed; the caller's in-memory state is
/// authoritative either way.
pub fn save(storage: &dyn CartStorage, lines: &[CartLine]) {
    let payload = match serde_json::to_string(lines) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("failed to serialize cart, skipping save: {e}");
            return;
        }
    };

    if let Err(e) = storage.write(&payload) {
        tracing::warn!("failed to persist cart: {e}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use golden_fig_core::{CurrencyCode, Price, Product};

    use super::memory::MemoryStorage;
    use super::*;

    fn line(id: &str, quantity: u32) -> CartLine {
        CartLine::new(Product::new(id, Price::zero(CurrencyCode::USD)), quantity)
    }

    #[test]
    fn test_load_from_empty_slot() {
        let storage = MemoryStorage::new();
        assert!(load(&storage).is_empty());
    }

    #[test]
    fn test_load_garbage_degrades_to_empty() {
        let storage = MemoryStorage::with_payload("{not json at all");
        assert!(load(&storage).is_empty());
    }

    #[test]
    fn test_round_trip_is_identity_for_valid_lines() {
        let storage = MemoryStorage::new();
        let lines = vec![line("A", 2), line("B", 7)];

        save(&storage, &lines);
        assert_eq!(load(&storage), lines);
    }

    #[test]
    fn test_persisted_layout_is_bare_array_of_line_entries() {
        let storage = MemoryStorage::new();
        save(&storage, &[line("A", 2)]);

        let raw = storage.read().unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entries = value.as_array().expect("slot holds a top-level array");
        let entry = entries.first().unwrap().as_object().unwrap();
        assert!(entry.get("product").is_some_and(serde_json::Value::is_object));
        assert_eq!(entry.get("quantity"), Some(&serde_json::json!(2)));
    }

    #[test]
    fn test_load_applies_structural_filter() {
        let storage = MemoryStorage::with_payload(
            r#"[{"product":{"id":"A"},"quantity":2},{"product":{"id":"B"}}]"#,
        );

        let lines = load(&storage);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().unwrap().product.id.as_str(), "A");
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let storage = MemoryStorage::new();
        storage.fail_writes();
        save(&storage, &[line("A", 1)]);
        // The slot is untouched and nothing panicked or propagated.
        assert!(load(&storage).is_empty());
    }

    #[test]
    fn test_load_read_failure_degrades_to_empty() {
        let storage = MemoryStorage::with_payload(r#"[{"product":{"id":"A"},"quantity":2}]"#);
        storage.fail_reads();
        assert!(load(&storage).is_empty());
    }
}
