//! Integration tests for Golden Fig.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p golden-fig-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_sessions` - Store lifecycle across simulated page loads
//! - `cart_persistence` - Debounce timing and storage degradation
//! - `checkout_flow` - Simulated order submission end to end
//!
//! The tests use the in-memory storage backend as a write probe and the
//! file backend (under a tempdir) for real reload round-trips. No external
//! services are involved.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;
use std::time::Duration;

use golden_fig_cart::storage::memory::MemoryStorage;
use golden_fig_cart::store::CartStore;
use golden_fig_core::{CurrencyCode, Price, Product};
use rust_decimal::Decimal;

/// A store over fresh in-memory storage with a short debounce window,
/// returning the storage so tests can probe writes.
#[must_use]
pub fn probe_store(window_ms: u64) -> (CartStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let store = CartStore::open(storage.clone(), Duration::from_millis(window_ms));
    (store, storage)
}

/// A catalog-style product snapshot for tests.
#[must_use]
pub fn test_product(id: &str, dollars: i64) -> Product {
    Product {
        id: id.into(),
        title: format!("Test {id}"),
        category: Some("test".to_owned()),
        price: Price::new(Decimal::from(dollars), CurrencyCode::USD),
        image_url: None,
    }
}
