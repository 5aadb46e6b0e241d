//! Golden Fig Cart - cart store and persistence engine.
//!
//! This crate owns the one stateful subsystem of the storefront: the
//! session shopping cart. It is built from three pieces:
//!
//! - [`store::CartStore`] - authoritative in-memory cart with the four
//!   mutation operations; hands consumers immutable [`store::CartSnapshot`]
//!   views only.
//! - [`storage`] - the persistence adapter: a raw key-value slot behind the
//!   [`storage::CartStorage`] trait, with a total `load` (malformed data
//!   degrades to an empty cart, never an error) and a log-and-swallow
//!   `save`.
//! - [`debounce`] - a timer-owning scheduler that coalesces rapid mutations
//!   into one write after a quiet window.
//!
//! The store is explicitly constructed and injected into whatever owns the
//! session; there is no ambient global.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use golden_fig_cart::config::CartConfig;
//! use golden_fig_cart::storage::file::JsonFileStorage;
//! use golden_fig_cart::store::CartStore;
//! use golden_fig_core::{CurrencyCode, Price, Product};
//!
//! # #[tokio::main] async fn main() {
//! let config = CartConfig::default();
//! let storage = Arc::new(JsonFileStorage::new(&config.storage_path));
//! let store = CartStore::open(storage, config.debounce_window);
//!
//! store.add_item(Product::new("fig-1", Price::zero(CurrencyCode::USD)), 2);
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.total_quantity, 2);
//! store.flush();
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod config;
pub mod debounce;
pub mod decode;
pub mod error;
pub mod storage;
pub mod store;

pub use checkout::{CheckoutError, OrderConfirmation, OrderDetails, submit_order};
pub use config::CartConfig;
pub use error::StorageError;
pub use store::{CartSnapshot, CartStore};
