//! The cart store: authoritative session cart state.
//!
//! Exactly one [`CartStore`] exists per session; whoever owns the session
//! constructs it and hands clones to consumers (clones share state via
//! `Arc`). Consumers read [`CartSnapshot`] values and invoke the four
//! mutation operations; they never hold a reference into the live state, so
//! the store's ownership of the cart is absolute.
//!
//! Every effective mutation schedules a debounced persistence write of the
//! post-mutation state. The write is asynchronous and may be superseded by a
//! later mutation; only eventual consistency with the latest quiet state is
//! guaranteed.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use golden_fig_core::{Cart, CartLine, Price, Product, ProductId};

use crate::debounce::SaveDebouncer;
use crate::storage::{self, CartStorage};

/// Immutable read view of the cart for consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub lines: Vec<CartLine>,
    /// Sum of quantities across all lines.
    pub total_quantity: u32,
    /// Sum of (unit price x quantity) across all lines.
    pub subtotal: Price,
}

impl CartSnapshot {
    /// Alias for [`Self::total_quantity`], kept for consumers that speak in
    /// item counts.
    #[must_use]
    pub const fn item_count(&self) -> u32 {
        self.total_quantity
    }

    /// Alias for [`Self::subtotal`].
    #[must_use]
    pub const fn total_price(&self) -> Price {
        self.subtotal
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Session cart store with debounced persistence.
///
/// Cheaply cloneable; clones share the same cart state and debouncer.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    cart: Mutex<Cart>,
    debouncer: SaveDebouncer,
}

impl CartStore {
    /// Open a store against the given storage backend.
    ///
    /// Performs the one-time hydration read: valid persisted lines seed the
    /// cart, anything else (absent slot, unreadable slot, malformed payload)
    /// seeds it empty. Hydration folds lines through the normal add rules,
    /// so duplicated ids in stored data merge instead of violating the
    /// one-line-per-id invariant.
    #[must_use]
    pub fn open(storage: Arc<dyn CartStorage>, debounce_window: Duration) -> Self {
        let lines = storage::load(storage.as_ref());
        let cart = Cart::from_lines(lines);
        if !cart.is_empty() {
            tracing::debug!(
                lines = cart.lines().len(),
                items = cart.total_quantity(),
                "hydrated cart from storage"
            );
        }

        Self {
            inner: Arc::new(CartStoreInner {
                cart: Mutex::new(cart),
                debouncer: SaveDebouncer::new(storage, debounce_window),
            }),
        }
    }

    /// A store with no persistence at all, for ephemeral sessions.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self::open(
            Arc::new(storage::memory::MemoryStorage::new()),
            crate::debounce::DEFAULT_WINDOW,
        )
    }

    /// Current cart state as an immutable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        let cart = self.lock();
        CartSnapshot {
            lines: cart.lines().to_vec(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        }
    }

    /// Add `quantity` units of `product`; merges into an existing line for
    /// the same id. Invalid arguments (empty id, zero quantity) are ignored.
    pub fn add_item(&self, product: Product, quantity: u32) {
        self.mutate(|cart| cart.add_item(product, quantity));
    }

    /// Remove the line for `product_id`; no-op if absent.
    pub fn remove_item(&self, product_id: &ProductId) {
        self.mutate(|cart| cart.remove_item(product_id));
    }

    /// Set the exact quantity for `product_id`; 0 removes the line, unknown
    /// ids are a no-op.
    pub fn set_quantity(&self, product_id: &ProductId, quantity: u32) {
        self.mutate(|cart| cart.set_quantity(product_id, quantity));
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.mutate(Cart::clear);
    }

    /// Cancel any pending debounced write and persist the current state now.
    ///
    /// Consumers that are about to exit call this; everyone else relies on
    /// the debounced write.
    pub fn flush(&self) {
        let lines = self.lock().lines().to_vec();
        self.inner.debouncer.flush(&lines);
    }

    /// Apply a pure cart transition; schedule a debounced save only when it
    /// reports a change, so ignored mutations never touch storage.
    fn mutate(&self, f: impl FnOnce(&mut Cart) -> bool) {
        let changed = {
            let mut cart = self.lock();
            f(&mut cart).then(|| cart.lines().to_vec())
        };
        if let Some(lines) = changed {
            self.inner.debouncer.schedule(lines);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Cart> {
        self.inner
            .cart
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
