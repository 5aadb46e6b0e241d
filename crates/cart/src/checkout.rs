//! Simulated checkout flow.
//!
//! There is no order service behind this module; [`submit_order`] is the
//! stub boundary where a real integration would submit the order over the
//! network. It validates the minimal order details, captures the cart total
//! into a confirmation, then clears the cart and flushes the now-empty state
//! so a reload does not resurrect purchased items.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use golden_fig_core::Price;

use crate::store::CartStore;

/// Order details collected from the checkout form.
#[derive(Debug, Clone, Default)]
pub struct OrderDetails {
    /// Contact email for the confirmation.
    pub email: String,
    /// Shipping recipient name.
    pub ship_to: String,
}

/// Receipt for a successfully submitted (simulated) order.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    /// Locally generated order reference.
    pub order_id: Uuid,
    /// Submission time.
    pub placed_at: DateTime<Utc>,
    /// Cart total captured at submission.
    pub total: Price,
    /// Number of items in the order.
    pub item_count: u32,
}

/// Checkout validation failures.
///
/// Unlike cart mutations, checkout errors are surfaced: the consumer shows
/// them on the form instead of silently dropping the submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Submit the cart as a simulated order.
///
/// On success the cart is cleared and the cleared state is flushed to
/// storage immediately (not debounced).
///
/// # Errors
///
/// Returns [`CheckoutError`] if the cart is empty or a required detail is
/// missing; the cart is left untouched in that case.
pub fn submit_order(
    store: &CartStore,
    details: &OrderDetails,
) -> Result<OrderConfirmation, CheckoutError> {
    if details.email.trim().is_empty() {
        return Err(CheckoutError::MissingField("email"));
    }
    if details.ship_to.trim().is_empty() {
        return Err(CheckoutError::MissingField("ship_to"));
    }

    let snapshot = store.snapshot();
    if snapshot.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let confirmation = OrderConfirmation {
        order_id: Uuid::new_v4(),
        placed_at: Utc::now(),
        total: snapshot.subtotal,
        item_count: snapshot.total_quantity,
    };

    store.clear();
    store.flush();
    tracing::info!(
        order_id = %confirmation.order_id,
        items = confirmation.item_count,
        "order submitted (simulated)"
    );

    Ok(confirmation)
}
