//! Defensive decoding of persisted cart data.
//!
//! The persisted slot is external, untrusted input: it may hold a stale
//! shape from an older release, a truncated write, or hand-edited garbage.
//! [`filter_lines`] is the structural filter between "whatever was stored"
//! and well-formed [`CartLine`]s: entries that are not objects, lack a
//! `product` object, or carry a non-positive quantity are silently dropped.
//! The function is total - it never errors - and pure, so it is tested here
//! without any storage backend.

use golden_fig_core::{CartLine, Product};
use serde_json::Value;

/// Keep only structurally valid cart line entries from a decoded JSON value.
///
/// A valid entry is an object with:
/// - a `product` value that is itself an object carrying an `id`, and
/// - a `quantity` that is an integer strictly greater than zero.
///
/// Anything else - including a non-array top-level value - yields no lines
/// rather than an error.
#[must_use]
pub fn filter_lines(value: Value) -> Vec<CartLine> {
    let Value::Array(entries) = value else {
        tracing::warn!("persisted cart is not an array, discarding");
        return Vec::new();
    };

    entries.into_iter().filter_map(decode_entry).collect()
}

fn decode_entry(entry: Value) -> Option<CartLine> {
    let Value::Object(fields) = entry else {
        tracing::debug!("dropping non-object cart entry");
        return None;
    };

    let quantity = fields
        .get("quantity")
        .and_then(Value::as_u64)
        .filter(|&q| q > 0)
        .and_then(|q| u32::try_from(q).ok())?;

    let product_value = fields.get("product").filter(|v| v.is_object())?.clone();
    let product: Product = match serde_json::from_value(product_value) {
        Ok(product) => product,
        Err(e) => {
            tracing::debug!("dropping cart entry with malformed product: {e}");
            return None;
        }
    };
    if product.id.is_empty() {
        tracing::debug!("dropping cart entry with empty product id");
        return None;
    }

    Some(CartLine::new(product, quantity))
}
