//! Cart state and its pure transition rules.
//!
//! [`Cart`] is the authoritative line-item sequence for a session. All four
//! mutations live here as pure state transitions with no I/O, so the whole
//! invariant surface (one line per product id, quantity >= 1, derived totals
//! recomputed from lines) is testable without a store, a timer, or storage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::{CurrencyCode, Price};
use crate::types::product::Product;

/// One (product snapshot, quantity) pair in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product snapshot taken when the line was first added.
    pub product: Product,
    /// Units of the product. Always >= 1; a would-be zero removes the line.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line. Quantity 0 is representable here so the persistence
    /// filter can reject it; [`Cart`] never stores one.
    #[must_use]
    pub const fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Line total: unit price extended over the quantity.
    #[must_use]
    pub fn total(&self) -> Price {
        self.product.price.extend(self.quantity)
    }
}

/// Ordered cart line sequence with derived aggregates.
///
/// Lines keep insertion order (first added first). Totals are pure functions
/// of the lines, recomputed on every read; there is no cached counter to
/// drift out of sync.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuild a cart from externally sourced lines (e.g., hydration from
    /// storage), folding each line through the add rules so the
    /// one-line-per-id invariant holds even if the input contains duplicates
    /// or invalid entries.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            cart.add_item(line.product, line.quantity);
        }
        cart
    }

    /// The current line sequence, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count: sum of quantities across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Total price: sum of (unit price x quantity) across all lines.
    ///
    /// The catalog is single-currency; the subtotal takes its currency from
    /// the first line and falls back to USD for an empty cart.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or(CurrencyCode::default(), |line| {
                line.product.price.currency_code
            });
        let amount: Decimal = self.lines.iter().map(|line| line.total().amount).sum();
        Price::new(amount, currency)
    }

    /// Add `quantity` units of `product`.
    ///
    /// If a line for the same product id exists its quantity is incremented;
    /// the stored product snapshot is deliberately NOT refreshed from the
    /// argument, so a price change in the catalog does not retroactively
    /// reprice an already-carted line. Otherwise a new line is appended.
    ///
    /// An empty product id or a zero quantity is ignored. Callers are trusted
    /// to pre-validate for user-facing messaging.
    ///
    /// Returns `true` if the cart changed.
    pub fn add_item(&mut self, product: Product, quantity: u32) -> bool {
        if product.id.is_empty() || quantity == 0 {
            return false;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine::new(product, quantity));
        }
        true
    }

    /// Remove the line for `product_id`, if any.
    ///
    /// Returns `true` if a line was removed; absent ids are a no-op, not an
    /// error.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        if product_id.is_empty() {
            return false;
        }
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id != *product_id);
        self.lines.len() != before
    }

    /// Replace the quantity of the line for `product_id` with the exact
    /// given value (not additive). Quantity 0 delegates to removal. Unknown
    /// ids are a no-op and never create a line.
    ///
    /// Returns `true` if the cart changed.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> bool {
        if product_id.is_empty() {
            return false;
        }
        if quantity == 0 {
            return self.remove_item(product_id);
        }
        match self
            .lines
            .iter_mut()
            .find(|line| line.product.id == *product_id)
        {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Empty the line sequence unconditionally.
    ///
    /// Returns `true` if the cart was non-empty.
    pub fn clear(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines.clear();
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: &str, price: &str) -> Product {
        Product::new(id, Price::new(price.parse().unwrap(), CurrencyCode::USD))
    }

    #[test]
    fn test_add_same_id_merges_quantity() {
        let mut cart = Cart::new();
        cart.add_item(product("A", "10"), 2);
        cart.add_item(product("A", "10"), 3);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().quantity, 5);
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.subtotal().amount, Decimal::from(50));
    }

    #[test]
    fn test_merge_keeps_original_snapshot() {
        let mut cart = Cart::new();
        cart.add_item(product("A", "10"), 1);
        // Catalog price changed between clicks; the carted snapshot wins.
        cart.add_item(product("A", "99"), 1);

        let line = cart.lines().first().unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.product.price.amount, Decimal::from(10));
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(product("A", "1"), 1);
        cart.add_item(product("B", "1"), 1);
        cart.add_item(product("A", "1"), 1);
        cart.add_item(product("C", "1"), 1);

        let ids: Vec<&str> = cart
            .lines()
            .iter()
            .map(|line| line.product.id.as_str())
            .collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_add_invalid_arguments_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.add_item(product("", "10"), 1));
        assert!(!cart.add_item(product("A", "10"), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_then_re_add_is_fresh_line() {
        let mut cart = Cart::new();
        cart.add_item(product("A", "10"), 5);
        assert!(cart.remove_item(&ProductId::new("A")));
        cart.add_item(product("A", "10"), 1);

        assert_eq!(cart.lines().first().unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product("A", "10"), 1);
        assert!(!cart.remove_item(&ProductId::new("Z")));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_remove_keeps_other_lines() {
        let mut cart = Cart::new();
        cart.add_item(product("A", "10"), 1);
        cart.add_item(product("B", "10"), 2);
        cart.remove_item(&ProductId::new("A"));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().product.id.as_str(), "B");
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_set_quantity_replaces_exactly() {
        let mut cart = Cart::new();
        cart.add_item(product("A", "10"), 2);
        assert!(cart.set_quantity(&ProductId::new("A"), 7));

        assert_eq!(cart.lines().first().unwrap().quantity, 7);
        assert_eq!(cart.total_quantity(), 7);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(product("A", "10"), 2);
        assert!(cart.set_quantity(&ProductId::new("A"), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_id_never_creates_line() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(&ProductId::new("A"), 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_resets_totals() {
        let mut cart = Cart::new();
        cart.add_item(product("A", "10"), 2);
        cart.add_item(product("B", "5"), 4);
        assert!(cart.clear());

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.subtotal().amount, Decimal::ZERO);
        // Clearing an already-empty cart reports no change.
        assert!(!cart.clear());
    }

    #[test]
    fn test_totals_track_every_reachable_state() {
        let mut cart = Cart::new();
        cart.add_item(product("A", "2.50"), 4);
        cart.add_item(product("B", "1.25"), 2);
        cart.set_quantity(&ProductId::new("B"), 6);
        cart.remove_item(&ProductId::new("A"));

        assert_eq!(cart.total_quantity(), 6);
        assert_eq!(cart.subtotal().amount, "7.50".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_from_lines_merges_duplicate_ids() {
        let cart = Cart::from_lines(vec![
            CartLine::new(product("A", "10"), 2),
            CartLine::new(product("B", "1"), 1),
            CartLine::new(product("A", "10"), 3),
        ]);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines().first().unwrap().quantity, 5);
    }
}
