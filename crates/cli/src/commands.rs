//! Cart command implementations.
//!
//! Every command follows the same session shape: open the store (hydrating
//! from the cart file), apply one consumer-contract operation, flush, and
//! render the resulting snapshot. Invalid mutation arguments are not errors
//! here either - the store ignores them - but an unknown catalog id is a CLI
//! error because the user asked for something that does not exist.

use std::sync::Arc;

use golden_fig_cart::config::{CartConfig, ConfigError};
use golden_fig_cart::storage::file::JsonFileStorage;
use golden_fig_cart::{CartSnapshot, CartStore, CheckoutError, OrderDetails, submit_order};
use golden_fig_core::ProductId;
use thiserror::Error;

use crate::catalog;

/// Errors that can occur while running a cart command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Checkout submission was rejected.
    #[error("checkout failed: {0}")]
    Checkout(#[from] CheckoutError),

    /// The requested id is not in the catalog.
    #[error("unknown product: {0}. Run `gf-cart catalog` to list products")]
    UnknownProduct(String),
}

fn open_store() -> Result<CartStore, CliError> {
    let config = CartConfig::from_env()?;
    let storage = Arc::new(JsonFileStorage::new(&config.storage_path));
    Ok(CartStore::open(storage, config.debounce_window))
}

#[allow(clippy::print_stdout)]
fn render(snapshot: &CartSnapshot) {
    if snapshot.is_empty() {
        println!("Cart is empty.");
        return;
    }
    for line in &snapshot.lines {
        println!(
            "{:>3} x {:<28} {:>8}  (unit {})",
            line.quantity,
            line.product.title,
            line.total().display(),
            line.product.price.display(),
        );
    }
    println!(
        "{} items, subtotal {}",
        snapshot.total_quantity,
        snapshot.subtotal.display()
    );
}

/// List the seed catalog.
#[allow(clippy::print_stdout)]
pub fn catalog() -> Result<(), CliError> {
    for product in catalog::products() {
        println!(
            "{:<14} {:<28} {:>8}  [{}]",
            product.id,
            product.title,
            product.price.display(),
            product.category.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}

/// Show the current cart.
pub fn show() -> Result<(), CliError> {
    let store = open_store()?;
    render(&store.snapshot());
    Ok(())
}

/// Add `quantity` units of a catalog product.
pub fn add(product_id: &str, quantity: u32) -> Result<(), CliError> {
    let product = catalog::find(product_id)
        .ok_or_else(|| CliError::UnknownProduct(product_id.to_owned()))?;

    let store = open_store()?;
    store.add_item(product, quantity);
    store.flush();
    render(&store.snapshot());
    Ok(())
}

/// Remove a line from the cart.
pub fn remove(product_id: &str) -> Result<(), CliError> {
    let store = open_store()?;
    store.remove_item(&ProductId::new(product_id));
    store.flush();
    render(&store.snapshot());
    Ok(())
}

/// Set the exact quantity of a line; 0 removes it.
pub fn set(product_id: &str, quantity: u32) -> Result<(), CliError> {
    let store = open_store()?;
    store.set_quantity(&ProductId::new(product_id), quantity);
    store.flush();
    render(&store.snapshot());
    Ok(())
}

/// Empty the cart.
pub fn clear() -> Result<(), CliError> {
    let store = open_store()?;
    store.clear();
    store.flush();
    render(&store.snapshot());
    Ok(())
}

/// Submit the cart as a simulated order.
#[allow(clippy::print_stdout)]
pub fn checkout(email: String, ship_to: String) -> Result<(), CliError> {
    let store = open_store()?;
    let confirmation = submit_order(&store, &OrderDetails { email, ship_to })?;

    println!(
        "Order {} placed at {}: {} items, total {}",
        confirmation.order_id,
        confirmation.placed_at.format("%Y-%m-%d %H:%M UTC"),
        confirmation.item_count,
        confirmation.total.display(),
    );
    Ok(())
}
