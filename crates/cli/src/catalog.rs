//! Seed catalog.
//!
//! The catalog collaborator that supplies product snapshots to the cart. In
//! the deployed storefront this data comes from the product listing; the CLI
//! ships a static seed so the cart can be exercised end to end. The cart
//! never validates price or category correctness, only that an id exists.

use golden_fig_core::{CurrencyCode, Price, Product, ProductId};
use rust_decimal::Decimal;

fn seed(id: &str, title: &str, category: &str, cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        category: Some(category.to_owned()),
        price: Price::new(Decimal::new(cents, 2), CurrencyCode::USD),
        image_url: Some(format!("https://cdn.goldenfig.shop/products/{id}.jpg")),
    }
}

/// All catalog products, in display order.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        seed("fig-jam", "Golden Fig Jam", "pantry", 899),
        seed("mission-figs", "Dried Mission Figs", "pantry", 1250),
        seed("fig-vinegar", "Fig Balsamic Vinegar", "pantry", 1599),
        seed("fresh-figs", "Fresh Figs (1 lb)", "produce", 649),
        seed("fig-bar", "Fig & Almond Bar", "snacks", 349),
        seed("fig-tea", "Fig Leaf Tea", "beverages", 1099),
    ]
}

/// Look up a catalog product by id.
#[must_use]
pub fn find(product_id: &str) -> Option<Product> {
    products()
        .into_iter()
        .find(|product| product.id.as_str() == product_id)
}
