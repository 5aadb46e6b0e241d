//! Core types for Golden Fig.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{Cart, CartLine};
pub use id::ProductId;
pub use price::{CurrencyCode, Price};
pub use product::Product;
