//! Golden Fig Core - Shared domain types.
//!
//! This crate provides the types shared by all Golden Fig components:
//! - `cart` - Cart store and persistence engine
//! - `cli` - Command-line cart consumer
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no storage access, no timers. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, product snapshots, and the cart state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
