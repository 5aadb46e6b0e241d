//! Newtype ID for type-safe product references.
//!
//! Catalog identifiers are opaque strings assigned by the catalog
//! collaborator; the cart never parses or interprets them, it only compares
//! them. Wrapping them in a newtype keeps product ids from being mixed up
//! with other string data (image URLs, category names) at compile time.

use serde::{Deserialize, Serialize};

/// Type-safe identifier for a catalog product.
///
/// Serializes transparently as the underlying string, so persisted cart
/// snapshots carry plain id strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is the empty string.
    ///
    /// The cart store treats an empty id as an invalid argument and ignores
    /// the mutation rather than erroring.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_round_trips_as_plain_string() {
        let id = ProductId::new("fig-0042");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"fig-0042\"");

        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_product_id_empty() {
        assert!(ProductId::default().is_empty());
        assert!(ProductId::new("").is_empty());
        assert!(!ProductId::new("a").is_empty());
    }
}
