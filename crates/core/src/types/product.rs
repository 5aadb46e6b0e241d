//! Product snapshot carried inside cart lines.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// A point-in-time copy of a catalog product.
///
/// The catalog collaborator owns the authoritative product data; the cart
/// only stores a snapshot taken at add time. Everything except the id is
/// optional on decode: the cart validates presence of an identifier and
/// nothing else, so a stored snapshot from an older catalog shape still
/// hydrates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier. The only field the cart requires.
    pub id: ProductId,
    /// Display name.
    #[serde(default)]
    pub title: String,
    /// Catalog category (e.g., "pantry", "produce").
    #[serde(default)]
    pub category: Option<String>,
    /// Unit price at snapshot time.
    #[serde(default)]
    pub price: Price,
    /// Image reference for display surfaces.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// Create a snapshot with just an id and price, for callers that do not
    /// care about display fields.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, price: Price) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            category: None,
            price,
            image_url: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_tolerates_missing_display_fields() {
        let product: Product = serde_json::from_str(r#"{"id":"fig-1"}"#).unwrap();
        assert_eq!(product.id.as_str(), "fig-1");
        assert!(product.title.is_empty());
        assert!(product.category.is_none());
        assert_eq!(product.price, Price::default());
        assert!(product.image_url.is_none());
    }

    #[test]
    fn test_decode_without_id_fails() {
        let result = serde_json::from_str::<Product>(r#"{"title":"Mission Figs"}"#);
        assert!(result.is_err());
    }
}
