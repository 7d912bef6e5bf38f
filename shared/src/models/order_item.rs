//! Order Item Model
//!
//! Used only at display time: cart lines and order-email item rendering.

use serde::{Deserialize, Serialize};

use super::product::ProductId;
use super::term::TermId;

/// A single label/value row in a cart line or order-email item list.
///
/// Separator rows carry an empty label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetaEntry {
    pub label: String,
    pub value: String,
}

impl ItemMetaEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Separator row (empty label, empty value).
    pub fn separator() -> Self {
        Self::new("", "")
    }
}

/// Order line referencing a product or one of its variations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub variation_id: Option<ProductId>,
    pub quantity: i64,
    /// Formatted metadata attached by the platform (variation selections etc.)
    pub meta: Vec<ItemMetaEntry>,
    /// Delivery-time term recorded on the line at order time
    pub delivery_time_term: Option<TermId>,
}

impl OrderItem {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id,
            variation_id: None,
            quantity,
            meta: Vec::new(),
            delivery_time_term: None,
        }
    }

    /// The product the line should be displayed with: the variation when
    /// one was ordered, otherwise the product itself.
    pub fn display_product_id(&self) -> ProductId {
        self.variation_id.unwrap_or(self.product_id)
    }
}
