//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::term::TermId;

/// Product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Simple,
    Variable,
    Variation,
    External,
}

/// Stock status as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
    OnBackorder,
}

/// Physical dimensions in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: Decimal,
    pub width: Decimal,
    pub height: Decimal,
}

impl Dimensions {
    /// Render as "L × W × H cm"
    pub fn format(&self) -> String {
        format!("{} × {} × {} cm", self.length, self.width, self.height)
    }
}

/// Visible product attribute (taxonomy-backed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttribute {
    /// Attribute label, e.g. "Color"
    pub name: String,
    /// Assigned term names, e.g. ["Red", "Blue"]
    pub values: Vec<String>,
    pub visible: bool,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub kind: ProductKind,
    /// Parent product (set for variations)
    pub parent_id: Option<ProductId>,
    pub sku: Option<String>,
    pub regular_price: Option<Decimal>,
    pub sale_price: Option<Decimal>,
    pub stock_status: StockStatus,
    pub stock_quantity: Option<i64>,
    /// Per-product low-stock threshold; `None` falls back to the global option
    pub low_stock_amount: Option<i64>,
    pub backorders_allowed: bool,
    pub weight_kg: Option<Decimal>,
    pub dimensions_cm: Option<Dimensions>,
    /// Category term memberships
    pub category_ids: Vec<TermId>,
    pub attributes: Vec<ProductAttribute>,
    /// Attribute names used for variation selection on variable products
    pub variation_attribute_names: Vec<String>,
    /// Children of a variable product
    pub variation_ids: Vec<ProductId>,
}

impl Product {
    /// Minimal product for a given id and kind; everything else empty.
    pub fn new(id: ProductId, kind: ProductKind) -> Self {
        Self {
            id,
            kind,
            parent_id: None,
            sku: None,
            regular_price: None,
            sale_price: None,
            stock_status: StockStatus::InStock,
            stock_quantity: None,
            low_stock_amount: None,
            backorders_allowed: false,
            weight_kg: None,
            dimensions_cm: None,
            category_ids: Vec::new(),
            attributes: Vec::new(),
            variation_attribute_names: Vec::new(),
            variation_ids: Vec::new(),
        }
    }

    /// A product counts as purchasable stock-wise when in stock or when
    /// backorders are allowed.
    pub fn is_in_stock(&self) -> bool {
        match self.stock_status {
            StockStatus::InStock => true,
            StockStatus::OnBackorder => true,
            StockStatus::OutOfStock => self.backorders_allowed,
        }
    }

    /// On sale: a sale price exists and undercuts the regular price.
    pub fn is_on_sale(&self) -> bool {
        match (self.sale_price, self.regular_price) {
            (Some(sale), Some(regular)) => sale < regular,
            _ => false,
        }
    }

    pub fn is_variation(&self) -> bool {
        self.kind == ProductKind::Variation
    }

    pub fn is_variable(&self) -> bool {
        self.kind == ProductKind::Variable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(v: i64) -> Decimal {
        Decimal::new(v, 0)
    }

    #[test]
    fn test_on_sale_requires_lower_sale_price() {
        let mut p = Product::new(ProductId(1), ProductKind::Simple);
        assert!(!p.is_on_sale());

        p.regular_price = Some(dec(100));
        p.sale_price = Some(dec(80));
        assert!(p.is_on_sale());

        p.sale_price = Some(dec(100));
        assert!(!p.is_on_sale(), "equal prices are not a sale");

        p.sale_price = Some(dec(120));
        assert!(!p.is_on_sale(), "sale above regular is not a sale");
    }

    #[test]
    fn test_in_stock_with_backorders() {
        let mut p = Product::new(ProductId(1), ProductKind::Simple);
        p.stock_status = StockStatus::OutOfStock;
        assert!(!p.is_in_stock());

        p.backorders_allowed = true;
        assert!(p.is_in_stock());

        p.stock_status = StockStatus::OnBackorder;
        assert!(p.is_in_stock());
    }

    #[test]
    fn test_dimensions_format() {
        let d = Dimensions {
            length: dec(20),
            width: dec(10),
            height: dec(5),
        };
        assert_eq!(d.format(), "20 × 10 × 5 cm");
    }
}
