//! Product metadata keys
//!
//! All custom keys are namespaced with the `_shop-standards_` prefix.
//! `_sale_percentage` and `_delivery_time` are shared with the host
//! platform and other extensions, so they stay unprefixed.

/// Global Trade Item Number.
pub const GTIN: &str = "_shop-standards_gtin";

/// ERP / inventory system identifier.
pub const ERP_INVENTORY_ID: &str = "_shop-standards_erp_inventory_id";

/// Internal product notes (back office only).
pub const PRODUCT_NOTES: &str = "_shop-standards_product_notes";

/// Custom label shown next to the price when the sale price is displayed
/// as the regular price.
pub const PRICE_LABEL: &str = "_shop-standards_price_label";

/// Flag: display the sale price as the normal price.
pub const SHOW_SALE_PRICE_ONLY: &str = "_shop-standards_show_sale_price_only";

/// Flag: hide the add-to-cart button for this product.
pub const HIDE_ADD_TO_CART_BUTTON: &str = "_shop-standards_hide_add_to_cart_button";

/// Flag: product participates in price comparison feeds.
pub const PRICE_COMPARISON_FOCUS: &str = "_shop-standards_price_comparison_focus";

/// Flag: suppress the sale percentage bubble.
pub const HIDE_SALE_PERCENTAGE_LABEL: &str = "_shop-standards_hide_sale_percentage_flash_label";

/// Flag: variation has insufficient images (picked up by feed exports).
pub const INSUFFICIENT_VARIANT_IMAGES: &str = "_shop-standards_insufficient_variant_images";

/// Computed discount percentage, stored as an integer string.
pub const SALE_PERCENTAGE: &str = "_sale_percentage";

/// Delivery-time taxonomy term id assigned to the product.
pub const DELIVERY_TIME: &str = "_delivery_time";
