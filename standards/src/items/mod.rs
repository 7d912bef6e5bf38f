//! Items module
//!
//! Composes the metadata rows shown on cart lines and order-email items:
//! basic product data (SKU/ERP id, dimensions, weight), visible attributes
//! and the delivery-time entry, with duplicate filtering.

mod attributes;
mod cart_line;
mod order_email;
mod product_data;

pub use attributes::product_attributes;
pub use cart_line::compose_cart_item_data;
pub use order_email::{
    DELIVERY_TIME_LABEL, EmailItemArgs, FormatArgs, email_order_items_args, email_styles,
    format_item_meta,
};
pub use product_data::product_data;
