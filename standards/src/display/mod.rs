//! Display module
//!
//! Price, availability and sale-bubble presentation plus the catalog
//! ordering hook. Everything here produces strings or small descriptor
//! structs; the host template layer decides where they render.

mod availability;
mod ordering;
mod price;
mod sale_flash;

pub use availability::{Availability, availability};
pub use ordering::{OrderingArgs, SALE_PERCENTAGE_ORDERBY, catalog_ordering_args, sort_option};
pub use price::{
    PriceRange, format_price, sale_price_only_html, variable_price_html, variation_price_ranges,
};
pub use sale_flash::{SaleFlash, sale_flash};
