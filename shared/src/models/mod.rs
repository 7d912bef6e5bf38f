//! Data models
//!
//! Platform-owned entities as the engine sees them. The host storefront
//! persists these; the engine only reads them through the catalog traits
//! and writes back through narrow operations (category sets, metadata).

pub mod order_item;
pub mod product;
pub mod term;

// Re-exports
pub use order_item::*;
pub use product::*;
pub use term::*;
