//! Shop standards engine
//!
//! Sale-eligibility and display logic for a storefront platform:
//! automatic sale-category assignment, price and stock display formatting,
//! cart/order-item metadata composition, checkout postcode validation and
//! the typed settings layer backing all of it.
//!
//! The platform owns every entity; the engine reaches its data through the
//! capability traits in [`catalog`] and stays fully synchronous.

pub mod catalog;
pub mod checkout;
pub mod display;
pub mod items;
pub mod meta_fields;
pub mod sale;
pub mod settings;

// Re-exports
pub use catalog::{MemoryCatalog, MetaStore, OptionStore, ProductCatalog};
pub use settings::StandardsSettings;
