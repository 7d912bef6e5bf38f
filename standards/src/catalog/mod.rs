//! Catalog capability traits
//!
//! The engine never talks to the platform's storage directly. Hosts adapt
//! their product store, metadata table and options table to these three
//! traits; [`MemoryCatalog`] implements all of them for tests and demos.

mod memory;

pub use memory::MemoryCatalog;

use shared::StandardsResult;
use shared::models::{Product, ProductId, TaxonomyTerm, Taxonomy, TermId};

/// Read access to products and taxonomy, plus the one structural write the
/// engine performs: replacing a product's category membership set.
pub trait ProductCatalog {
    /// Look up a product (or variation) by id. `Ok(None)` when absent.
    fn product(&self, id: ProductId) -> StandardsResult<Option<Product>>;

    /// Replace the category term set of a product.
    fn set_product_categories(
        &self,
        id: ProductId,
        categories: Vec<TermId>,
    ) -> StandardsResult<()>;

    /// All terms of a taxonomy, for settings option lists and term lookups.
    fn terms(&self, taxonomy: Taxonomy) -> StandardsResult<Vec<TaxonomyTerm>>;

    /// Resolve one term by id.
    fn term(&self, id: TermId) -> StandardsResult<Option<TaxonomyTerm>> {
        for taxonomy in [Taxonomy::Category, Taxonomy::Brand, Taxonomy::DeliveryTime] {
            if let Some(term) = self.terms(taxonomy)?.into_iter().find(|t| t.id == id) {
                return Ok(Some(term));
            }
        }
        Ok(None)
    }
}

/// Per-product key/value metadata, stored as strings.
///
/// Boolean values use the platform's `"yes"` / `"no"` convention, see
/// [`shared::flags`].
pub trait MetaStore {
    fn meta(&self, product: ProductId, key: &str) -> StandardsResult<Option<String>>;

    fn set_meta(&self, product: ProductId, key: &str, value: &str) -> StandardsResult<()>;

    fn delete_meta(&self, product: ProductId, key: &str) -> StandardsResult<()>;

    /// Flag read helper: missing meta counts as `false`.
    fn meta_flag(&self, product: ProductId, key: &str) -> StandardsResult<bool> {
        Ok(self
            .meta(product, key)?
            .map(|v| shared::flags::string_to_bool(&v))
            .unwrap_or(false))
    }
}

/// Global key/value option storage.
pub trait OptionStore {
    fn option(&self, key: &str) -> StandardsResult<Option<String>>;

    fn set_option(&self, key: &str, value: &str) -> StandardsResult<()>;
}
