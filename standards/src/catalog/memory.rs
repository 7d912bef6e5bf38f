//! In-memory catalog
//!
//! Backs all three capability traits with `parking_lot`-guarded maps.
//! Primarily a test fixture, also usable for demos and dry runs.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use shared::StandardsResult;
use shared::models::{Product, ProductId, TaxonomyTerm, Taxonomy, TermId};

use super::{MetaStore, OptionStore, ProductCatalog};

/// In-memory implementation of the catalog traits.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
    terms: Arc<RwLock<Vec<TaxonomyTerm>>>,
    meta: Arc<RwLock<HashMap<(ProductId, String), String>>>,
    options: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product (builder style).
    pub fn with_product(self, product: Product) -> Self {
        self.insert_product(product);
        self
    }

    /// Insert a taxonomy term (builder style).
    pub fn with_term(self, term: TaxonomyTerm) -> Self {
        self.terms.write().push(term);
        self
    }

    /// Set an option value (builder style).
    pub fn with_option(self, key: &str, value: &str) -> Self {
        self.options.write().insert(key.to_string(), value.to_string());
        self
    }

    /// Set a product meta value (builder style).
    pub fn with_meta(self, product: ProductId, key: &str, value: &str) -> Self {
        self.meta
            .write()
            .insert((product, key.to_string()), value.to_string());
        self
    }

    pub fn insert_product(&self, product: Product) {
        self.products.write().insert(product.id, product);
    }

    /// Direct read-back for assertions.
    pub fn category_ids(&self, id: ProductId) -> Vec<TermId> {
        self.products
            .read()
            .get(&id)
            .map(|p| p.category_ids.clone())
            .unwrap_or_default()
    }
}

impl ProductCatalog for MemoryCatalog {
    fn product(&self, id: ProductId) -> StandardsResult<Option<Product>> {
        Ok(self.products.read().get(&id).cloned())
    }

    fn set_product_categories(
        &self,
        id: ProductId,
        categories: Vec<TermId>,
    ) -> StandardsResult<()> {
        let mut products = self.products.write();
        match products.get_mut(&id) {
            Some(product) => {
                product.category_ids = categories;
                Ok(())
            }
            None => Err(shared::StandardsError::not_found(format!("product {id}"))),
        }
    }

    fn terms(&self, taxonomy: Taxonomy) -> StandardsResult<Vec<TaxonomyTerm>> {
        Ok(self
            .terms
            .read()
            .iter()
            .filter(|t| t.taxonomy == taxonomy)
            .cloned()
            .collect())
    }
}

impl MetaStore for MemoryCatalog {
    fn meta(&self, product: ProductId, key: &str) -> StandardsResult<Option<String>> {
        Ok(self.meta.read().get(&(product, key.to_string())).cloned())
    }

    fn set_meta(&self, product: ProductId, key: &str, value: &str) -> StandardsResult<()> {
        self.meta
            .write()
            .insert((product, key.to_string()), value.to_string());
        Ok(())
    }

    fn delete_meta(&self, product: ProductId, key: &str) -> StandardsResult<()> {
        self.meta.write().remove(&(product, key.to_string()));
        Ok(())
    }
}

impl OptionStore for MemoryCatalog {
    fn option(&self, key: &str) -> StandardsResult<Option<String>> {
        Ok(self.options.read().get(key).cloned())
    }

    fn set_option(&self, key: &str, value: &str) -> StandardsResult<()> {
        self.options.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
