//! Taxonomy Term Model

use serde::{Deserialize, Serialize};

/// Taxonomy term identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(pub i64);

impl std::fmt::Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Taxonomies the engine cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Taxonomy {
    /// Product category
    Category,
    /// Product brand
    Brand,
    /// Delivery-time classification
    DeliveryTime,
}

/// Taxonomy term entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    pub id: TermId,
    pub taxonomy: Taxonomy,
    pub name: String,
}

impl TaxonomyTerm {
    pub fn new(id: TermId, taxonomy: Taxonomy, name: impl Into<String>) -> Self {
        Self {
            id,
            taxonomy,
            name: name.into(),
        }
    }
}
