use tracing::{debug, warn};

use shared::StandardsResult;
use shared::models::ProductId;

use crate::catalog::{MetaStore, ProductCatalog};
use crate::settings::StandardsSettings;

use super::is_sale_eligible;

/// Result of one category sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Sale category added to the product.
    Added,
    /// Sale category removed from the product.
    Removed,
    /// Membership already matched eligibility.
    Unchanged,
    /// Missing product or incomplete configuration, nothing evaluated.
    Skipped,
}

/// Keeps a product's sale-category membership in line with its eligibility.
///
/// Run on every product update. Other category memberships are never
/// touched and no write happens when the membership already matches.
#[derive(Debug, Clone)]
pub struct SaleSync {
    settings: StandardsSettings,
}

impl SaleSync {
    pub fn new(settings: StandardsSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &StandardsSettings {
        &self.settings
    }

    pub fn sync<C>(&self, catalog: &C, product_id: ProductId) -> StandardsResult<SyncOutcome>
    where
        C: ProductCatalog + MetaStore,
    {
        if !self.settings.auto_sale_assignment_enabled {
            return Ok(SyncOutcome::Skipped);
        }
        let Some(sale_category) = self.settings.sale_category else {
            return Ok(SyncOutcome::Skipped);
        };
        let Some(product) = catalog.product(product_id)? else {
            warn!(%product_id, "sale category sync for unknown product");
            return Ok(SyncOutcome::Skipped);
        };

        // Variable products qualify when any variation does.
        let eligible = if product.is_variable() {
            let mut any = false;
            for variation_id in &product.variation_ids {
                let Some(variation) = catalog.product(*variation_id)? else {
                    continue;
                };
                if is_sale_eligible(catalog, &self.settings, &variation)? {
                    any = true;
                    break;
                }
            }
            any
        } else {
            is_sale_eligible(catalog, &self.settings, &product)?
        };

        let currently_member = product.category_ids.contains(&sale_category);
        if eligible == currently_member {
            return Ok(SyncOutcome::Unchanged);
        }

        let mut categories = product.category_ids.clone();
        let outcome = if eligible {
            categories.push(sale_category);
            SyncOutcome::Added
        } else {
            categories.retain(|&c| c != sale_category);
            SyncOutcome::Removed
        };
        catalog.set_product_categories(product_id, categories)?;
        debug!(%product_id, ?outcome, "sale category membership updated");
        Ok(outcome)
    }
}
