use shared::models::Product;
use shared::{StandardsResult, meta_keys};

use crate::catalog::MetaStore;
use crate::settings::StandardsSettings;

/// Discount bubble rendered over a product image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleFlash {
    pub percentage: u32,
}

impl SaleFlash {
    pub fn html(&self) -> String {
        format!(
            "<span class=\"onsale\" data-sale-percentage=\"{p}\">-{p}%</span>",
            p = self.percentage
        )
    }
}

/// Sale bubble for a product, `None` when it should be suppressed.
///
/// The percentage comes from the parent for variations. Catalog views only
/// show the bubble from the configured minimum upward; the single product
/// view always shows it. A per-product hide flag suppresses it everywhere.
pub fn sale_flash<M: MetaStore>(
    store: &M,
    settings: &StandardsSettings,
    product: &Product,
    single_view: bool,
) -> StandardsResult<Option<SaleFlash>> {
    let percentage_owner = if product.is_variation() {
        product.parent_id.unwrap_or(product.id)
    } else {
        product.id
    };
    let percentage: u32 = store
        .meta(percentage_owner, meta_keys::SALE_PERCENTAGE)?
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map(|v| v.unsigned_abs() as u32)
        .unwrap_or(0);

    if store.meta_flag(product.id, meta_keys::HIDE_SALE_PERCENTAGE_LABEL)? {
        return Ok(None);
    }
    if single_view || percentage >= settings.minimum_sale_percentage {
        Ok(Some(SaleFlash { percentage }))
    } else {
        Ok(None)
    }
}
