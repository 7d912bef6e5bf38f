use shared::models::{Product, ProductId, TermId};
use shared::{StandardsResult, meta_keys};

use crate::catalog::MetaStore;
use crate::settings::StandardsSettings;

/// Whether a product qualifies for the sale category.
///
/// All of the following must hold:
///
/// 1. the product is in stock,
/// 2. its delivery time is one of the configured eligible terms,
/// 3. it is on sale,
/// 4. the sale percentage label is not hidden,
/// 5. the stored sale percentage meets the configured minimum,
/// 6. "show sale price as regular price" is off.
///
/// Variations read the delivery time from their own metadata but the flag
/// and percentage metas from the parent product.
pub fn is_sale_eligible<M: MetaStore>(
    store: &M,
    settings: &StandardsSettings,
    product: &Product,
) -> StandardsResult<bool> {
    let flag_owner = flag_owner(product);

    if !product.is_in_stock() {
        return Ok(false);
    }

    let delivery_time = store
        .meta(product.id, meta_keys::DELIVERY_TIME)?
        .and_then(|v| v.trim().parse().ok())
        .map(TermId);
    let has_eligible_delivery_time = delivery_time
        .map(|t| settings.eligible_delivery_times.contains(&t))
        .unwrap_or(false);
    if !has_eligible_delivery_time {
        return Ok(false);
    }

    if !product.is_on_sale() {
        return Ok(false);
    }

    if store.meta_flag(flag_owner, meta_keys::HIDE_SALE_PERCENTAGE_LABEL)? {
        return Ok(false);
    }

    let stored_percentage: u32 = store
        .meta(flag_owner, meta_keys::SALE_PERCENTAGE)?
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0);
    if stored_percentage < settings.minimum_sale_percentage {
        return Ok(false);
    }

    if store.meta_flag(flag_owner, meta_keys::SHOW_SALE_PRICE_ONLY)? {
        return Ok(false);
    }

    Ok(true)
}

fn flag_owner(product: &Product) -> ProductId {
    if product.is_variation() {
        product.parent_id.unwrap_or(product.id)
    } else {
        product.id
    }
}
