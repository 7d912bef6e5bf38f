use shared::StandardsResult;
use shared::models::Product;

use crate::catalog::ProductCatalog;
use crate::settings::StandardsSettings;

/// Stock message plus the CSS class templates key off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub message: String,
    pub css_class: String,
}

impl Availability {
    pub fn new(message: impl Into<String>, css_class: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            css_class: css_class.into(),
        }
    }
}

/// Availability text for an in-stock product.
///
/// When the remaining quantity is at or below the effective low-stock
/// threshold and the stock display format asks for counts, the message
/// becomes `"Only N in stock"`. The threshold resolves per product, with
/// variations falling back to their parent and finally to the store-wide
/// option. Out-of-stock products keep whatever the host passed in.
pub fn availability<C: ProductCatalog>(
    catalog: &C,
    settings: &StandardsSettings,
    product: &Product,
    current: Availability,
) -> StandardsResult<Availability> {
    if !product.is_in_stock() {
        return Ok(current);
    }

    let threshold = low_stock_threshold(catalog, settings, product)?;
    let quantity = product.stock_quantity.unwrap_or(0);

    let low = settings.show_low_stock_count
        && quantity > 0
        && threshold.map(|t| quantity <= t).unwrap_or(false);
    if low {
        Ok(Availability::new(
            format!("Only {quantity} in stock"),
            "low-stock",
        ))
    } else {
        Ok(Availability::new("In stock", "in-stock"))
    }
}

fn low_stock_threshold<C: ProductCatalog>(
    catalog: &C,
    settings: &StandardsSettings,
    product: &Product,
) -> StandardsResult<Option<i64>> {
    let own = if product.is_variation() {
        match product.parent_id {
            Some(parent_id) => catalog.product(parent_id)?.and_then(|p| p.low_stock_amount),
            None => product.low_stock_amount,
        }
    } else {
        product.low_stock_amount
    };
    Ok(own.or(settings.global_low_stock_amount))
}
