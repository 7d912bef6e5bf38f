use shared::StandardsResult;
use shared::models::{ItemMetaEntry, Product};

use crate::catalog::ProductCatalog;

/// Visible attribute rows of a product.
///
/// Variations show their parent's attributes. Attributes used for
/// variation selection are skipped, their chosen values already appear in
/// the line's own metadata.
pub fn product_attributes<C: ProductCatalog>(
    catalog: &C,
    product: &Product,
) -> StandardsResult<Vec<ItemMetaEntry>> {
    let resolved;
    let product = match product.parent_id {
        Some(parent_id) => match catalog.product(parent_id)? {
            Some(parent) => {
                resolved = parent;
                &resolved
            }
            None => product,
        },
        None => product,
    };

    let mut rows = Vec::new();
    for attribute in &product.attributes {
        if product
            .variation_attribute_names
            .iter()
            .any(|n| n == &attribute.name)
        {
            continue;
        }
        if !attribute.visible || attribute.values.is_empty() {
            continue;
        }
        rows.push(ItemMetaEntry::new(
            attribute.name.clone(),
            attribute.values.join(", "),
        ));
    }
    Ok(rows)
}
