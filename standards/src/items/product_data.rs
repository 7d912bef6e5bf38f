use shared::models::{ItemMetaEntry, Product};
use shared::{StandardsResult, meta_keys};

use crate::catalog::MetaStore;

/// Basic data rows of a product: identifiers, dimensions and weight.
///
/// SKU and ERP id collapse into one combined row so they share a line on
/// cart and email output. Absent values produce no row.
pub fn product_data<M: MetaStore>(
    store: &M,
    product: &Product,
) -> StandardsResult<Vec<ItemMetaEntry>> {
    let mut rows = Vec::new();

    let mut id_labels = Vec::new();
    let mut id_values = Vec::new();
    if let Some(sku) = product.sku.as_deref().filter(|s| !s.is_empty()) {
        id_labels.push("SKU");
        id_values.push(sku.to_string());
    }
    if let Some(erp_id) = store
        .meta(product.id, meta_keys::ERP_INVENTORY_ID)?
        .filter(|v| !v.is_empty())
    {
        id_labels.push("ERP/ID");
        id_values.push(erp_id);
    }
    if !id_values.is_empty() {
        rows.push(ItemMetaEntry::new(
            id_labels.join(" | "),
            id_values.join(" | "),
        ));
    }

    if let Some(dimensions) = &product.dimensions_cm {
        rows.push(ItemMetaEntry::new("Dimensions", dimensions.format()));
    }

    if let Some(weight) = product.weight_kg {
        rows.push(ItemMetaEntry::new("Weight", format!("{weight} kg")));
    }

    Ok(rows)
}
