use shared::StandardsResult;
use shared::models::{ItemMetaEntry, Product};

use crate::catalog::{MetaStore, ProductCatalog};

use super::order_email::DELIVERY_TIME_LABEL;
use super::{product_attributes, product_data};

/// Composes the full metadata row list of a cart line.
///
/// Takes the rows the host already attached (variation selections,
/// delivery time) and surrounds them with product data and attributes:
///
/// - the delivery-time row moves to the front, followed by a separator,
/// - product data (SKU/ERP id, dimensions, weight) is prepended,
/// - visible attributes are appended, except those whose name already
///   appears in a serialized snapshot of the existing rows.
pub fn compose_cart_item_data<C>(
    catalog: &C,
    existing: Vec<ItemMetaEntry>,
    product: &Product,
) -> StandardsResult<Vec<ItemMetaEntry>>
where
    C: ProductCatalog + MetaStore,
{
    // Substring match against the serialized rows, quoted to reduce
    // accidental hits inside longer values.
    let snapshot = serde_json::to_string(&existing)
        .map_err(|e| shared::StandardsError::storage(e.to_string()))?;
    let attributes: Vec<ItemMetaEntry> = product_attributes(catalog, product)?
        .into_iter()
        .filter(|row| !snapshot.contains(&format!("\"{}\"", row.label)))
        .collect();

    let mut rows = existing;
    if rows.len() > 1 {
        if let Some(pos) = rows.iter().position(|r| r.label == DELIVERY_TIME_LABEL) {
            let delivery = rows.remove(pos);
            rows.insert(0, delivery);
            rows.insert(1, ItemMetaEntry::separator());
        }
    } else {
        rows.push(ItemMetaEntry::separator());
    }

    let mut composed = product_data(catalog, product)?;
    composed.extend(rows);
    composed.extend(attributes);
    Ok(composed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use shared::models::{ProductAttribute, ProductId, ProductKind};

    fn product_with_attributes() -> Product {
        let mut product = Product::new(ProductId(1), ProductKind::Simple);
        product.sku = Some("AB-1".to_string());
        product.attributes = vec![
            ProductAttribute {
                name: "Material".to_string(),
                values: vec!["Oak".to_string()],
                visible: true,
            },
            ProductAttribute {
                name: "Color".to_string(),
                values: vec!["Red".to_string()],
                visible: true,
            },
        ];
        product
    }

    #[test]
    fn test_delivery_time_moves_to_front() {
        let product = product_with_attributes();
        let catalog = MemoryCatalog::new().with_product(product.clone());
        let existing = vec![
            ItemMetaEntry::new("Color", "Red"),
            ItemMetaEntry::new(DELIVERY_TIME_LABEL, "2-3 days"),
        ];

        let rows = compose_cart_item_data(&catalog, existing, &product).unwrap();
        assert_eq!(
            rows,
            vec![
                ItemMetaEntry::new("SKU", "AB-1"),
                ItemMetaEntry::new(DELIVERY_TIME_LABEL, "2-3 days"),
                ItemMetaEntry::separator(),
                ItemMetaEntry::new("Color", "Red"),
                ItemMetaEntry::new("Material", "Oak"),
            ]
        );
    }

    #[test]
    fn test_single_row_gets_trailing_separator() {
        let product = product_with_attributes();
        let catalog = MemoryCatalog::new().with_product(product.clone());
        let existing = vec![ItemMetaEntry::new(DELIVERY_TIME_LABEL, "2-3 days")];

        let rows = compose_cart_item_data(&catalog, existing, &product).unwrap();
        assert_eq!(
            rows,
            vec![
                ItemMetaEntry::new("SKU", "AB-1"),
                ItemMetaEntry::new(DELIVERY_TIME_LABEL, "2-3 days"),
                ItemMetaEntry::separator(),
                ItemMetaEntry::new("Material", "Oak"),
                ItemMetaEntry::new("Color", "Red"),
            ]
        );
    }

    #[test]
    fn test_existing_attribute_names_not_duplicated() {
        let product = product_with_attributes();
        let catalog = MemoryCatalog::new().with_product(product.clone());
        let existing = vec![
            ItemMetaEntry::new("Color", "Red"),
            ItemMetaEntry::new("Size", "XL"),
        ];

        let rows = compose_cart_item_data(&catalog, existing, &product).unwrap();
        let colors = rows.iter().filter(|r| r.label == "Color").count();
        assert_eq!(colors, 1);
        assert!(rows.contains(&ItemMetaEntry::new("Material", "Oak")));
    }
}
