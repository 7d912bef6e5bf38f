//! Product meta fields
//!
//! Declarative descriptors for the custom product-edit fields and the
//! save round trip behind them. Text fields update their meta when the
//! submitted value is non-empty and delete it otherwise; checkbox fields
//! are always written as `"yes"` or `"no"`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use shared::flags::{bool_to_string, string_to_bool};
use shared::models::{Product, ProductId};
use shared::{StandardsResult, meta_keys};

use crate::catalog::MetaStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaFieldKind {
    Text,
    TextArea,
    Checkbox,
}

/// One custom field on the product edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetaField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: MetaFieldKind,
}

impl MetaField {
    const fn text(key: &'static str, label: &'static str) -> Self {
        Self { key, label, kind: MetaFieldKind::Text }
    }

    const fn text_area(key: &'static str, label: &'static str) -> Self {
        Self { key, label, kind: MetaFieldKind::TextArea }
    }

    const fn checkbox(key: &'static str, label: &'static str) -> Self {
        Self { key, label, kind: MetaFieldKind::Checkbox }
    }
}

/// Fields of the general product edit form.
pub fn field_definitions() -> Vec<MetaField> {
    vec![
        MetaField::text(meta_keys::GTIN, "GTIN"),
        MetaField::text(meta_keys::ERP_INVENTORY_ID, "ERP/Inventory ID"),
        MetaField::checkbox(
            meta_keys::SHOW_SALE_PRICE_ONLY,
            "Display sale price as normal price",
        ),
        MetaField::text(meta_keys::PRICE_LABEL, "Custom price label"),
        MetaField::checkbox(
            meta_keys::HIDE_SALE_PERCENTAGE_LABEL,
            "Hide sale percentage bubble",
        ),
        MetaField::checkbox(meta_keys::HIDE_ADD_TO_CART_BUTTON, "Hide add to cart button"),
        MetaField::checkbox(
            meta_keys::PRICE_COMPARISON_FOCUS,
            "Price comparison focus product",
        ),
        MetaField::text_area(meta_keys::PRODUCT_NOTES, "Internal product notes"),
    ]
}

/// Fields of the per-variation edit form.
pub fn variation_field_definitions() -> Vec<MetaField> {
    vec![
        MetaField::text(meta_keys::GTIN, "GTIN"),
        MetaField::text(meta_keys::ERP_INVENTORY_ID, "ERP/Inventory ID"),
        MetaField::checkbox(meta_keys::HIDE_ADD_TO_CART_BUTTON, "Hide add to cart button"),
        MetaField::checkbox(
            meta_keys::INSUFFICIENT_VARIANT_IMAGES,
            "Variation has insufficient images",
        ),
        MetaField::checkbox(
            meta_keys::PRICE_COMPARISON_FOCUS,
            "Price comparison focus product",
        ),
    ]
}

fn save_fields<M: MetaStore>(
    store: &M,
    product_id: ProductId,
    fields: &[MetaField],
    submitted: &HashMap<String, String>,
) -> StandardsResult<()> {
    for field in fields {
        match field.kind {
            MetaFieldKind::Text | MetaFieldKind::TextArea => {
                // Only touched when present in the submission.
                if let Some(value) = submitted.get(field.key) {
                    if value.is_empty() {
                        store.delete_meta(product_id, field.key)?;
                    } else {
                        store.set_meta(product_id, field.key, value)?;
                    }
                }
            }
            MetaFieldKind::Checkbox => {
                let checked = submitted
                    .get(field.key)
                    .map(|v| string_to_bool(v))
                    .unwrap_or(false);
                store.set_meta(product_id, field.key, bool_to_string(checked))?;
            }
        }
    }
    Ok(())
}

/// Persists the general product-edit form submission.
pub fn save_product_fields<M: MetaStore>(
    store: &M,
    product_id: ProductId,
    submitted: &HashMap<String, String>,
) -> StandardsResult<()> {
    save_fields(store, product_id, &field_definitions(), submitted)
}

/// Persists a per-variation form submission.
pub fn save_variation_fields<M: MetaStore>(
    store: &M,
    variation_id: ProductId,
    submitted: &HashMap<String, String>,
) -> StandardsResult<()> {
    save_fields(store, variation_id, &variation_field_definitions(), submitted)
}

/// Products with the hide-add-to-cart flag must not be sold online.
pub fn is_purchasable<M: MetaStore>(store: &M, product: &Product) -> StandardsResult<bool> {
    Ok(!store.meta_flag(product.id, meta_keys::HIDE_ADD_TO_CART_BUTTON)?)
}
