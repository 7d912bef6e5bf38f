use std::sync::LazyLock;

use regex::Regex;

use shared::StandardsResult;
use shared::models::{ItemMetaEntry, OrderItem, Product};

use crate::catalog::{MetaStore, ProductCatalog};

use super::{product_attributes, product_data};

/// Label of the delivery-time row across cart and email output.
pub const DELIVERY_TIME_LABEL: &str = "Delivery Time";

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

fn strip_tags(value: &str) -> String {
    TAG.replace_all(value, "").into_owned()
}

/// Wrapping applied around the rendered row list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatArgs {
    pub before: String,
    pub separator: String,
    pub after: String,
}

impl Default for FormatArgs {
    fn default() -> Self {
        Self {
            before: String::new(),
            separator: "<br>".to_string(),
            after: String::new(),
        }
    }
}

/// Renders an order item's metadata block for the order email.
///
/// Product data comes first, then a rule, the item's own metadata with
/// markup stripped, then the attributes. A recorded delivery time is
/// spliced in right after the first row. Labeled rows render as
/// `<strong class="wc-item-meta-label">label:</strong> value`.
/// With no rows at all the host's rendering is kept.
pub fn format_item_meta<C>(
    catalog: &C,
    item: &OrderItem,
    product: &Product,
    args: &FormatArgs,
    fallback: &str,
) -> StandardsResult<String>
where
    C: ProductCatalog + MetaStore,
{
    let mut rows = product_data(catalog, product)?;
    rows.push(ItemMetaEntry::new("", "<hr>"));
    for meta in &item.meta {
        rows.push(ItemMetaEntry::new(
            meta.label.clone(),
            strip_tags(&meta.value),
        ));
    }
    rows.extend(product_attributes(catalog, product)?);

    if let Some(term_id) = item.delivery_time_term {
        if let Some(term) = catalog.term(term_id)? {
            let index = rows.len().min(1);
            rows.insert(index, ItemMetaEntry::new(DELIVERY_TIME_LABEL, term.name));
        }
    }

    let strings: Vec<String> = rows
        .iter()
        .map(|row| {
            if row.label.is_empty() {
                row.value.clone()
            } else {
                format!(
                    "<strong class=\"wc-item-meta-label\">{}:</strong> {}",
                    row.label, row.value
                )
            }
        })
        .collect();

    if strings.is_empty() {
        return Ok(fallback.to_string());
    }
    Ok(format!(
        "{}{}{}",
        args.before,
        strings.join(&args.separator),
        args.after
    ))
}

/// Host arguments for the email item table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailItemArgs {
    pub show_sku: bool,
    pub show_image: bool,
    pub plain_text: bool,
}

/// The SKU already appears in the item meta block, so the item name
/// keeps it off.
pub fn email_order_items_args(mut args: EmailItemArgs) -> EmailItemArgs {
    args.show_sku = false;
    args
}

/// Widens the product details column in email styles.
pub fn email_styles(css: &str) -> String {
    format!("{css}.order_item td:first-child {{width: 75%;}}")
}
