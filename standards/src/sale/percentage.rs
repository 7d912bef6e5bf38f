use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use shared::models::{Product, ProductId};
use shared::{StandardsResult, meta_keys};

use crate::catalog::{MetaStore, ProductCatalog};

/// Discount percent of a sale price relative to the regular price.
///
/// `None` unless the sale price actually undercuts a positive regular
/// price. Rounded to a whole percent, midpoint away from zero.
pub fn sale_percentage(regular: Decimal, sale: Decimal) -> Option<u32> {
    if regular <= Decimal::ZERO || sale >= regular {
        return None;
    }
    let percent = (regular - sale) / regular * Decimal::ONE_HUNDRED;
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
}

fn product_percentage(product: &Product) -> Option<u32> {
    match (product.regular_price, product.sale_price) {
        (Some(regular), Some(sale)) => sale_percentage(regular, sale),
        _ => None,
    }
}

/// Recomputes and persists the `_sale_percentage` meta of a product.
///
/// Variable products store the maximum percentage across their variations.
/// Products not on sale store `"0"` so the catalog ordering keys stay
/// comparable.
pub fn update_sale_percentage<C>(catalog: &C, product_id: ProductId) -> StandardsResult<()>
where
    C: ProductCatalog + MetaStore,
{
    let Some(product) = catalog.product(product_id)? else {
        warn!(%product_id, "sale percentage update for unknown product");
        return Ok(());
    };

    let percentage = if product.is_variable() {
        let mut max = 0;
        for variation_id in &product.variation_ids {
            if let Some(variation) = catalog.product(*variation_id)? {
                max = max.max(product_percentage(&variation).unwrap_or(0));
            }
        }
        max
    } else {
        product_percentage(&product).unwrap_or(0)
    };

    catalog.set_meta(product_id, meta_keys::SALE_PERCENTAGE, &percentage.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use shared::models::ProductKind;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(sale_percentage(d("100"), d("75")), Some(25));
        assert_eq!(sale_percentage(d("100"), d("66.6")), Some(33));
        assert_eq!(sale_percentage(d("29.99"), d("19.99")), Some(33));
        assert_eq!(sale_percentage(d("200"), d("199")), Some(1));
    }

    #[test]
    fn test_no_percentage_without_discount() {
        assert_eq!(sale_percentage(d("100"), d("100")), None);
        assert_eq!(sale_percentage(d("100"), d("120")), None);
        assert_eq!(sale_percentage(d("0"), d("0")), None);
    }

    #[test]
    fn test_update_persists_integer_string() {
        let mut product = Product::new(ProductId(1), ProductKind::Simple);
        product.regular_price = Some(d("50"));
        product.sale_price = Some(d("40"));
        let catalog = MemoryCatalog::new().with_product(product);

        update_sale_percentage(&catalog, ProductId(1)).unwrap();
        assert_eq!(
            catalog.meta(ProductId(1), meta_keys::SALE_PERCENTAGE).unwrap(),
            Some("20".to_string())
        );
    }

    #[test]
    fn test_variable_takes_max_across_variations() {
        let mut parent = Product::new(ProductId(10), ProductKind::Variable);
        parent.variation_ids = vec![ProductId(11), ProductId(12)];

        let mut a = Product::new(ProductId(11), ProductKind::Variation);
        a.parent_id = Some(ProductId(10));
        a.regular_price = Some(d("100"));
        a.sale_price = Some(d("90"));

        let mut b = Product::new(ProductId(12), ProductKind::Variation);
        b.parent_id = Some(ProductId(10));
        b.regular_price = Some(d("100"));
        b.sale_price = Some(d("60"));

        let catalog = MemoryCatalog::new()
            .with_product(parent)
            .with_product(a)
            .with_product(b);

        update_sale_percentage(&catalog, ProductId(10)).unwrap();
        assert_eq!(
            catalog.meta(ProductId(10), meta_keys::SALE_PERCENTAGE).unwrap(),
            Some("40".to_string())
        );
    }

    #[test]
    fn test_not_on_sale_stores_zero() {
        let mut product = Product::new(ProductId(1), ProductKind::Simple);
        product.regular_price = Some(d("50"));
        let catalog = MemoryCatalog::new().with_product(product);

        update_sale_percentage(&catalog, ProductId(1)).unwrap();
        assert_eq!(
            catalog.meta(ProductId(1), meta_keys::SALE_PERCENTAGE).unwrap(),
            Some("0".to_string())
        );
    }
}
