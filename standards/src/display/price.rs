use rust_decimal::{Decimal, RoundingStrategy};

use shared::models::Product;
use shared::{StandardsResult, meta_keys};

use crate::catalog::{MetaStore, ProductCatalog};

/// Label appended when the sale price is displayed as the regular price
/// and no custom label is configured.
pub const DEFAULT_PRICE_LABEL: &str = "(Our price)";

/// Formats an amount with a Euro prefix and two decimals.
///
/// Locale-aware formatting is the host's concern; this is the neutral
/// rendering used in composed HTML fragments.
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("€{rounded:.2}")
}

/// Min/max price pair of a variable product's variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn single(price: Decimal) -> Self {
        Self { min: price, max: price }
    }

    pub fn is_range(&self) -> bool {
        self.min != self.max
    }

    /// `"€a"` or `"€a-€b"`.
    pub fn format(&self) -> String {
        if self.is_range() {
            format!("{}-{}", format_price(self.min), format_price(self.max))
        } else {
            format_price(self.min)
        }
    }
}

/// Regular and effective (sale where present) price ranges across a
/// variable product's variations. `None` when no variation has a price.
pub fn variation_price_ranges<C: ProductCatalog>(
    catalog: &C,
    product: &Product,
) -> StandardsResult<Option<(PriceRange, PriceRange)>> {
    let mut regular: Option<PriceRange> = None;
    let mut effective: Option<PriceRange> = None;

    for variation_id in &product.variation_ids {
        let Some(variation) = catalog.product(*variation_id)? else {
            continue;
        };
        let Some(regular_price) = variation.regular_price else {
            continue;
        };
        let effective_price = variation.sale_price.unwrap_or(regular_price);
        regular = Some(extend(regular, regular_price));
        effective = Some(extend(effective, effective_price));
    }

    Ok(regular.zip(effective))
}

fn extend(range: Option<PriceRange>, price: Decimal) -> PriceRange {
    match range {
        Some(r) => PriceRange::new(r.min.min(price), r.max.max(price)),
        None => PriceRange::single(price),
    }
}

/// Price HTML for a variable product on sale.
///
/// Renders the struck-through regular range next to the sale range, but
/// only when the two ranges differ in at least one bound and at least one
/// of them is a true range. Otherwise the host's rendering is kept.
pub fn variable_price_html(regular: PriceRange, sale: PriceRange, fallback: &str) -> String {
    if sale != regular && (sale.is_range() || regular.is_range()) {
        format!("<del>{}</del> <ins>{}</ins>", regular.format(), sale.format())
    } else {
        fallback.to_string()
    }
}

/// Renders the sale price as if it were the regular price when the
/// per-product "show sale price only" flag is set.
///
/// Variable products render their effective price range; simple products
/// the plain sale price. On the main single-product view a price label is
/// appended ([`DEFAULT_PRICE_LABEL`] unless overridden per product).
/// Returns the fallback when the flag is off or nothing is discounted.
pub fn sale_price_only_html<C>(
    catalog: &C,
    product: &Product,
    fallback: &str,
    main_product_view: bool,
) -> StandardsResult<String>
where
    C: ProductCatalog + MetaStore,
{
    let flag_owner = if product.is_variation() {
        product.parent_id.unwrap_or(product.id)
    } else {
        product.id
    };
    if !catalog.meta_flag(flag_owner, meta_keys::SHOW_SALE_PRICE_ONLY)? {
        return Ok(fallback.to_string());
    }

    let mut price = if product.is_variable() {
        match variation_price_ranges(catalog, product)? {
            Some((regular, effective)) if effective.min != regular.min => effective.format(),
            _ => return Ok(fallback.to_string()),
        }
    } else {
        match product.sale_price {
            Some(sale) => format_price(sale),
            None => return Ok(fallback.to_string()),
        }
    };

    if main_product_view {
        let label = catalog
            .meta(flag_owner, meta_keys::PRICE_LABEL)?
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_PRICE_LABEL.to_string());
        price.push(' ');
        price.push_str(&label);
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use shared::models::{ProductId, ProductKind};

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(d("10")), "€10.00");
        assert_eq!(format_price(d("19.9")), "€19.90");
        assert_eq!(format_price(d("19.995")), "€20.00");
    }

    #[test]
    fn test_range_format() {
        assert_eq!(PriceRange::single(d("12")).format(), "€12.00");
        assert_eq!(PriceRange::new(d("12"), d("18")).format(), "€12.00-€18.00");
    }

    #[test]
    fn test_variable_price_html_with_differing_ranges() {
        let regular = PriceRange::new(d("100"), d("150"));
        let sale = PriceRange::new(d("80"), d("120"));
        assert_eq!(
            variable_price_html(regular, sale, "host"),
            "<del>€100.00-€150.00</del> <ins>€80.00-€120.00</ins>"
        );
    }

    #[test]
    fn test_variable_price_html_keeps_fallback() {
        // Equal ranges.
        let range = PriceRange::new(d("100"), d("150"));
        assert_eq!(variable_price_html(range, range, "host"), "host");

        // Both sides single prices, even when they differ.
        assert_eq!(
            variable_price_html(PriceRange::single(d("100")), PriceRange::single(d("80")), "host"),
            "host"
        );
    }

    fn variable_fixture() -> (MemoryCatalog, Product) {
        let mut parent = Product::new(ProductId(10), ProductKind::Variable);
        parent.variation_ids = vec![ProductId(11), ProductId(12)];

        let mut a = Product::new(ProductId(11), ProductKind::Variation);
        a.parent_id = Some(ProductId(10));
        a.regular_price = Some(d("100"));
        a.sale_price = Some(d("80"));

        let mut b = Product::new(ProductId(12), ProductKind::Variation);
        b.parent_id = Some(ProductId(10));
        b.regular_price = Some(d("120"));

        let catalog = MemoryCatalog::new()
            .with_product(parent.clone())
            .with_product(a)
            .with_product(b);
        (catalog, parent)
    }

    #[test]
    fn test_variation_price_ranges() {
        let (catalog, parent) = variable_fixture();
        let (regular, effective) = variation_price_ranges(&catalog, &parent).unwrap().unwrap();
        assert_eq!(regular, PriceRange::new(d("100"), d("120")));
        assert_eq!(effective, PriceRange::new(d("80"), d("120")));
    }

    #[test]
    fn test_sale_price_only_disabled_keeps_fallback() {
        let (catalog, parent) = variable_fixture();
        let html = sale_price_only_html(&catalog, &parent, "host", false).unwrap();
        assert_eq!(html, "host");
    }

    #[test]
    fn test_sale_price_only_variable_range() {
        let (catalog, parent) = variable_fixture();
        let catalog = catalog.with_meta(ProductId(10), meta_keys::SHOW_SALE_PRICE_ONLY, "yes");
        let html = sale_price_only_html(&catalog, &parent, "host", false).unwrap();
        assert_eq!(html, "€80.00-€120.00");
    }

    #[test]
    fn test_sale_price_only_appends_label_on_single_view() {
        let mut product = Product::new(ProductId(1), ProductKind::Simple);
        product.regular_price = Some(d("50"));
        product.sale_price = Some(d("40"));
        let catalog = MemoryCatalog::new()
            .with_product(product.clone())
            .with_meta(ProductId(1), meta_keys::SHOW_SALE_PRICE_ONLY, "yes");

        let html = sale_price_only_html(&catalog, &product, "host", true).unwrap();
        assert_eq!(html, "€40.00 (Our price)");

        let catalog = catalog.with_meta(ProductId(1), meta_keys::PRICE_LABEL, "(Deal)");
        let html = sale_price_only_html(&catalog, &product, "host", true).unwrap();
        assert_eq!(html, "€40.00 (Deal)");
    }

    #[test]
    fn test_sale_price_only_without_discount_keeps_fallback() {
        let mut product = Product::new(ProductId(1), ProductKind::Simple);
        product.regular_price = Some(d("50"));
        let catalog = MemoryCatalog::new()
            .with_product(product.clone())
            .with_meta(ProductId(1), meta_keys::SHOW_SALE_PRICE_ONLY, "yes");

        let html = sale_price_only_html(&catalog, &product, "host", true).unwrap();
        assert_eq!(html, "host");
    }
}
