use serde::{Deserialize, Serialize};

use shared::StandardsResult;
use shared::flags::{bool_to_string, string_to_bool};
use shared::models::TermId;

use crate::catalog::OptionStore;

/// Option-storage keys.
///
/// The host platform's names are kept so an existing installation's stored
/// options remain readable.
pub mod option_keys {
    pub const DISABLE_COUPON_CHECKOUT: &str = "_shop-standards_disable_coupon_checkout";
    pub const AUTO_SALE_ASSIGNMENT: &str = "_shop-standards_enable_auto_sale_category_assignment";
    pub const ELIGIBLE_DELIVERY_TIMES: &str = "_shop-standards_eligible_delivery_times";
    pub const SALE_CATEGORY: &str = "_shop-standards_sale_category";
    pub const MINIMUM_SALE_PERCENTAGE: &str = "_minimum_sale_percentage_to_display_label";
    pub const STOCK_FORMAT: &str = "woocommerce_stock_format";
    pub const NOTIFY_LOW_STOCK_AMOUNT: &str = "woocommerce_notify_low_stock_amount";
    pub const CATALOG_PAGE_SIZE: &str = "loop_shop_per_page";
    pub const AJAX_VARIATION_THRESHOLD: &str = "woocommerce_ajax_variation_threshold";
}

/// Global engine configuration.
///
/// Loaded from an [`OptionStore`]; every field has a documented default and
/// malformed stored values silently fall back to it.
///
/// | Option key | Default | Field |
/// |------------|---------|-------|
/// | `_minimum_sale_percentage_to_display_label` | 10 | `minimum_sale_percentage` |
/// | `_shop-standards_eligible_delivery_times` | `[]` | `eligible_delivery_times` |
/// | `_shop-standards_sale_category` | none | `sale_category` |
/// | `_shop-standards_enable_auto_sale_category_assignment` | no | `auto_sale_assignment_enabled` |
/// | `_shop-standards_disable_coupon_checkout` | no | `disable_coupon_checkout` |
/// | `woocommerce_stock_format` | off | `show_low_stock_count` |
/// | `woocommerce_notify_low_stock_amount` | none | `global_low_stock_amount` |
/// | `loop_shop_per_page` | 24 | `catalog_page_size` |
/// | `woocommerce_ajax_variation_threshold` | 100 | `ajax_variation_threshold` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardsSettings {
    /// Minimum discount percent before the sale bubble is displayed and a
    /// product can qualify for the sale category.
    pub minimum_sale_percentage: u32,
    /// Delivery-time terms a product must carry to qualify for the sale
    /// category. Empty means no product qualifies.
    pub eligible_delivery_times: Vec<TermId>,
    /// Category term products are moved into/out of by the sale sync.
    pub sale_category: Option<TermId>,
    /// Master switch for automatic sale-category assignment.
    pub auto_sale_assignment_enabled: bool,
    /// Hide the coupon input on the checkout page.
    pub disable_coupon_checkout: bool,
    /// Stock display format set to show remaining counts near the threshold.
    pub show_low_stock_count: bool,
    /// Store-wide low-stock threshold, used when a product sets none.
    pub global_low_stock_amount: Option<i64>,
    /// Products per catalog page.
    pub catalog_page_size: u32,
    /// Variation count above which variation data is fetched on demand
    /// instead of being inlined into the product form.
    pub ajax_variation_threshold: u32,
}

impl Default for StandardsSettings {
    fn default() -> Self {
        Self {
            minimum_sale_percentage: 10,
            eligible_delivery_times: Vec::new(),
            sale_category: None,
            auto_sale_assignment_enabled: false,
            disable_coupon_checkout: false,
            show_low_stock_count: false,
            global_low_stock_amount: None,
            catalog_page_size: 24,
            ajax_variation_threshold: 100,
        }
    }
}

impl StandardsSettings {
    /// Load settings from option storage, falling back per field.
    pub fn load<S: OptionStore>(store: &S) -> StandardsResult<Self> {
        let defaults = Self::default();

        let minimum_sale_percentage = store
            .option(option_keys::MINIMUM_SALE_PERCENTAGE)?
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.minimum_sale_percentage);

        // Stored as a JSON array of term ids.
        let eligible_delivery_times = store
            .option(option_keys::ELIGIBLE_DELIVERY_TIMES)?
            .and_then(|v| serde_json::from_str(&v).ok())
            .unwrap_or_default();

        let sale_category = store
            .option(option_keys::SALE_CATEGORY)?
            .and_then(|v| v.trim().parse().ok())
            .filter(|&id| id > 0)
            .map(TermId);

        let auto_sale_assignment_enabled = store
            .option(option_keys::AUTO_SALE_ASSIGNMENT)?
            .map(|v| string_to_bool(&v))
            .unwrap_or(defaults.auto_sale_assignment_enabled);

        let disable_coupon_checkout = store
            .option(option_keys::DISABLE_COUPON_CHECKOUT)?
            .map(|v| string_to_bool(&v))
            .unwrap_or(defaults.disable_coupon_checkout);

        let show_low_stock_count = store
            .option(option_keys::STOCK_FORMAT)?
            .map(|v| v == "low_amount")
            .unwrap_or(defaults.show_low_stock_count);

        let global_low_stock_amount = store
            .option(option_keys::NOTIFY_LOW_STOCK_AMOUNT)?
            .and_then(|v| v.trim().parse().ok());

        let catalog_page_size = store
            .option(option_keys::CATALOG_PAGE_SIZE)?
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.catalog_page_size);

        let ajax_variation_threshold = store
            .option(option_keys::AJAX_VARIATION_THRESHOLD)?
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.ajax_variation_threshold);

        Ok(Self {
            minimum_sale_percentage,
            eligible_delivery_times,
            sale_category,
            auto_sale_assignment_enabled,
            disable_coupon_checkout,
            show_low_stock_count,
            global_low_stock_amount,
            catalog_page_size,
            ajax_variation_threshold,
        })
    }

    /// Persist the settings back to option storage.
    pub fn save<S: OptionStore>(&self, store: &S) -> StandardsResult<()> {
        store.set_option(
            option_keys::MINIMUM_SALE_PERCENTAGE,
            &self.minimum_sale_percentage.to_string(),
        )?;
        store.set_option(
            option_keys::ELIGIBLE_DELIVERY_TIMES,
            &serde_json::to_string(&self.eligible_delivery_times)
                .map_err(|e| shared::StandardsError::storage(e.to_string()))?,
        )?;
        store.set_option(
            option_keys::SALE_CATEGORY,
            &self.sale_category.map(|t| t.0).unwrap_or(0).to_string(),
        )?;
        store.set_option(
            option_keys::AUTO_SALE_ASSIGNMENT,
            bool_to_string(self.auto_sale_assignment_enabled),
        )?;
        store.set_option(
            option_keys::DISABLE_COUPON_CHECKOUT,
            bool_to_string(self.disable_coupon_checkout),
        )?;
        store.set_option(
            option_keys::STOCK_FORMAT,
            if self.show_low_stock_count { "low_amount" } else { "" },
        )?;
        store.set_option(
            option_keys::NOTIFY_LOW_STOCK_AMOUNT,
            &self
                .global_low_stock_amount
                .map(|a| a.to_string())
                .unwrap_or_default(),
        )?;
        store.set_option(
            option_keys::CATALOG_PAGE_SIZE,
            &self.catalog_page_size.to_string(),
        )?;
        store.set_option(
            option_keys::AJAX_VARIATION_THRESHOLD,
            &self.ajax_variation_threshold.to_string(),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

    #[test]
    fn test_defaults_when_storage_is_empty() {
        let catalog = MemoryCatalog::new();
        let settings = StandardsSettings::load(&catalog).unwrap();
        assert_eq!(settings, StandardsSettings::default());
        assert_eq!(settings.minimum_sale_percentage, 10);
        assert_eq!(settings.catalog_page_size, 24);
        assert_eq!(settings.ajax_variation_threshold, 100);
    }

    #[test]
    fn test_load_from_stored_options() {
        let catalog = MemoryCatalog::new()
            .with_option(option_keys::MINIMUM_SALE_PERCENTAGE, "25")
            .with_option(option_keys::ELIGIBLE_DELIVERY_TIMES, "[3,7]")
            .with_option(option_keys::SALE_CATEGORY, "42")
            .with_option(option_keys::AUTO_SALE_ASSIGNMENT, "yes")
            .with_option(option_keys::STOCK_FORMAT, "low_amount")
            .with_option(option_keys::NOTIFY_LOW_STOCK_AMOUNT, "2");

        let settings = StandardsSettings::load(&catalog).unwrap();
        assert_eq!(settings.minimum_sale_percentage, 25);
        assert_eq!(settings.eligible_delivery_times, vec![TermId(3), TermId(7)]);
        assert_eq!(settings.sale_category, Some(TermId(42)));
        assert!(settings.auto_sale_assignment_enabled);
        assert!(settings.show_low_stock_count);
        assert_eq!(settings.global_low_stock_amount, Some(2));
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let catalog = MemoryCatalog::new()
            .with_option(option_keys::MINIMUM_SALE_PERCENTAGE, "lots")
            .with_option(option_keys::ELIGIBLE_DELIVERY_TIMES, "not json")
            .with_option(option_keys::SALE_CATEGORY, "0")
            .with_option(option_keys::CATALOG_PAGE_SIZE, "-3");

        let settings = StandardsSettings::load(&catalog).unwrap();
        assert_eq!(settings.minimum_sale_percentage, 10);
        assert!(settings.eligible_delivery_times.is_empty());
        assert_eq!(settings.sale_category, None);
        assert_eq!(settings.catalog_page_size, 24);
    }

    #[test]
    fn test_save_round_trip() {
        let catalog = MemoryCatalog::new();
        let settings = StandardsSettings {
            minimum_sale_percentage: 15,
            eligible_delivery_times: vec![TermId(5)],
            sale_category: Some(TermId(9)),
            auto_sale_assignment_enabled: true,
            disable_coupon_checkout: true,
            show_low_stock_count: true,
            global_low_stock_amount: Some(4),
            catalog_page_size: 36,
            ajax_variation_threshold: 200,
        };
        settings.save(&catalog).unwrap();
        assert_eq!(StandardsSettings::load(&catalog).unwrap(), settings);

        // Clearing a previously stored threshold sticks.
        let cleared = StandardsSettings {
            global_low_stock_amount: None,
            ..settings
        };
        cleared.save(&catalog).unwrap();
        assert_eq!(
            StandardsSettings::load(&catalog).unwrap().global_low_stock_amount,
            None
        );
    }
}
