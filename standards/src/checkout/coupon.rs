use crate::settings::StandardsSettings;

/// Whether the coupon input renders on the checkout page.
pub fn coupon_field_visible(settings: &StandardsSettings) -> bool {
    !settings.disable_coupon_checkout
}
