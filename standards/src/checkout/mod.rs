//! Checkout module
//!
//! Postcode validation for countries the platform ships without rules,
//! and the coupon field switch.

mod coupon;
mod postcode;

pub use coupon::coupon_field_visible;
pub use postcode::validate_postcode;
