//! Sale module
//!
//! Decides which products belong in the configured sale category and keeps
//! the persisted `_sale_percentage` meta current.

mod category_sync;
mod eligibility;
mod percentage;

pub use category_sync::{SaleSync, SyncOutcome};
pub use eligibility::is_sale_eligible;
pub use percentage::{sale_percentage, update_sale_percentage};
