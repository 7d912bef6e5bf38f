//! Settings layer
//!
//! Typed global configuration loaded from the platform's option storage,
//! plus the declarative settings-schema the admin UI renders.

mod options;
mod schema;

pub use options::{StandardsSettings, option_keys};
pub use schema::{FieldKind, SettingsField, settings_schema};
