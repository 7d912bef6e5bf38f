use serde::{Deserialize, Serialize};

use shared::StandardsResult;
use shared::models::Taxonomy;

use crate::catalog::ProductCatalog;

use super::option_keys;

/// Field type of one settings-form entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Title,
    Checkbox,
    Text,
    Select,
    MultiSelect,
    SectionEnd,
}

/// One entry of the declarative settings form.
///
/// `options` carries `(value, label)` pairs for select kinds; `default`
/// is the rendered default for text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsField {
    pub kind: FieldKind,
    pub id: Option<String>,
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl SettingsField {
    fn title(label: &str) -> Self {
        Self {
            kind: FieldKind::Title,
            id: None,
            label: Some(label.to_string()),
            options: Vec::new(),
            default: None,
        }
    }

    fn checkbox(id: &str, label: &str) -> Self {
        Self {
            kind: FieldKind::Checkbox,
            id: Some(id.to_string()),
            label: Some(label.to_string()),
            options: Vec::new(),
            default: None,
        }
    }

    fn text(id: &str, label: &str, default: &str) -> Self {
        Self {
            kind: FieldKind::Text,
            id: Some(id.to_string()),
            label: Some(label.to_string()),
            options: Vec::new(),
            default: Some(default.to_string()),
        }
    }

    fn select(id: &str, label: &str, kind: FieldKind, options: Vec<(String, String)>) -> Self {
        Self {
            kind,
            id: Some(id.to_string()),
            label: Some(label.to_string()),
            options,
            default: None,
        }
    }

    fn section_end() -> Self {
        Self {
            kind: FieldKind::SectionEnd,
            id: None,
            label: None,
            options: Vec::new(),
            default: None,
        }
    }
}

fn term_options<C: ProductCatalog>(
    catalog: &C,
    taxonomy: Taxonomy,
) -> StandardsResult<Vec<(String, String)>> {
    Ok(catalog
        .terms(taxonomy)?
        .into_iter()
        .map(|t| (t.id.0.to_string(), t.name))
        .collect())
}

/// Builds the settings form: a coupon section, the automatic sale-category
/// assignment section and a products section. Select options are populated
/// from the catalog's taxonomy terms.
pub fn settings_schema<C: ProductCatalog>(catalog: &C) -> StandardsResult<Vec<SettingsField>> {
    let delivery_times = term_options(catalog, Taxonomy::DeliveryTime)?;
    let categories = term_options(catalog, Taxonomy::Category)?;

    Ok(vec![
        SettingsField::title("Coupon settings"),
        SettingsField::checkbox(
            option_keys::DISABLE_COUPON_CHECKOUT,
            "Disable coupon input field on checkout page",
        ),
        SettingsField::section_end(),
        SettingsField::title("Automatic sale category assignment"),
        SettingsField::checkbox(option_keys::AUTO_SALE_ASSIGNMENT, "Enable"),
        SettingsField::select(
            option_keys::ELIGIBLE_DELIVERY_TIMES,
            "Eligible delivery times",
            FieldKind::MultiSelect,
            delivery_times,
        ),
        SettingsField::select(
            option_keys::SALE_CATEGORY,
            "Sale category to assign",
            FieldKind::Select,
            categories,
        ),
        SettingsField::section_end(),
        SettingsField::title("Products settings"),
        SettingsField::text(
            option_keys::MINIMUM_SALE_PERCENTAGE,
            "Minimum discount percentage to display product sale label",
            "10",
        ),
        SettingsField::section_end(),
    ])
}
