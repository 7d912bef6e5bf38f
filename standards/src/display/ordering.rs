use shared::meta_keys;

/// Query value of the discount sort.
pub const SALE_PERCENTAGE_ORDERBY: &str = "sale_percentage";

/// Sort arguments the host query builder applies for the discount sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingArgs {
    /// Sort key kind, `"meta_value_num"` for the discount sort.
    pub orderby: String,
    /// `"DESC"` so the biggest discounts come first.
    pub order: String,
    /// Meta key holding the numeric sort value.
    pub meta_key: String,
}

/// Maps a requested ordering to query arguments.
///
/// `None` for any ordering this module does not own; the host keeps its
/// default handling in that case.
pub fn catalog_ordering_args(requested: &str) -> Option<OrderingArgs> {
    if requested == SALE_PERCENTAGE_ORDERBY {
        Some(OrderingArgs {
            orderby: "meta_value_num".to_string(),
            order: "DESC".to_string(),
            meta_key: meta_keys::SALE_PERCENTAGE.to_string(),
        })
    } else {
        None
    }
}

/// The `(value, label)` entry the sort dropdown gains.
pub fn sort_option() -> (&'static str, &'static str) {
    (SALE_PERCENTAGE_ORDERBY, "Sort by discount")
}
