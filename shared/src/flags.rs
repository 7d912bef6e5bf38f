//! Flag string conventions
//!
//! The host platform persists boolean product metadata as `"yes"` / `"no"`
//! strings. These helpers keep every read/write consistent with that
//! convention.

/// Truthy flag values accepted from stored metadata and form submissions.
pub fn string_to_bool(value: &str) -> bool {
    matches!(value.trim(), "yes" | "true" | "1")
}

/// Serialize a boolean for flag metadata.
pub fn bool_to_string(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
