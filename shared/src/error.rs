//! Error types
//!
//! Deliberately small: platform data that is absent or malformed degrades
//! to defaults or no-ops, so most operations only ever surface storage
//! failures from the backing catalog implementation.

use thiserror::Error;

/// Engine-level error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StandardsError {
    /// A referenced entity does not exist in the catalog.
    #[error("{0} not found")]
    NotFound(String),

    /// The backing store failed to read or write.
    #[error("storage error: {0}")]
    Storage(String),

    /// An input value failed validation.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl StandardsError {
    /// Create a not found error for a named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Type alias for Result with StandardsError
pub type StandardsResult<T> = Result<T, StandardsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StandardsError::not_found("product 42");
        assert_eq!(format!("{}", err), "product 42 not found");
    }

    #[test]
    fn test_storage_display() {
        let err = StandardsError::storage("write failed");
        assert_eq!(format!("{}", err), "storage error: write failed");
    }
}
