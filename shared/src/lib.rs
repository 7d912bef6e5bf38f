//! Shared types for the shop-standards engine
//!
//! Data models for platform-owned entities (products, taxonomy terms,
//! order items), the error type, flag/meta-key conventions.

pub mod error;
pub mod flags;
pub mod meta_keys;
pub mod models;

// Re-exports
pub use error::{StandardsError, StandardsResult};
pub use serde::{Deserialize, Serialize};
