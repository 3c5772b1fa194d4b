//! Domain types for Shopify Admin API.
//!
//! These types provide a clean, ergonomic API separate from the raw
//! GraphQL response types in `queries`.

pub mod app;
pub mod common;
pub mod metaobject;
pub mod product;

// Re-export all types for convenience
pub use app::*;
pub use common::*;
pub use metaobject::*;
pub use product::*;
