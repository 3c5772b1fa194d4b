//! Core types for descsync.
//!
//! This module provides type-safe wrappers for Shopify identifiers and the
//! table of products this store maintains descriptions for.

pub mod catalog;
pub mod id;

pub use catalog::{CatalogEntry, PRODUCT_CATALOG, lookup_alias, resolve_product};
pub use id::*;
