//! Descsync Core - Shared types library.
//!
//! This crate provides the pieces used by every descsync component:
//! - `admin` - Shopify Admin API client and the description workflows
//! - `cli` - The `descsync` command-line tool
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O and no
//! HTTP clients. Composing a description is split so that the string
//! assembly lives here and the remote lookups live in `admin`.
//!
//! # Modules
//!
//! - [`types`] - Type-safe Shopify IDs and the known product catalog
//! - [`description`] - Metafield extraction and HTML description assembly

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod description;
pub mod types;

pub use description::{
    ComposedDescription, DescriptionBuilder, IngredientRef, SECTION_SEPARATOR, Section,
    how_to_take_text, ingredient_refs, rich_text_value,
};
pub use types::*;
