//! Descsync Admin library.
//!
//! Talks to the Shopify Admin GraphQL API to read products and rewrite their
//! HTML descriptions from three custom metafields: a rich-text description,
//! "how to take" instructions and a list of ingredient metaobjects.
//!
//! # Security
//!
//! This crate handles a HIGH PRIVILEGE Admin API access token that can
//! rewrite any product in the store.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`shopify`] - Admin API client and domain types
//! - [`description`] - Compose and push generated descriptions
//! - [`export`] - Append current descriptions to a text file
//! - [`update_log`] - Append-only log of blank sections and update problems

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod description;
pub mod export;
pub mod shopify;
pub mod update_log;

pub use config::{ConfigError, DescsyncConfig, MetafieldKeys, ShopifyAdminConfig};
pub use description::{
    DescriptionDraft, DescriptionError, DescriptionUpdate, compose_description,
    compose_from_metafields, push_description,
};
pub use export::{DEFAULT_EXPORT_FILE, ExportError, export_description, render_export};
pub use shopify::{AdminClient, AdminShopifyError, MAX_PAGE_SIZE};
pub use update_log::UpdateLog;
