//! Subcommand implementations.
//!
//! Every command that talks to Shopify loads [`DescsyncConfig`] from the
//! environment (and `.env`) first.

pub mod apps;
pub mod catalog;
pub mod metaobject;
pub mod products;
pub mod shop;

use descsync_admin::{
    AdminClient, AdminShopifyError, ConfigError, DescriptionError, DescsyncConfig, ExportError,
    UpdateLog,
};
use descsync_core::IdError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An Admin API call failed.
    #[error(transparent)]
    Shopify(#[from] AdminShopifyError),

    /// Composing or pushing a description failed.
    #[error(transparent)]
    Description(#[from] DescriptionError),

    /// Exporting a description failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// An ID argument could not be parsed.
    #[error("Invalid ID: {0}")]
    Id(#[from] IdError),

    /// The requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Some products in a batch update failed.
    #[error("{failed} of {total} product updates failed")]
    PartialFailure {
        /// Number of failed products.
        failed: usize,
        /// Number of products attempted.
        total: usize,
    },
}

/// Load configuration and build the Admin API client and update log.
fn connect() -> Result<(AdminClient, UpdateLog), CommandError> {
    let config = DescsyncConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let client = AdminClient::new(&config.shopify, config.metafields.clone())?;
    let log = UpdateLog::new(config.log_file);

    Ok((client, log))
}
