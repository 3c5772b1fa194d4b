//! Shopify Admin API client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **This module handles the high-privilege Shopify Admin API token.**
//!
//! The token can read and rewrite every product in the store. It is read
//! from the environment and never logged.
//!
//! # Architecture
//!
//! - Each operation implements `graphql_client::GraphQLQuery` by hand, with
//!   serde `Variables` and `ResponseData` types
//! - Direct API calls to Shopify, one POST per operation
//! - No pagination: list operations return a single page of at most 250 nodes
//!
//! # Example
//!
//! ```rust,ignore
//! use descsync_admin::shopify::AdminClient;
//! use descsync_core::ProductId;
//!
//! let client = AdminClient::new(&config.shopify, config.metafields.clone())?;
//!
//! let shop = client.get_shop().await?;
//! let product = client.get_product(ProductId::new(7601000743171)).await?;
//! ```

mod admin;
pub mod types;

pub use admin::{AdminClient, MAX_PAGE_SIZE, queries};
pub use types::*;

use thiserror::Error;

/// Errors that can occur when interacting with Shopify Admin API.
#[derive(Debug, Error)]
pub enum AdminShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Non-success HTTP status other than 401/429.
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// Page size outside what the Admin API accepts.
    #[error("Page size must be between 1 and {max}, got {requested}")]
    InvalidPageSize {
        /// Requested page size.
        requested: i64,
        /// Largest accepted page size.
        max: i64,
    },
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
    /// Raw `extensions` object (Shopify puts the error code here).
    pub extensions: Option<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}
