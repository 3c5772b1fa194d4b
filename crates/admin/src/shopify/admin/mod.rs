//! Shopify Admin API GraphQL client with access-token authentication.
//!
//! This module provides a type-safe client for the handful of Admin API
//! operations descsync needs.

use std::sync::Arc;
use std::time::Duration;

use graphql_client::GraphQLQuery;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::instrument;

use descsync_core::MetaobjectId;

use crate::config::{MetafieldKeys, ShopifyAdminConfig};

use super::{
    AdminShopifyError, GraphQLError, GraphQLErrorLocation,
    types::{Metaobject, Shop},
};

mod apps;
mod conversions;
mod products;
pub mod queries;

use conversions::{convert_metaobject, convert_shop};
use queries::{GetMetaobject, GetShop};

/// Largest page the Admin API returns for a connection.
pub const MAX_PAGE_SIZE: i64 = 250;

/// Wait reported when a 429 carries no usable `Retry-After` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 2;

/// Shopify Admin API GraphQL client.
///
/// Provides typed access to the shop, products, metaobjects and apps.
/// Cheap to clone: clones share one connection pool.
///
/// # Security
///
/// This client holds an access token with HIGH PRIVILEGE access to the
/// store. The token is sent only in the `X-Shopify-Access-Token` header.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: SecretString,
    metafields: MetafieldKeys,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("endpoint", &self.inner.endpoint)
            .field("access_token", &"[REDACTED]")
            .field("metafields", &self.inner.metafields)
            .finish()
    }
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLErrorResponse>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
    #[serde(default)]
    locations: Vec<GraphQLErrorLocationResponse>,
    #[serde(default)]
    path: Vec<serde_json::Value>,
    #[serde(default)]
    extensions: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorLocationResponse {
    line: i64,
    column: i64,
}

impl AdminClient {
    /// Create a new Admin API client.
    ///
    /// # Arguments
    ///
    /// * `config` - Shopify Admin API configuration
    /// * `metafields` - Where the description metafields live
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::Http` if the HTTP client cannot be built.
    pub fn new(
        config: &ShopifyAdminConfig,
        metafields: MetafieldKeys,
    ) -> Result<Self, AdminShopifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("descsync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(AdminClientInner {
                client,
                endpoint: config.graphql_endpoint(),
                access_token: config.access_token.clone(),
                metafields,
            }),
        })
    }

    /// Get the GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Get the metafield namespace and keys used for descriptions.
    #[must_use]
    pub fn metafields(&self) -> &MetafieldKeys {
        &self.inner.metafields
    }

    // =========================================================================
    // GraphQL Execution
    // =========================================================================

    /// Execute a GraphQL operation.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, AdminShopifyError>
    where
        Q::ResponseData: DeserializeOwned,
    {
        let body = Q::build_query(variables);
        tracing::debug!(operation = body.operation_name, "Executing Admin API operation");

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header(
                "X-Shopify-Access-Token",
                self.inner.access_token.expose_secret(),
            )
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<f64>().ok())
                .map_or(DEFAULT_RETRY_AFTER_SECS, whole_seconds);
            return Err(AdminShopifyError::RateLimited(retry_after));
        }

        // Check for unauthorized
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AdminShopifyError::Unauthorized(
                "Invalid or expired access token".to_string(),
            ));
        }

        let text = response.text().await?;

        if !status.is_success() {
            return Err(AdminShopifyError::UnexpectedStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let graphql_response: GraphQLResponse<Q::ResponseData> = serde_json::from_str(&text)?;

        // Check for GraphQL errors
        if let Some(errors) = graphql_response.errors
            && !errors.is_empty()
        {
            tracing::error!(
                operation = body.operation_name,
                errors = %text,
                "Admin API returned GraphQL errors"
            );
            let converted_errors: Vec<GraphQLError> = errors
                .into_iter()
                .map(|e| GraphQLError {
                    message: e.message,
                    locations: e
                        .locations
                        .into_iter()
                        .map(|l| GraphQLErrorLocation {
                            line: l.line,
                            column: l.column,
                        })
                        .collect(),
                    path: e.path,
                    extensions: e.extensions,
                })
                .collect();
            return Err(AdminShopifyError::GraphQL(converted_errors));
        }

        graphql_response.data.ok_or_else(|| {
            AdminShopifyError::GraphQL(vec![GraphQLError {
                message: "No data in response".to_string(),
                locations: vec![],
                path: vec![],
                extensions: None,
            }])
        })
    }

    // =========================================================================
    // Shop methods
    // =========================================================================

    /// Get the shop's name and primary domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn get_shop(&self) -> Result<Shop, AdminShopifyError> {
        let response = self.execute::<GetShop>(queries::get_shop::Variables).await?;

        Ok(convert_shop(response.shop))
    }

    // =========================================================================
    // Metaobject methods
    // =========================================================================

    /// Get a metaobject by numeric ID.
    ///
    /// Callers holding a reference such as `gid://shopify/Metaobject/123`
    /// extract the number with [`descsync_core::trailing_id`] first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self), fields(metaobject_id = %id))]
    pub async fn get_metaobject(
        &self,
        id: MetaobjectId,
    ) -> Result<Option<Metaobject>, AdminShopifyError> {
        let variables = queries::get_metaobject::Variables { id: id.to_gid() };

        let response = self.execute::<GetMetaobject>(variables).await?;

        Ok(response.metaobject.map(convert_metaobject))
    }
}

/// Round a `Retry-After` value (Shopify sends fractional seconds) up.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_seconds(secs: f64) -> u64 {
    secs.ceil().max(0.0) as u64
}

/// Check a page size against what the Admin API accepts.
fn checked_page_size(first: i64) -> Result<i64, AdminShopifyError> {
    if (1..=MAX_PAGE_SIZE).contains(&first) {
        Ok(first)
    } else {
        Err(AdminShopifyError::InvalidPageSize {
            requested: first,
            max: MAX_PAGE_SIZE,
        })
    }
}
