//! Product operations for the Admin API.

use tracing::instrument;

use descsync_core::ProductId;

use super::{
    AdminClient, AdminShopifyError, checked_page_size,
    conversions::{
        convert_product, convert_product_list, convert_product_metafields, convert_product_update,
    },
    queries::{self, GetProduct, GetProductMetafields, GetProducts, ProductUpdate},
};
use crate::shopify::types::{Product, ProductMetafields, ProductSummary, ProductUpdateOutcome};

impl AdminClient {
    /// Get the first page of products.
    ///
    /// # Arguments
    ///
    /// * `first` - Number of products to return (1-250). There is no
    ///   pagination: stores with more products only see the first page.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::InvalidPageSize` for an out-of-range
    /// `first`, or an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products(&self, first: i64) -> Result<Vec<ProductSummary>, AdminShopifyError> {
        let variables = queries::get_products::Variables {
            first: checked_page_size(first)?,
        };

        let response = self.execute::<GetProducts>(variables).await?;

        Ok(convert_product_list(response.products))
    }

    /// Get a product's title, handle and descriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Option<Product>, AdminShopifyError> {
        let variables = queries::get_product::Variables { id: id.to_gid() };

        let response = self.execute::<GetProduct>(variables).await?;

        Ok(response.product.map(convert_product))
    }

    /// Get the metafields a generated description is built from.
    ///
    /// Uses the namespace and keys the client was configured with.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product_metafields(
        &self,
        id: ProductId,
    ) -> Result<Option<ProductMetafields>, AdminShopifyError> {
        let keys = self.metafields();
        let variables = queries::get_product_metafields::Variables {
            id: id.to_gid(),
            namespace: keys.namespace.clone(),
            key_description: keys.description.clone(),
            key_how_to_take: keys.how_to_take.clone(),
            key_ingredients: keys.ingredients.clone(),
        };

        let response = self.execute::<GetProductMetafields>(variables).await?;

        Ok(response.product.map(convert_product_metafields))
    }

    /// Replace a product's HTML description.
    ///
    /// Field-level `userErrors` do not fail the call: they are logged and
    /// returned in the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns GraphQL errors.
    #[instrument(skip(self, description_html), fields(product_id = %id, len = description_html.len()))]
    pub async fn update_product_description(
        &self,
        id: ProductId,
        description_html: &str,
    ) -> Result<ProductUpdateOutcome, AdminShopifyError> {
        let variables = queries::product_update::Variables {
            input: queries::product_update::ProductInput {
                id: id.to_gid(),
                description_html: description_html.to_string(),
            },
        };

        let response = self.execute::<ProductUpdate>(variables).await?;
        let outcome = convert_product_update(response.product_update);

        for error in &outcome.user_errors {
            tracing::warn!(%error, "productUpdate returned a user error");
        }

        Ok(outcome)
    }
}
