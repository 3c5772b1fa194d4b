//! App and sales channel operations for the Admin API.

use tracing::instrument;

use descsync_core::AppId;

use super::{
    AdminClient, AdminShopifyError, checked_page_size,
    conversions::{convert_app, convert_app_installations, convert_publications},
    queries::{self, GetApp, GetAppInstallations, GetPublications},
};
use crate::shopify::types::{App, Publication};

impl AdminClient {
    /// Get an app by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self), fields(app_id = %id))]
    pub async fn get_app(&self, id: AppId) -> Result<Option<App>, AdminShopifyError> {
        let variables = queries::get_app::Variables { id: id.to_gid() };

        let response = self.execute::<GetApp>(variables).await?;

        Ok(response.app.map(convert_app))
    }

    /// Get the first page of installed apps.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::InvalidPageSize` for an out-of-range
    /// `first`, or an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_app_installations(&self, first: i64) -> Result<Vec<App>, AdminShopifyError> {
        let variables = queries::get_app_installations::Variables {
            first: checked_page_size(first)?,
        };

        let response = self.execute::<GetAppInstallations>(variables).await?;

        Ok(convert_app_installations(response.app_installations))
    }

    /// Get the first page of publications (sales channels).
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::InvalidPageSize` for an out-of-range
    /// `first`, or an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_publications(
        &self,
        first: i64,
    ) -> Result<Vec<Publication>, AdminShopifyError> {
        let variables = queries::get_publications::Variables {
            first: checked_page_size(first)?,
        };

        let response = self.execute::<GetPublications>(variables).await?;

        Ok(convert_publications(response.publications))
    }
}
