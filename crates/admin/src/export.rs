//! Append a product's current descriptions to a text file.

use std::path::Path;

use descsync_core::ProductId;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tracing::instrument;

use crate::shopify::{AdminClient, AdminShopifyError, Product};

/// Default export file name.
pub const DEFAULT_EXPORT_FILE: &str = "foo.txt";

/// Errors from exporting a description.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The Admin API call failed.
    #[error(transparent)]
    Shopify(#[from] AdminShopifyError),

    /// No product exists with this ID.
    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    /// Writing the export file failed.
    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the two export blocks for a product: plain text, then HTML.
#[must_use]
pub fn render_export(product: &Product) -> String {
    format!(
        "{title}\n\nProduct Description:\n{plain}\n\n\
         {title}\n\nProduct Description in HTML:\n{html}\n\n\n",
        title = product.title,
        plain = product.description,
        html = product.description_html,
    )
}

/// Fetch a product and append its plain-text and HTML descriptions to `path`.
///
/// # Errors
///
/// Returns `ExportError::ProductNotFound` if the product does not exist,
/// `ExportError::Shopify` if the API call fails, or `ExportError::Io` if the
/// file cannot be written.
#[instrument(skip(client, path), fields(product_id = %product_id, path = %path.as_ref().display()))]
pub async fn export_description(
    client: &AdminClient,
    product_id: ProductId,
    path: impl AsRef<Path>,
) -> Result<Product, ExportError> {
    let product = client
        .get_product(product_id)
        .await?
        .ok_or(ExportError::ProductNotFound(product_id))?;

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())
        .await?;
    file.write_all(render_export(&product).as_bytes()).await?;
    file.flush().await?;

    tracing::info!(title = %product.title, "Exported product description");
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_export() {
        let product = Product {
            id: "gid://shopify/Product/1".to_string(),
            title: "Collagen".to_string(),
            handle: "collagen".to_string(),
            description: "Supports skin.".to_string(),
            description_html: "<p>Supports skin.</p>".to_string(),
        };

        assert_eq!(
            render_export(&product),
            "Collagen\n\nProduct Description:\nSupports skin.\n\n\
             Collagen\n\nProduct Description in HTML:\n<p>Supports skin.</p>\n\n\n"
        );
    }
}
