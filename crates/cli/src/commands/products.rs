//! Product commands: list, show, preview, update, export.
//!
//! # Usage
//!
//! ```bash
//! # Preview without touching the store
//! descsync products preview sleepBurn2x1
//!
//! # Push generated descriptions for a few products
//! descsync products update collagen carbBlocker 7601001332995
//! ```

use std::path::Path;

use descsync_admin::{compose_description, export_description, push_description};
use descsync_core::{PRODUCT_CATALOG, ProductId, resolve_product};

use super::{CommandError, connect};

/// Print the first page of products.
#[allow(clippy::print_stdout)]
pub async fn list(first: i64) -> Result<(), CommandError> {
    let (client, _) = connect()?;

    for product in client.get_products(first).await? {
        println!("{}\t{}", product.id, product.title);
    }
    Ok(())
}

/// Print a product's basic fields and current descriptions.
#[allow(clippy::print_stdout)]
pub async fn show(reference: &str) -> Result<(), CommandError> {
    let id = resolve_product(reference)?;
    let (client, _) = connect()?;

    let product = client
        .get_product(id)
        .await?
        .ok_or_else(|| CommandError::NotFound(id.to_gid()))?;

    println!("{} ({})", product.title, product.id);
    println!("handle: {}", product.handle);
    println!();
    println!("{}", product.description);
    println!();
    println!("{}", product.description_html);
    Ok(())
}

/// Print the description that `update` would push.
#[allow(clippy::print_stdout)]
pub async fn preview(reference: &str) -> Result<(), CommandError> {
    let id = resolve_product(reference)?;
    let (client, log) = connect()?;

    let draft = compose_description(&client, &log, id).await?;

    println!("{}", draft.composed.html);
    Ok(())
}

/// Compose and push descriptions, one product at a time.
///
/// A failing product is logged and the run continues; the command fails at
/// the end if any product failed.
pub async fn update(references: &[String], all_catalog: bool) -> Result<(), CommandError> {
    let ids: Vec<ProductId> = if all_catalog {
        PRODUCT_CATALOG.iter().map(|e| e.id).collect()
    } else {
        references
            .iter()
            .map(|r| resolve_product(r))
            .collect::<Result<_, _>>()?
    };
    let (client, log) = connect()?;

    let mut failed = 0;
    for id in &ids {
        match push_description(&client, &log, *id).await {
            Ok(update) if update.outcome.is_success() => {
                tracing::info!(product_id = %id, title = %update.draft.title, "Description updated");
            }
            Ok(update) => {
                tracing::warn!(
                    product_id = %id,
                    user_errors = update.outcome.user_errors.len(),
                    "Description update was not accepted"
                );
            }
            Err(e) => {
                failed += 1;
                tracing::error!(product_id = %id, error = %e, "Description update failed");
            }
        }
    }

    if failed > 0 {
        return Err(CommandError::PartialFailure {
            failed,
            total: ids.len(),
        });
    }
    Ok(())
}

/// Append a product's descriptions to `out`.
pub async fn export(reference: &str, out: &Path) -> Result<(), CommandError> {
    let id = resolve_product(reference)?;
    let (client, _) = connect()?;

    let product = export_description(&client, id, out).await?;

    tracing::info!(title = %product.title, path = %out.display(), "Exported description");
    Ok(())
}
