//! Generate product descriptions from metafields and push them to Shopify.
//!
//! Composition reads the product's three description metafields, resolves
//! each ingredient reference to its metaobject display name (one request per
//! ingredient, in list order), and assembles the HTML with
//! [`DescriptionBuilder`]. Blank sections are written to the [`UpdateLog`]
//! and skipped; they never fail the run.

use descsync_core::{
    ComposedDescription, DescriptionBuilder, IngredientRef, MetaobjectId, ProductId, Section,
    trailing_id,
};
use thiserror::Error;
use tracing::instrument;

use crate::shopify::{AdminClient, AdminShopifyError, ProductMetafields, ProductUpdateOutcome};
use crate::update_log::UpdateLog;

/// Errors from the description workflows.
#[derive(Debug, Error)]
pub enum DescriptionError {
    /// The Admin API call failed.
    #[error(transparent)]
    Shopify(#[from] AdminShopifyError),

    /// No product exists with this ID.
    #[error("Product {0} not found")]
    ProductNotFound(ProductId),
}

/// A composed description together with the product it belongs to.
#[derive(Debug, Clone)]
pub struct DescriptionDraft {
    /// Product ID.
    pub product_id: ProductId,
    /// Product title.
    pub title: String,
    /// Assembled HTML and blank sections.
    pub composed: ComposedDescription,
}

/// Result of pushing a generated description.
#[derive(Debug, Clone)]
pub struct DescriptionUpdate {
    /// What was composed.
    pub draft: DescriptionDraft,
    /// Mutation outcome.
    pub outcome: ProductUpdateOutcome,
}

/// Compose a product's new description without changing anything remotely.
///
/// # Errors
///
/// Returns `DescriptionError::ProductNotFound` if the product does not exist,
/// or `DescriptionError::Shopify` if an Admin API call fails.
#[instrument(skip(client, log), fields(product_id = %product_id))]
pub async fn compose_description(
    client: &AdminClient,
    log: &UpdateLog,
    product_id: ProductId,
) -> Result<DescriptionDraft, DescriptionError> {
    let metafields = client
        .get_product_metafields(product_id)
        .await?
        .ok_or(DescriptionError::ProductNotFound(product_id))?;

    let composed = compose_from_metafields(client, log, &metafields).await?;

    for section in &composed.missing {
        tracing::info!(title = %metafields.title, %section, "Section is blank");
    }

    Ok(DescriptionDraft {
        product_id,
        title: metafields.title,
        composed,
    })
}

/// Assemble the description for already-fetched metafields.
///
/// Log lines are written as each section is evaluated, so a product's blank
/// sections and unresolved ingredients appear in section order.
///
/// # Errors
///
/// Returns `AdminShopifyError` if an ingredient lookup fails at the API level.
pub async fn compose_from_metafields(
    client: &AdminClient,
    log: &UpdateLog,
    metafields: &ProductMetafields,
) -> Result<ComposedDescription, AdminShopifyError> {
    let title = metafields.title.as_str();
    let mut builder = DescriptionBuilder::new(title);

    let description = metafields.description_text();
    if description.is_none() {
        log.append(&Section::Description.blank_message(title)).await;
    }
    builder.description(description);

    let how_to_take = metafields.how_to_take_text();
    if how_to_take.is_none() {
        log.append(&Section::HowToTake.blank_message(title)).await;
    }
    builder.how_to_take(how_to_take);

    let ingredients = match metafields.ingredient_refs() {
        Some(refs) => Some(resolve_ingredients(client, log, title, &refs).await?),
        None => {
            log.append(&Section::KeyIngredients.blank_message(title)).await;
            None
        }
    };
    builder.key_ingredients(ingredients);

    Ok(builder.finish())
}

/// Resolve ingredient entries to display names, one request at a time.
///
/// Entries that are malformed or point at a missing metaobject are logged
/// and left out.
async fn resolve_ingredients(
    client: &AdminClient,
    log: &UpdateLog,
    title: &str,
    refs: &[IngredientRef<'_>],
) -> Result<Vec<String>, AdminShopifyError> {
    let mut names = Vec::with_capacity(refs.len());

    for entry in refs {
        let id = match entry.as_str().map(trailing_id) {
            Some(Ok(id)) => MetaobjectId::new(id),
            Some(Err(e)) => {
                tracing::warn!(reference = %entry, error = %e, "Skipping malformed ingredient reference");
                log_unresolved(log, entry, title).await;
                continue;
            }
            None => {
                tracing::warn!(reference = %entry, "Skipping non-string ingredient entry");
                log_unresolved(log, entry, title).await;
                continue;
            }
        };

        match client.get_metaobject(id).await? {
            Some(metaobject) => names.push(metaobject.display_name),
            None => {
                tracing::warn!(reference = %entry, "Ingredient metaobject not found");
                log_unresolved(log, entry, title).await;
            }
        }
    }

    Ok(names)
}

async fn log_unresolved(log: &UpdateLog, entry: &IngredientRef<'_>, title: &str) {
    log.append(&format!(
        "Ingredient {entry} for {title} could not be resolved"
    ))
    .await;
}

/// Compose a product's description from its metafields and push it.
///
/// The mutation is always sent, even when every section is blank and the
/// composed HTML is empty. User errors from the mutation are logged and
/// returned in [`DescriptionUpdate::outcome`].
///
/// # Errors
///
/// Returns `DescriptionError::ProductNotFound` if the product does not exist,
/// or `DescriptionError::Shopify` if an Admin API call fails.
#[instrument(skip(client, log), fields(product_id = %product_id))]
pub async fn push_description(
    client: &AdminClient,
    log: &UpdateLog,
    product_id: ProductId,
) -> Result<DescriptionUpdate, DescriptionError> {
    let draft = compose_description(client, log, product_id).await?;

    if draft.composed.is_empty() {
        tracing::warn!(title = %draft.title, "Composed description is empty");
    }

    let outcome = client
        .update_product_description(product_id, &draft.composed.html)
        .await?;

    for error in &outcome.user_errors {
        log.append(&format!(
            "Update for {} returned a user error: {error}",
            draft.title
        ))
        .await;
    }

    if let Some(product) = &outcome.product {
        tracing::info!(title = %product.title, "Updated product description");
    }

    Ok(DescriptionUpdate {
        draft,
        outcome,
    })
}
