//! Product domain types for Shopify Admin API.

use descsync_core::{IngredientRef, how_to_take_text, ingredient_refs, rich_text_value};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::UserError;

// =============================================================================
// Product Types
// =============================================================================

/// A product as listed by `products(first:)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Product global ID.
    pub id: String,
    /// Product title.
    pub title: String,
}

/// A product's basic information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product global ID.
    pub id: String,
    /// Product title.
    pub title: String,
    /// URL handle.
    pub handle: String,
    /// Plain text description.
    pub description: String,
    /// HTML description.
    pub description_html: String,
}

/// The metafields a generated description is built from.
///
/// Each value is the metafield's `jsonValue`, or `None` when the product has
/// no such metafield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetafields {
    /// Product global ID.
    pub id: String,
    /// Product title.
    pub title: String,
    /// Rich-text description.
    pub description: Option<Value>,
    /// "How to take" text.
    pub how_to_take: Option<Value>,
    /// List of ingredient metaobject global IDs.
    pub key_ingredients: Option<Value>,
}

impl ProductMetafields {
    /// Description text, if present and non-empty.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_ref().and_then(rich_text_value)
    }

    /// "How to take" text, if present and non-empty.
    #[must_use]
    pub fn how_to_take_text(&self) -> Option<&str> {
        self.how_to_take.as_ref().and_then(how_to_take_text)
    }

    /// Ingredient list entries, if the metafield holds a list.
    #[must_use]
    pub fn ingredient_refs(&self) -> Option<Vec<IngredientRef<'_>>> {
        self.key_ingredients.as_ref().and_then(ingredient_refs)
    }
}

/// Product fields echoed back by `productUpdate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedProduct {
    /// Product global ID.
    pub id: String,
    /// Product title.
    pub title: String,
    /// New HTML description.
    pub description_html: String,
}

/// Result of a `productUpdate` mutation.
///
/// User errors are carried here rather than raised, so the caller decides
/// whether they matter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductUpdateOutcome {
    /// The updated product, if the mutation returned one.
    pub product: Option<UpdatedProduct>,
    /// Field-level errors.
    pub user_errors: Vec<UserError>,
}

impl ProductUpdateOutcome {
    /// Whether Shopify accepted the update without user errors.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.user_errors.is_empty() && self.product.is_some()
    }
}
