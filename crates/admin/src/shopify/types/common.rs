//! Common domain types shared across Shopify Admin API.

use serde::{Deserialize, Serialize};

// =============================================================================
// Shop Types
// =============================================================================

/// A shop domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Host name (e.g., `shop.example.com`).
    pub host: String,
    /// Full URL including scheme.
    pub url: String,
}

/// Basic shop information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    /// Shop name.
    pub name: String,
    /// Primary storefront domain.
    pub primary_domain: Domain,
}

// =============================================================================
// Mutation Types
// =============================================================================

/// A field-level error returned by a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    /// Path to the offending input field, if any.
    pub field: Vec<String>,
    /// Human-readable message.
    pub message: String,
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.field.join("."), self.message)
        }
    }
}
