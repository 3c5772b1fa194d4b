//! Metaobject domain types.

use serde::{Deserialize, Serialize};

/// A metaobject (here, an ingredient referenced from a product metafield).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metaobject {
    /// Metaobject global ID.
    pub id: String,
    /// Display name shown to shoppers.
    pub display_name: String,
}
