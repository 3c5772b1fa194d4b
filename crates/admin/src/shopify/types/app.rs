//! App and sales channel domain types.

use serde::{Deserialize, Serialize};

/// An installed app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// App global ID.
    pub id: String,
    /// App title.
    pub title: String,
}

/// A publication (sales channel) and the app that backs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Publication global ID.
    pub id: String,
    /// Backing app, if Shopify reports one.
    pub app: Option<App>,
}
