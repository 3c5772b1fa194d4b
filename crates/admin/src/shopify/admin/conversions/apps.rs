//! App and publication conversion functions.

use crate::shopify::types::{App, Publication};

use super::super::queries::{get_app, get_app_installations, get_publications};

pub fn convert_app(app: get_app::AppFields) -> App {
    App {
        id: app.id,
        title: app.title,
    }
}

pub fn convert_app_installations(
    installations: get_app_installations::GetAppInstallationsAppInstallations,
) -> Vec<App> {
    installations
        .nodes
        .into_iter()
        .map(|node| convert_app(node.app))
        .collect()
}

pub fn convert_publications(
    publications: get_publications::GetPublicationsPublications,
) -> Vec<Publication> {
    publications
        .nodes
        .into_iter()
        .map(|node| Publication {
            id: node.id,
            app: node.app.map(convert_app),
        })
        .collect()
}
