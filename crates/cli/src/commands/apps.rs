//! App and sales channel commands.

use descsync_core::AppId;

use super::{CommandError, connect};

/// Print the first page of installed apps.
#[allow(clippy::print_stdout)]
pub async fn list(first: i64) -> Result<(), CommandError> {
    let (client, _) = connect()?;

    for app in client.get_app_installations(first).await? {
        println!("{}\t{}", app.id, app.title);
    }
    Ok(())
}

/// Print one app.
#[allow(clippy::print_stdout)]
pub async fn show(reference: &str) -> Result<(), CommandError> {
    let id: AppId = reference.parse()?;
    let (client, _) = connect()?;

    let app = client
        .get_app(id)
        .await?
        .ok_or_else(|| CommandError::NotFound(id.to_gid()))?;

    println!("{}\t{}", app.id, app.title);
    Ok(())
}

/// Print the first page of sales channels and their backing apps.
#[allow(clippy::print_stdout)]
pub async fn channels(first: i64) -> Result<(), CommandError> {
    let (client, _) = connect()?;

    for publication in client.get_publications(first).await? {
        let app = publication
            .app
            .map_or_else(|| "-".to_string(), |app| app.title);
        println!("{}\t{}", publication.id, app);
    }
    Ok(())
}
