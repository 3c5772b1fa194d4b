//! Metaobject lookup command.

use descsync_core::{MetaobjectId, trailing_id};

use super::{CommandError, connect};

/// Print a metaobject's display name.
///
/// Accepts a bare number or any reference ending in one, such as
/// `gid://shopify/Metaobject/123`.
#[allow(clippy::print_stdout)]
pub async fn show(reference: &str) -> Result<(), CommandError> {
    let id = MetaobjectId::new(trailing_id(reference)?);
    let (client, _) = connect()?;

    let metaobject = client
        .get_metaobject(id)
        .await?
        .ok_or_else(|| CommandError::NotFound(id.to_gid()))?;

    println!("{}\t{}", metaobject.id, metaobject.display_name);
    Ok(())
}
