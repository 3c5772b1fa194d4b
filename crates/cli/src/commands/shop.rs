//! Shop information command.

use super::{CommandError, connect};

/// Print the shop name and primary domain.
#[allow(clippy::print_stdout)]
pub async fn show() -> Result<(), CommandError> {
    let (client, _) = connect()?;

    let shop = client.get_shop().await?;

    println!("{}", shop.name);
    println!("{} ({})", shop.primary_domain.host, shop.primary_domain.url);
    Ok(())
}
