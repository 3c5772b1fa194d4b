//! Product catalog listing.

use descsync_core::PRODUCT_CATALOG;

/// Print every catalog alias with its product ID.
#[allow(clippy::print_stdout)]
pub fn list() {
    let width = PRODUCT_CATALOG
        .iter()
        .map(|e| e.alias.len())
        .max()
        .unwrap_or_default();

    for entry in PRODUCT_CATALOG {
        println!("{:<width$}  {}", entry.alias, entry.id);
    }
}
