//! Type conversions from GraphQL response types to domain types.
//!
//! These functions convert the `queries` response types into our clean
//! domain types.

mod apps;
mod products;

pub use apps::{convert_app, convert_app_installations, convert_publications};
pub use products::{
    convert_metaobject, convert_product, convert_product_list, convert_product_metafields,
    convert_product_update, convert_shop,
};
