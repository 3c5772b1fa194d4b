//! GraphQL operation definitions for Shopify Admin API.
//!
//! Each operation lives in its own module laid out the way `graphql_client`
//! codegen lays it out (`OPERATION_NAME`, `QUERY`, `Variables`,
//! `ResponseData`), and a unit struct implements [`GraphQLQuery`] for it so
//! the client can execute it generically.

use graphql_client::{GraphQLQuery, QueryBody};

/// Implement [`GraphQLQuery`] for an operation module.
macro_rules! graphql_operation {
    ($(#[$meta:meta])* $name:ident => $module:ident) => {
        $(#[$meta])*
        pub struct $name;

        impl GraphQLQuery for $name {
            type Variables = $module::Variables;
            type ResponseData = $module::ResponseData;

            fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
                QueryBody {
                    variables,
                    query: $module::QUERY,
                    operation_name: $module::OPERATION_NAME,
                }
            }
        }
    };
}

// =============================================================================
// Shop queries
// =============================================================================

graphql_operation!(
    /// Shop name and primary domain.
    GetShop => get_shop
);

pub mod get_shop {
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "GetShop";
    pub const QUERY: &str = r"query GetShop {
  shop {
    name
    primaryDomain {
      host
      url
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub shop: GetShopShop,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GetShopShop {
        pub name: String,
        pub primary_domain: GetShopShopPrimaryDomain,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GetShopShopPrimaryDomain {
        pub host: String,
        pub url: String,
    }
}

// =============================================================================
// Product queries
// =============================================================================

graphql_operation!(
    /// One page of product IDs and titles.
    GetProducts => get_products
);

pub mod get_products {
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "GetProducts";
    pub const QUERY: &str = r"query GetProducts($first: Int!) {
  products(first: $first) {
    nodes {
      id
      title
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub first: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub products: GetProductsProducts,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GetProductsProducts {
        pub nodes: Vec<GetProductsProductsNodes>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GetProductsProductsNodes {
        pub id: String,
        pub title: String,
    }
}

graphql_operation!(
    /// A single product's title, handle and descriptions.
    GetProduct => get_product
);

pub mod get_product {
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "GetProduct";
    pub const QUERY: &str = r"query GetProduct($id: ID!) {
  product(id: $id) {
    id
    title
    handle
    description
    descriptionHtml
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub product: Option<GetProductProduct>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GetProductProduct {
        pub id: String,
        pub title: String,
        pub handle: String,
        pub description: String,
        pub description_html: String,
    }
}

graphql_operation!(
    /// The three metafields a generated description is built from.
    GetProductMetafields => get_product_metafields
);

pub mod get_product_metafields {
    use serde::{Deserialize, Serialize};
    use serde_json::Value;

    pub const OPERATION_NAME: &str = "GetProductMetafields";
    pub const QUERY: &str = r"query GetProductMetafields($id: ID!, $namespace: String!, $keyDescription: String!, $keyHowToTake: String!, $keyIngredients: String!) {
  product(id: $id) {
    id
    title
    productDescription: metafield(namespace: $namespace, key: $keyDescription) {
      jsonValue
    }
    howToTake: metafield(namespace: $namespace, key: $keyHowToTake) {
      jsonValue
    }
    keyIngredients: metafield(namespace: $namespace, key: $keyIngredients) {
      jsonValue
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub id: String,
        pub namespace: String,
        pub key_description: String,
        pub key_how_to_take: String,
        pub key_ingredients: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub product: Option<GetProductMetafieldsProduct>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GetProductMetafieldsProduct {
        pub id: String,
        pub title: String,
        pub product_description: Option<MetafieldValue>,
        pub how_to_take: Option<MetafieldValue>,
        pub key_ingredients: Option<MetafieldValue>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MetafieldValue {
        #[serde(default)]
        pub json_value: Value,
    }
}

graphql_operation!(
    /// Replace a product's HTML description.
    ProductUpdate => product_update
);

pub mod product_update {
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "ProductUpdate";
    pub const QUERY: &str = r"mutation ProductUpdate($input: ProductInput!) {
  productUpdate(input: $input) {
    product {
      id
      title
      descriptionHtml
    }
    userErrors {
      field
      message
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: ProductInput,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductInput {
        pub id: String,
        pub description_html: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_update: Option<ProductUpdateProductUpdate>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductUpdateProductUpdate {
        pub product: Option<ProductUpdateProductUpdateProduct>,
        pub user_errors: Vec<ProductUpdateProductUpdateUserErrors>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductUpdateProductUpdateProduct {
        pub id: String,
        pub title: String,
        pub description_html: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductUpdateProductUpdateUserErrors {
        pub field: Option<Vec<String>>,
        pub message: String,
    }
}

// =============================================================================
// Metaobject queries
// =============================================================================

graphql_operation!(
    /// A metaobject's display name.
    GetMetaobject => get_metaobject
);

pub mod get_metaobject {
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "GetMetaobject";
    pub const QUERY: &str = r"query GetMetaobject($id: ID!) {
  metaobject(id: $id) {
    id
    displayName
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub metaobject: Option<GetMetaobjectMetaobject>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GetMetaobjectMetaobject {
        pub id: String,
        pub display_name: String,
    }
}

// =============================================================================
// App queries
// =============================================================================

graphql_operation!(
    /// A single app's title.
    GetApp => get_app
);

pub mod get_app {
    use serde::{Deserialize, Serialize};

    pub const OPERATION_NAME: &str = "GetApp";
    pub const QUERY: &str = r"query GetApp($id: ID!) {
  app(id: $id) {
    id
    title
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub app: Option<AppFields>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct AppFields {
        pub id: String,
        pub title: String,
    }
}

graphql_operation!(
    /// One page of installed apps.
    GetAppInstallations => get_app_installations
);

pub mod get_app_installations {
    use serde::{Deserialize, Serialize};

    pub use super::get_app::AppFields;

    pub const OPERATION_NAME: &str = "GetAppInstallations";
    pub const QUERY: &str = r"query GetAppInstallations($first: Int!) {
  appInstallations(first: $first) {
    nodes {
      app {
        id
        title
      }
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub first: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub app_installations: GetAppInstallationsAppInstallations,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GetAppInstallationsAppInstallations {
        pub nodes: Vec<GetAppInstallationsAppInstallationsNodes>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GetAppInstallationsAppInstallationsNodes {
        pub app: AppFields,
    }
}

graphql_operation!(
    /// One page of publications (sales channels).
    GetPublications => get_publications
);

pub mod get_publications {
    use serde::{Deserialize, Serialize};

    pub use super::get_app::AppFields;

    pub const OPERATION_NAME: &str = "GetPublications";
    pub const QUERY: &str = r"query GetPublications($first: Int!) {
  publications(first: $first) {
    nodes {
      id
      app {
        id
        title
      }
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub first: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub publications: GetPublicationsPublications,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GetPublicationsPublications {
        pub nodes: Vec<GetPublicationsPublicationsNodes>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GetPublicationsPublicationsNodes {
        pub id: String,
        pub app: Option<AppFields>,
    }
}
