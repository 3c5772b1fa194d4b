//! Shop, product and metaobject conversion functions.

use crate::shopify::types::{
    Domain, Metaobject, Product, ProductMetafields, ProductSummary, ProductUpdateOutcome, Shop,
    UpdatedProduct, UserError,
};

use super::super::queries::{
    get_metaobject, get_product, get_product_metafields, get_products, get_shop, product_update,
};

pub fn convert_shop(shop: get_shop::GetShopShop) -> Shop {
    Shop {
        name: shop.name,
        primary_domain: Domain {
            host: shop.primary_domain.host,
            url: shop.primary_domain.url,
        },
    }
}

pub fn convert_product_list(products: get_products::GetProductsProducts) -> Vec<ProductSummary> {
    products
        .nodes
        .into_iter()
        .map(|node| ProductSummary {
            id: node.id,
            title: node.title,
        })
        .collect()
}

pub fn convert_product(product: get_product::GetProductProduct) -> Product {
    Product {
        id: product.id,
        title: product.title,
        handle: product.handle,
        description: product.description,
        description_html: product.description_html,
    }
}

pub fn convert_product_metafields(
    product: get_product_metafields::GetProductMetafieldsProduct,
) -> ProductMetafields {
    ProductMetafields {
        id: product.id,
        title: product.title,
        // A metafield that exists but holds null counts as absent.
        description: product
            .product_description
            .map(|m| m.json_value)
            .filter(|v| !v.is_null()),
        how_to_take: product
            .how_to_take
            .map(|m| m.json_value)
            .filter(|v| !v.is_null()),
        key_ingredients: product
            .key_ingredients
            .map(|m| m.json_value)
            .filter(|v| !v.is_null()),
    }
}

pub fn convert_product_update(
    payload: Option<product_update::ProductUpdateProductUpdate>,
) -> ProductUpdateOutcome {
    let Some(payload) = payload else {
        return ProductUpdateOutcome::default();
    };

    ProductUpdateOutcome {
        product: payload.product.map(|p| UpdatedProduct {
            id: p.id,
            title: p.title,
            description_html: p.description_html,
        }),
        user_errors: payload
            .user_errors
            .into_iter()
            .map(|e| UserError {
                field: e.field.unwrap_or_default(),
                message: e.message,
            })
            .collect(),
    }
}

pub fn convert_metaobject(metaobject: get_metaobject::GetMetaobjectMetaobject) -> Metaobject {
    Metaobject {
        id: metaobject.id,
        display_name: metaobject.display_name,
    }
}
