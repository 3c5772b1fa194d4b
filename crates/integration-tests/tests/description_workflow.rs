//! Integration tests for composing, pushing and exporting descriptions.
//!
//! Each test serves metafields, metaobjects and the `productUpdate`
//! mutation from a `wiremock` server and checks both the HTML that reaches
//! the mutation and the lines written to the update log.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;

use descsync_admin::{
    AdminShopifyError, DescriptionError, ExportError, UpdateLog, compose_description,
    export_description, push_description, render_export,
};
use descsync_core::{ProductId, Section};
use descsync_integration_tests::{
    admin_client, graphql_data, metafields_data, mount_operation, operation, operation_with,
    rich_text,
};
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const COLLAGEN_HTML: &str = "Supports skin.<br /><br />\
    <b>How to Take Collagen</b><br /><br />Mix one scoop with water.<br /><br />\
    <b>Key Ingredients</b><br /><br />Hydrolysed Collagen<br /><br />Vitamin C";

fn temp_log() -> (TempDir, UpdateLog) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let log = UpdateLog::new(dir.path().join("update.log"));
    (dir, log)
}

/// Messages in the log, with the timestamp prefix stripped.
fn log_messages(path: &Path) -> Vec<String> {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    contents
        .lines()
        .map(|line| {
            let (_, message) = line.split_once(" - ").expect("line should have a timestamp");
            message.to_string()
        })
        .collect()
}

async fn mount_metaobject(server: &MockServer, id: u64, display_name: Option<&str>) {
    let gid = format!("gid://shopify/Metaobject/{id}");
    let metaobject = display_name.map_or(Value::Null, |name| {
        json!({ "id": gid, "displayName": name })
    });

    Mock::given(method("POST"))
        .and(operation_with("GetMetaobject", json!({ "id": gid })))
        .respond_with(graphql_data(json!({ "metaobject": metaobject })))
        .mount(server)
        .await;
}

async fn mount_collagen(server: &MockServer) {
    mount_operation(
        server,
        "GetProductMetafields",
        metafields_data(
            "Collagen",
            Some(rich_text("Supports skin.")),
            Some(json!("Mix one scoop with water.")),
            Some(json!([
                "gid://shopify/Metaobject/11",
                "gid://shopify/Metaobject/12"
            ])),
        ),
    )
    .await;
    mount_metaobject(server, 11, Some("Hydrolysed Collagen")).await;
    mount_metaobject(server, 12, Some("Vitamin C")).await;
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

#[tokio::test]
async fn compose_joins_all_sections_in_order() {
    let server = MockServer::start().await;
    mount_collagen(&server).await;
    let (_dir, log) = temp_log();

    let draft = compose_description(&admin_client(&server), &log, ProductId::new(1))
        .await
        .unwrap();

    assert_eq!(draft.title, "Collagen");
    assert_eq!(draft.composed.html, COLLAGEN_HTML);
    assert!(draft.composed.missing.is_empty());
    assert!(log_messages(log.path()).is_empty());
}

#[tokio::test]
async fn compose_logs_each_blank_section() {
    let server = MockServer::start().await;
    mount_operation(
        &server,
        "GetProductMetafields",
        metafields_data(
            "Sleep Burn",
            None,
            Some(json!("")),
            Some(json!(["gid://shopify/Metaobject/12"])),
        ),
    )
    .await;
    mount_metaobject(&server, 12, Some("Melatonin")).await;
    let (_dir, log) = temp_log();

    let draft = compose_description(&admin_client(&server), &log, ProductId::new(1))
        .await
        .unwrap();

    assert_eq!(
        draft.composed.html,
        "<b>Key Ingredients</b><br /><br />Melatonin"
    );
    assert_eq!(
        draft.composed.missing,
        vec![Section::Description, Section::HowToTake]
    );
    assert_eq!(
        log_messages(log.path()),
        vec![
            "Product description for Sleep Burn is blank!",
            "How to Take section for Sleep Burn is blank!",
        ]
    );
}

#[tokio::test]
async fn compose_skips_unresolved_ingredients() {
    let server = MockServer::start().await;
    mount_operation(
        &server,
        "GetProductMetafields",
        metafields_data(
            "Carb Blocker",
            Some(rich_text("Blocks carbs.")),
            None,
            Some(json!([
                "not-a-reference",
                7,
                "gid://shopify/Metaobject/99",
                "gid://shopify/Metaobject/12"
            ])),
        ),
    )
    .await;
    mount_metaobject(&server, 99, None).await;
    mount_metaobject(&server, 12, Some("White Kidney Bean")).await;
    let (_dir, log) = temp_log();

    let draft = compose_description(&admin_client(&server), &log, ProductId::new(1))
        .await
        .unwrap();

    assert_eq!(
        draft.composed.html,
        "Blocks carbs.<br /><br /><b>Key Ingredients</b><br /><br />White Kidney Bean"
    );
    assert_eq!(
        log_messages(log.path()),
        vec![
            "How to Take section for Carb Blocker is blank!",
            "Ingredient not-a-reference for Carb Blocker could not be resolved",
            "Ingredient 7 for Carb Blocker could not be resolved",
            "Ingredient gid://shopify/Metaobject/99 for Carb Blocker could not be resolved",
        ]
    );
}

#[tokio::test]
async fn compose_treats_null_json_value_as_blank() {
    let server = MockServer::start().await;
    mount_operation(
        &server,
        "GetProductMetafields",
        json!({
            "product": {
                "id": "gid://shopify/Product/1",
                "title": "Collagen",
                "productDescription": { "jsonValue": null },
                "howToTake": { "jsonValue": "Mix one scoop with water." },
                "keyIngredients": { "jsonValue": null }
            }
        }),
    )
    .await;
    let (_dir, log) = temp_log();

    let draft = compose_description(&admin_client(&server), &log, ProductId::new(1))
        .await
        .unwrap();

    assert_eq!(
        draft.composed.html,
        "<b>How to Take Collagen</b><br /><br />Mix one scoop with water."
    );
    assert_eq!(
        draft.composed.missing,
        vec![Section::Description, Section::KeyIngredients]
    );
    assert_eq!(
        log_messages(log.path()),
        vec![
            "Product description for Collagen is blank!",
            "Key ingredients section for Collagen is blank!",
        ]
    );
}

#[tokio::test]
async fn compose_reports_missing_product() {
    let server = MockServer::start().await;
    mount_operation(&server, "GetProductMetafields", json!({ "product": null })).await;
    let (_dir, log) = temp_log();

    let err = compose_description(&admin_client(&server), &log, ProductId::new(404))
        .await
        .unwrap_err();

    assert!(
        matches!(err, DescriptionError::ProductNotFound(id) if id == ProductId::new(404)),
        "got {err:?}"
    );
}

// ---------------------------------------------------------------------------
// Pushing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn push_sends_composed_html_to_product_update() {
    let server = MockServer::start().await;
    mount_collagen(&server).await;

    Mock::given(method("POST"))
        .and(operation_with(
            "ProductUpdate",
            json!({
                "input": {
                    "id": "gid://shopify/Product/1",
                    "descriptionHtml": COLLAGEN_HTML
                }
            }),
        ))
        .respond_with(graphql_data(json!({
            "productUpdate": {
                "product": {
                    "id": "gid://shopify/Product/1",
                    "title": "Collagen",
                    "descriptionHtml": COLLAGEN_HTML
                },
                "userErrors": []
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let (_dir, log) = temp_log();

    let update = push_description(&admin_client(&server), &log, ProductId::new(1))
        .await
        .unwrap();

    assert!(update.outcome.is_success());
    assert_eq!(
        update.outcome.product.unwrap().description_html,
        COLLAGEN_HTML
    );
    assert!(log_messages(log.path()).is_empty());
}

#[tokio::test]
async fn push_logs_user_errors_without_failing() {
    let server = MockServer::start().await;
    mount_collagen(&server).await;
    mount_operation(
        &server,
        "ProductUpdate",
        json!({
            "productUpdate": {
                "product": null,
                "userErrors": [
                    { "field": ["descriptionHtml"], "message": "is too long" }
                ]
            }
        }),
    )
    .await;
    let (_dir, log) = temp_log();

    let update = push_description(&admin_client(&server), &log, ProductId::new(1))
        .await
        .unwrap();

    assert!(!update.outcome.is_success());
    assert_eq!(update.outcome.user_errors.len(), 1);
    assert_eq!(
        log_messages(log.path()),
        vec!["Update for Collagen returned a user error: descriptionHtml: is too long"]
    );
}

#[tokio::test]
async fn push_sends_empty_html_when_all_sections_blank() {
    let server = MockServer::start().await;
    mount_operation(
        &server,
        "GetProductMetafields",
        metafields_data("Shaker Bottle", None, None, None),
    )
    .await;

    Mock::given(method("POST"))
        .and(operation_with(
            "ProductUpdate",
            json!({
                "input": {
                    "id": "gid://shopify/Product/1",
                    "descriptionHtml": ""
                }
            }),
        ))
        .respond_with(graphql_data(json!({
            "productUpdate": {
                "product": {
                    "id": "gid://shopify/Product/1",
                    "title": "Shaker Bottle",
                    "descriptionHtml": ""
                },
                "userErrors": []
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let (_dir, log) = temp_log();

    let update = push_description(&admin_client(&server), &log, ProductId::new(1))
        .await
        .unwrap();

    assert!(update.draft.composed.is_empty());
    assert!(update.outcome.is_success());
    assert_eq!(
        log_messages(log.path()),
        vec![
            "Product description for Shaker Bottle is blank!",
            "How to Take section for Shaker Bottle is blank!",
            "Key ingredients section for Shaker Bottle is blank!",
        ]
    );
}

#[tokio::test]
async fn push_sends_heading_for_empty_ingredient_list() {
    let server = MockServer::start().await;
    mount_operation(
        &server,
        "GetProductMetafields",
        metafields_data("Shaker Bottle", None, None, Some(json!([]))),
    )
    .await;

    Mock::given(method("POST"))
        .and(operation_with(
            "ProductUpdate",
            json!({ "input": { "descriptionHtml": "<b>Key Ingredients</b>" } }),
        ))
        .respond_with(graphql_data(json!({
            "productUpdate": { "product": null, "userErrors": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let (_dir, log) = temp_log();

    let update = push_description(&admin_client(&server), &log, ProductId::new(1))
        .await
        .unwrap();

    assert_eq!(update.draft.composed.html, "<b>Key Ingredients</b>");
    assert_eq!(
        update.draft.composed.missing,
        vec![Section::Description, Section::HowToTake]
    );
}

#[tokio::test]
async fn push_aborts_when_ingredient_lookup_fails() {
    let server = MockServer::start().await;
    mount_operation(
        &server,
        "GetProductMetafields",
        metafields_data(
            "Collagen",
            Some(rich_text("Supports skin.")),
            None,
            Some(json!(["gid://shopify/Metaobject/11"])),
        ),
    )
    .await;

    Mock::given(method("POST"))
        .and(operation("GetMetaobject"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(operation("ProductUpdate"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let (_dir, log) = temp_log();

    let err = push_description(&admin_client(&server), &log, ProductId::new(1))
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            DescriptionError::Shopify(AdminShopifyError::UnexpectedStatus { status: 502, .. })
        ),
        "got {err:?}"
    );
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[tokio::test]
async fn export_appends_plain_and_html_blocks() {
    let server = MockServer::start().await;
    mount_operation(
        &server,
        "GetProduct",
        json!({
            "product": {
                "id": "gid://shopify/Product/1",
                "title": "Collagen",
                "handle": "collagen",
                "description": "Supports skin.",
                "descriptionHtml": "<p>Supports skin.</p>"
            }
        }),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("descriptions.txt");
    let client = admin_client(&server);

    let product = export_description(&client, ProductId::new(1), &out)
        .await
        .unwrap();
    export_description(&client, ProductId::new(1), &out)
        .await
        .unwrap();

    let block = render_export(&product);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), format!("{block}{block}"));
}

#[tokio::test]
async fn export_reports_missing_product_without_writing() {
    let server = MockServer::start().await;
    mount_operation(&server, "GetProduct", json!({ "product": null })).await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("descriptions.txt");

    let err = export_description(&admin_client(&server), ProductId::new(9), &out)
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::ProductNotFound(_)), "got {err:?}");
    assert!(!out.exists());
}
