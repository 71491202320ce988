// ABOUTME: Integration tests for the public collection read routes
// ABOUTME: Verifies display order, active filtering, and that mutations are admin-only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use basecamp_core::models::{CollectionKind, Direction, ItemPayload};
use basecamp_server::server::build_router;
use common::{create_abc, create_test_server_resources};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_owned())
        .collect()
}

#[tokio::test]
async fn test_public_listing_follows_display_order() {
    let resources = create_test_server_resources().await.unwrap();
    let items = create_abc(&resources.database, CollectionKind::Tips)
        .await
        .unwrap();
    resources
        .collections()
        .reorder(CollectionKind::Tips, items[2].id, Direction::Up)
        .await
        .unwrap();

    let response = AxumTestRequest::get("/api/tips")
        .send(build_router(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(titles(&body), vec!["A", "C", "B"]);
}

#[tokio::test]
async fn test_public_listing_hides_inactive_items() {
    let resources = create_test_server_resources().await.unwrap();
    let items = create_abc(&resources.database, CollectionKind::Sliders)
        .await
        .unwrap();
    let hide = ItemPayload {
        is_active: Some(false),
        ..ItemPayload::default()
    };
    resources
        .collections()
        .update(CollectionKind::Sliders, items[1].id, &hide)
        .await
        .unwrap();

    let router = build_router(resources);

    let public: Value = AxumTestRequest::get("/api/sliders")
        .send(router.clone())
        .await
        .json();
    assert_eq!(titles(&public), vec!["A", "C"]);

    let admin: Value = AxumTestRequest::get("/api/admin/sliders")
        .send(router)
        .await
        .json();
    assert_eq!(titles(&admin), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_empty_collection_is_empty_array() {
    let resources = create_test_server_resources().await.unwrap();

    let response = AxumTestRequest::get("/api/header-menus")
        .send(build_router(resources))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_unknown_public_collection_is_not_found() {
    let resources = create_test_server_resources().await.unwrap();

    let response = AxumTestRequest::get("/api/blog-posts")
        .send(build_router(resources))
        .await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_public_api_rejects_mutations() {
    let resources = create_test_server_resources().await.unwrap();
    let items = create_abc(&resources.database, CollectionKind::Tips)
        .await
        .unwrap();
    let router = build_router(resources);

    let create = AxumTestRequest::post("/api/tips")
        .json(&json!({ "title": "D", "image": "https://x/d.jpg" }))
        .send(router.clone())
        .await;
    assert_eq!(create.status(), 405);

    let delete = AxumTestRequest::delete(&format!("/api/tips/{}", items[0].id))
        .send(router.clone())
        .await;
    assert_eq!(delete.status(), 404);

    let listing: Value = AxumTestRequest::get("/api/tips").send(router).await.json();
    assert_eq!(titles(&listing), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_admin_mutation_is_visible_publicly() {
    let resources = create_test_server_resources().await.unwrap();
    let router = build_router(resources);

    let created = AxumTestRequest::post("/api/admin/header-menus")
        .json(&json!({ "title": "Shop", "link": "/shop" }))
        .send(router.clone())
        .await;
    assert_eq!(created.status(), 201);

    let listing: Value = AxumTestRequest::get("/api/header-menus")
        .send(router)
        .await
        .json();
    assert_eq!(titles(&listing), vec!["Shop"]);
    assert_eq!(listing[0]["link"], "/shop");
    assert_eq!(listing[0]["is_active"], true);
    assert_eq!(listing[0]["order"], 0);
}

#[tokio::test]
async fn test_public_listing_storage_failure_is_internal_error() {
    let resources = create_test_server_resources().await.unwrap();
    resources.database.close().await;

    let response = AxumTestRequest::get("/api/tips")
        .send(build_router(resources))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
}
