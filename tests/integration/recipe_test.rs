//! Integration tests for recipe creation, listing, copying, and archiving.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use helpers::{TestApp, recipe_data};

#[tokio::test]
async fn test_create_recipe_starts_at_initial_version() {
    let app = TestApp::new();
    let owner = Uuid::new_v4();
    let token = app.token_for(owner);

    let response = app
        .request(
            "POST",
            "/api/recipes",
            Some(json!({ "recipeData": recipe_data("Morning V60", 18.0) })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.str("version"), "1.0");
    assert_eq!(response.str("currentVersion"), "1.0");
    assert_eq!(response.str("ownerId"), owner.to_string());
    assert_eq!(response.str("name"), "Morning V60");
    assert_eq!(response.body["isCurrent"], true);
    assert_eq!(response.body["isArchived"], false);
    assert_eq!(response.body["originalRecipeId"], serde_json::Value::Null);
    assert_eq!(
        response.body["versionInfo"]["changes"][0]["description"],
        "Created recipe"
    );
}

#[tokio::test]
async fn test_create_recipe_rejects_invalid_data() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());

    let response = app
        .request(
            "POST",
            "/api/recipes",
            Some(json!({ "recipeData": recipe_data("", 18.0) })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.str("error"), "VALIDATION_ERROR");

    let response = app
        .request(
            "POST",
            "/api/recipes",
            Some(json!({ "recipeData": { "name": "No dose" } })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_recipe() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());

    let response = app
        .request(
            "GET",
            &format!("/api/recipes/{}", Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.str("error"), "NOT_FOUND");
}

#[tokio::test]
async fn test_legacy_update_creates_main_version() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());
    let id = app.create_recipe(&token, recipe_data("Kalita", 16.0)).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/recipes/{id}"),
            Some(json!({ "recipeData": recipe_data("Kalita Wave", 16.0) })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.str("version"), "2.0");
    assert_eq!(response.str("name"), "Kalita Wave");
    assert_eq!(response.body["versionInfo"]["changes"][0]["field"], "name");
}

#[tokio::test]
async fn test_copy_records_provenance_and_leaves_source_untouched() {
    let app = TestApp::new();
    let alice = app.token_for(Uuid::new_v4());
    let bob_id = Uuid::new_v4();
    let bob = app.token_for(bob_id);

    let source = app.create_recipe(&alice, recipe_data("Alice V60", 18.0)).await;
    app.request(
        "POST",
        &format!("/api/recipes/{source}/version"),
        Some(json!({ "sourceVersion": "1.0", "recipeData": recipe_data("Alice V60", 20.0) })),
        Some(&alice),
    )
    .await;
    app.request(
        "POST",
        &format!("/api/recipes/{source}/branch"),
        Some(json!({ "parentVersion": "1.0", "recipeData": recipe_data("Alice V60", 14.0) })),
        Some(&alice),
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/recipes/copy",
            Some(json!({ "sourceRecipeId": source, "sourceVersion": "1.1" })),
            Some(&bob),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_ne!(response.id(), source);
    assert_eq!(response.str("ownerId"), bob_id.to_string());
    assert_eq!(response.str("currentVersion"), "1.0");
    assert_eq!(response.str("originalRecipeId"), source.to_string());
    assert_eq!(response.str("originalVersion"), "1.1");
    assert_eq!(response.body["coffeeAmount"], 14.0);
    assert_eq!(
        response.body["versionInfo"]["changes"][0]["description"],
        "Copied from \"Alice V60\" version 1.1"
    );

    let history = app
        .request("GET", &format!("/api/recipes/{source}/versions"), None, Some(&alice))
        .await;
    assert_eq!(history.str("currentVersion"), "2.0");
    assert_eq!(history.body["totalVersions"], 3);
}

#[tokio::test]
async fn test_copy_of_missing_source() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());

    let response = app
        .request(
            "POST",
            "/api/recipes/copy",
            Some(json!({ "sourceRecipeId": Uuid::new_v4(), "sourceVersion": "1.0" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let id = app.create_recipe(&token, recipe_data("Chemex", 30.0)).await;
    let response = app
        .request(
            "POST",
            "/api/recipes/copy",
            Some(json!({ "sourceRecipeId": id, "sourceVersion": "3.0" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["availableVersions"], json!(["1.0"]));
}

#[tokio::test]
async fn test_list_filters_owner_and_paginates() {
    let app = TestApp::new();
    let alice_id = Uuid::new_v4();
    let alice = app.token_for(alice_id);
    let bob = app.token_for(Uuid::new_v4());

    for i in 0..3 {
        app.create_recipe(&alice, recipe_data(&format!("Alice {i}"), 15.0)).await;
    }
    app.create_recipe(&bob, recipe_data("Bob", 15.0)).await;

    let response = app
        .request("GET", "/api/recipes", None, Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_items"], 4);

    let response = app
        .request(
            "GET",
            &format!("/api/recipes?owner={alice_id}&page=1&page_size=2"),
            None,
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_items"], 3);
    assert_eq!(response.body["total_pages"], 2);
    assert_eq!(response.body["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(response.body["items"][0]["ownerId"], alice_id.to_string());
}

#[tokio::test]
async fn test_list_past_last_page_is_empty() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());
    app.create_recipe(&token, recipe_data("Only", 15.0)).await;

    let response = app
        .request(
            "GET",
            &format!("/api/recipes?page={}&page_size=100", u64::MAX),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_items"], 1);
    assert_eq!(response.body["items"], json!([]));
}

#[tokio::test]
async fn test_archive_hides_and_freezes_recipe() {
    let app = TestApp::new();
    let owner_id = Uuid::new_v4();
    let owner = app.token_for(owner_id);
    let other = app.token_for(Uuid::new_v4());
    let id = app.create_recipe(&owner, recipe_data("Retired", 18.0)).await;

    let response = app
        .request("DELETE", &format!("/api/recipes/{id}"), None, Some(&other))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("DELETE", &format!("/api/recipes/{id}"), None, Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isArchived"], true);

    // Archiving again is a no-op.
    let response = app
        .request("DELETE", &format!("/api/recipes/{id}"), None, Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/recipes/{id}"), None, Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isArchived"], true);

    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{id}/version"),
            Some(json!({ "sourceVersion": "1.0", "recipeData": recipe_data("Retired", 19.0) })),
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "GET",
            &format!("/api/recipes?owner={owner_id}"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(response.body["total_items"], 0);
}
