//! Integration tests for main versions, branches, and history.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use helpers::{TestApp, recipe_data};

#[tokio::test]
async fn test_edit_branch_and_read_scenario() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());
    let id = app.create_recipe(&token, recipe_data("Morning V60", 18.0)).await;

    // Edit 1.0 into the new main version 2.0.
    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{id}/version"),
            Some(json!({ "sourceVersion": "1.0", "recipeData": recipe_data("Morning V60", 20.0) })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.str("version"), "2.0");
    assert_eq!(response.str("currentVersion"), "2.0");
    assert_eq!(response.body["versionInfo"]["parentVersion"], serde_json::Value::Null);
    assert_eq!(
        response.body["versionInfo"]["changes"][0]["field"],
        "coffeeAmount"
    );

    // A second edit from the stale 1.0 must be branched instead.
    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{id}/version"),
            Some(json!({ "sourceVersion": "1.0", "recipeData": recipe_data("Morning V60", 15.0) })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["shouldBranch"], true);
    assert_eq!(response.str("currentVersion"), "2.0");

    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{id}/branch"),
            Some(json!({ "parentVersion": "1.0", "recipeData": recipe_data("Morning V60", 15.0) })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.str("version"), "1.1");
    assert_eq!(response.body["isCurrent"], false);
    assert_eq!(response.str("currentVersion"), "2.0");
    assert_eq!(response.body["versionInfo"]["parentVersion"], "1.0");

    // Default read follows the pointer.
    let response = app
        .request("GET", &format!("/api/recipes/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str("version"), "2.0");
    assert_eq!(response.body["coffeeAmount"], 20.0);
    assert_eq!(response.body["isCurrent"], true);

    let response = app
        .request("GET", &format!("/api/recipes/{id}?version=1.1"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str("version"), "1.1");
    assert_eq!(response.body["coffeeAmount"], 15.0);
    assert_eq!(response.body["isCurrent"], false);

    let response = app
        .request(
            "GET",
            &format!("/api/recipes/{id}/version/1.1/isCurrent"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "isCurrent": false }));

    let response = app
        .request(
            "GET",
            &format!("/api/recipes/{id}/version/2.0/isCurrent"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.body, json!({ "isCurrent": true }));
}

#[tokio::test]
async fn test_branch_off_current_is_rejected() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());
    let id = app.create_recipe(&token, recipe_data("Kalita", 16.0)).await;

    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{id}/branch"),
            Some(json!({ "parentVersion": "1.0", "recipeData": recipe_data("Kalita", 17.0) })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["shouldUseMain"], true);
    assert_eq!(response.str("currentVersion"), "1.0");

    let history = app
        .request("GET", &format!("/api/recipes/{id}/versions"), None, Some(&token))
        .await;
    assert_eq!(history.body["totalVersions"], 1);
}

#[tokio::test]
async fn test_history_tree_groups_by_major() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());
    let id = app.create_recipe(&token, recipe_data("Chemex", 30.0)).await;

    for (source, amount) in [("1.0", 31.0), ("2.0", 32.0)] {
        let response = app
            .request(
                "POST",
                &format!("/api/recipes/{id}/version"),
                Some(json!({ "sourceVersion": source, "recipeData": recipe_data("Chemex", amount) })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    for amount in [28.0, 29.0] {
        let response = app
            .request(
                "POST",
                &format!("/api/recipes/{id}/branch"),
                Some(json!({ "parentVersion": "1.0", "recipeData": recipe_data("Chemex", amount) })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request("GET", &format!("/api/recipes/{id}/versions"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.str("currentVersion"), "3.0");
    assert_eq!(response.body["totalVersions"], 5);

    let groups = response.body["groups"].as_array().expect("groups");
    let majors: Vec<u64> = groups.iter().filter_map(|g| g["major"].as_u64()).collect();
    assert_eq!(majors, [1, 2, 3]);

    let first: Vec<&str> = groups[0]["versions"]
        .as_array()
        .expect("versions")
        .iter()
        .filter_map(|v| v["version"].as_str())
        .collect();
    assert_eq!(first, ["1.0", "1.1", "1.2"]);
    assert_eq!(groups[2]["versions"][0]["isCurrent"], true);
    assert_eq!(groups[0]["versions"][1]["isMainVersion"], false);
}

#[tokio::test]
async fn test_missing_version_returns_recovery_context() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());
    let id = app.create_recipe(&token, recipe_data("Origami", 15.0)).await;

    let response = app
        .request("GET", &format!("/api/recipes/{id}?version=4.2"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.str("error"), "NOT_FOUND");
    assert_eq!(response.str("currentVersion"), "1.0");
    assert_eq!(response.body["availableVersions"], json!(["1.0"]));
}

#[tokio::test]
async fn test_malformed_versions_are_rejected() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());
    let id = app.create_recipe(&token, recipe_data("Clever", 20.0)).await;

    let response = app
        .request("GET", &format!("/api/recipes/{id}?version=2"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "GET",
            &format!("/api/recipes/{id}/version/latest/isCurrent"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{id}/version"),
            Some(json!({ "sourceVersion": "v1", "recipeData": recipe_data("Clever", 21.0) })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.str("error"), "VALIDATION_ERROR");

    let response = app
        .request("GET", "/api/recipes/not-a-uuid/versions", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.str("error"), "VALIDATION_ERROR");
    assert!(!response.str("message").is_empty());
}

#[tokio::test]
async fn test_only_owner_may_version() {
    let app = TestApp::new();
    let owner = app.token_for(Uuid::new_v4());
    let other = app.token_for(Uuid::new_v4());
    let id = app.create_recipe(&owner, recipe_data("Hario Switch", 15.0)).await;

    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{id}/version"),
            Some(json!({ "sourceVersion": "1.0", "recipeData": recipe_data("Hijacked", 15.0) })),
            Some(&other),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "GET",
            &format!("/api/recipes/{id}/version/1.0/isCurrent"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(response.body["isCurrent"], true);
}

#[tokio::test]
async fn test_client_changes_are_kept() {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());
    let id = app.create_recipe(&token, recipe_data("Aeropress", 17.0)).await;

    let changes = json!([{
        "field": "technique",
        "oldValue": "standard",
        "newValue": "inverted",
        "description": "Switched to inverted method"
    }]);

    let response = app
        .request(
            "POST",
            &format!("/api/recipes/{id}/version"),
            Some(json!({
                "sourceVersion": "1.0",
                "recipeData": recipe_data("Aeropress", 17.0),
                "changes": changes
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["versionInfo"]["changes"], changes);
}
