//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use brewhub_api::{AppState, build_app};
use brewhub_auth::JwtEncoder;
use brewhub_core::config::{AppConfig, StoreBackend};
use brewhub_database::Stores;
use brewhub_database::memory::MemoryStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    encoder: JwtEncoder,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.store.backend = StoreBackend::Memory;
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let encoder = JwtEncoder::new(&config.auth);
        let state = AppState::new(config.clone(), Stores::memory(MemoryStore::new()));

        Self {
            router: build_app(state),
            config,
            encoder,
        }
    }

    /// Issue a bearer token for a user
    pub fn token_for(&self, user_id: Uuid) -> String {
        self.encoder
            .issue_access_token(user_id, "tester")
            .expect("Failed to issue token")
            .access_token
    }

    /// Create a recipe as `token` and return its id
    pub async fn create_recipe(&self, token: &str, data: Value) -> Uuid {
        let response = self
            .request("POST", "/api/recipes", Some(json!({ "recipeData": data })), Some(token))
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );

        response.id()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.send(method, path, body, authorization.as_deref()).await
    }

    /// Make a request with a raw `Authorization` header value
    pub async fn request_with_authorization(
        &self,
        method: &str,
        path: &str,
        authorization: &str,
    ) -> TestResponse {
        self.send(method, path, None, Some(authorization)).await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `id` field of the body as a UUID
    pub fn id(&self) -> Uuid {
        self.body["id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("No id in response")
    }

    /// A string field of the body
    pub fn str(&self, key: &str) -> &str {
        self.body[key].as_str().unwrap_or_default()
    }
}

/// Minimal valid recipe payload
pub fn recipe_data(name: &str, coffee_amount: f64) -> Value {
    json!({
        "name": name,
        "recipeType": "pourover",
        "coffeeAmount": coffee_amount,
        "waterTemperature": 94,
        "steps": [
            { "description": "Bloom", "durationSeconds": 45, "waterAmount": 50 },
            { "description": "Pour to 300g", "durationSeconds": 90, "waterAmount": 250 }
        ]
    })
}
