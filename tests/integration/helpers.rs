//! Shared test helpers for integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use staffdesk_api::{AppState, build_app};
use staffdesk_core::config::{AppConfig, StoreProvider};
use staffdesk_database::{MemoryStore, Stores};
use staffdesk_entity::user::Role;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for seeding accounts without going through HTTP
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = StoreProvider::Memory;
        config.auth.jwt_secret = "integration-test-signing-secret".to_string();
        config.validate().expect("test config is valid");

        let stores = Stores::memory(MemoryStore::new());
        let state = AppState::build(config, stores).expect("Failed to build state");
        let router = build_app(state.clone());

        Self { router, state }
    }

    /// Create an account directly in the store and return its ID
    pub async fn create_account(&self, email: &str, password: &str, role: Role) -> String {
        let user = self
            .state
            .auth_service
            .bootstrap(email, password, role)
            .await
            .expect("Failed to create account");
        user.id.to_string()
    }

    /// Login and return the bearer token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Create an account with the given role and return a token for it
    pub async fn token_for(&self, role: Role) -> String {
        let email = format!("{}@staffdesk.test", role.as_str().to_lowercase());
        self.create_account(&email, "secret", role).await;
        self.login(&email, "secret").await
    }

    /// Create a department and return its ID
    pub async fn create_department(&self, token: &str, name: &str) -> String {
        let response = self
            .request("POST", "/api/departments", Some(json!({ "name": name })), Some(token))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["department"]["id"]
            .as_str()
            .expect("department id")
            .to_string()
    }

    /// Create an employee from a JSON body and return the response
    pub async fn create_employee(&self, token: &str, body: Value) -> TestResponse {
        self.request("POST", "/api/employees", Some(body), Some(token))
            .await
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str, token).await
    }

    /// Make an HTTP request with a verbatim body
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

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
    /// HTTP status
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when the body was not JSON)
    pub body: Value,
}

impl TestResponse {
    /// The `message` field of the envelope
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }

    /// The `errors` list of a validation failure
    pub fn errors(&self) -> Vec<String> {
        self.body["errors"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
