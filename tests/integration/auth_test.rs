//! Integration tests for signup, login, profile, and admin provisioning.

mod helpers;

use http::StatusCode;
use serde_json::json;

use staffdesk_entity::user::Role;

#[tokio::test]
async fn test_signup_creates_employee_account() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "email": "A@X.com", "password": "pw1", "role": "admin" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "success");
    assert!(response.body["token"].as_str().is_some());
    assert_eq!(response.body["data"]["user"]["email"], "a@x.com");
    assert_eq!(response.body["data"]["user"]["role"], "employee");
    assert!(response.body["data"]["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = helpers::TestApp::new().await;
    let body = json!({ "email": "dup@x.com", "password": "pw1" });

    let first = app
        .request("POST", "/api/auth/signup", Some(body.clone()), None)
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/api/auth/signup", Some(body), None)
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["status"], "fail");
    assert_eq!(second.body["field"], "email");
}

#[tokio::test]
async fn test_signup_reports_every_invalid_field() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "email": "not-an-email", "password": "pw" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Validation failed.");
    assert_eq!(response.errors().len(), 2, "{:?}", response.body);
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.create_account("login@x.com", "pw1", Role::Employee)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": " Login@X.com ", "password": "pw1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some());
    assert_eq!(response.body["data"]["user"]["email"], "login@x.com");
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;
    app.create_account("a@x.com", "pw1", Role::Employee).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "a@x.com", "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Incorrect email or password.");
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "nobody@x.com", "password": "pw1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Incorrect email or password.");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/api/auth/login", Some(json!({ "email": "a@x.com" })), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Please provide email and password.");
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for(Role::Hr).await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["user"]["role"], "HR");
}

#[tokio::test]
async fn test_me_without_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.message(),
        "You are not logged in! Please log in to get access."
    );
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/auth/me", None, Some("not.a.token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid token. Please log in again.");
}

#[tokio::test]
async fn test_admin_creates_hr_account() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for(Role::Admin).await;

    let response = app
        .request(
            "POST",
            "/api/auth/create-user",
            Some(json!({ "email": "hr@x.com", "password": "pw2", "role": "HR" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.message(), "User created successfully with role: HR.");
    assert_eq!(response.body["data"]["user"]["role"], "HR");

    // The new account can log in.
    app.login("hr@x.com", "pw2").await;
}

#[tokio::test]
async fn test_admin_cannot_create_employee_role() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for(Role::Admin).await;

    let response = app
        .request(
            "POST",
            "/api/auth/create-user",
            Some(json!({ "email": "b@x.com", "password": "pw2", "role": "employee" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_user_requires_admin() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for(Role::Hr).await;

    let response = app
        .request(
            "POST",
            "/api/auth/create-user",
            Some(json!({ "email": "c@x.com", "password": "pw2", "role": "HR" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_user_missing_arguments() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for(Role::Admin).await;

    let response = app
        .request(
            "POST",
            "/api/auth/create-user",
            Some(json!({ "email": "c@x.com" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Email, password, and role are required.");
}

#[tokio::test]
async fn test_authentication_runs_before_body_parsing() {
    let app = helpers::TestApp::new().await;

    let response = app
        .raw_request("POST", "/api/auth/create-user", "{not json".to_string(), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = helpers::TestApp::new().await;

    let response = app
        .raw_request("POST", "/api/auth/login", "{not json".to_string(), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "fail");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/nope", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Can't find /api/nope on this server!");
}

#[tokio::test]
async fn test_unsupported_method_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.request("PATCH", "/api/departments", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["status"], "fail");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
