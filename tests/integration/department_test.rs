//! Integration tests for department management.

mod helpers;

use http::StatusCode;
use serde_json::json;

use staffdesk_entity::user::Role;

#[tokio::test]
async fn test_list_requires_authentication() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/departments", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_employee_role_cannot_create() {
    let app = helpers::TestApp::new().await;
    let token = app.token_for(Role::Employee).await;

    let response = app
        .request("POST", "/api/departments", Some(json!({ "name": "Eng" })), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_hr_creates_and_everyone_lists() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;
    let employee = app.token_for(Role::Employee).await;

    let response = app
        .request(
            "POST",
            "/api/departments",
            Some(json!({ "name": "  Engineering  " })),
            Some(&hr),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.message(), "Department created successfully.");
    assert_eq!(response.body["data"]["department"]["name"], "Engineering");

    app.create_department(&hr, "Accounting").await;

    let list = app.request("GET", "/api/departments", None, Some(&employee)).await;
    assert_eq!(list.status, StatusCode::OK);
    let names: Vec<&str> = list.body["data"]["departments"]
        .as_array()
        .expect("departments")
        .iter()
        .filter_map(|d| d["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Accounting", "Engineering"]);
}

#[tokio::test]
async fn test_blank_name_is_rejected() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;

    let response = app
        .request("POST", "/api/departments", Some(json!({ "name": "   " })), Some(&hr))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.errors(), vec!["Department name is required.".to_string()]);
}

#[tokio::test]
async fn test_duplicate_name_conflicts() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;
    app.create_department(&hr, "Eng").await;

    let response = app
        .request("POST", "/api/departments", Some(json!({ "name": "Eng" })), Some(&hr))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["field"], "name");
}

#[tokio::test]
async fn test_update_renames() {
    let app = helpers::TestApp::new().await;
    let admin = app.token_for(Role::Admin).await;
    let id = app.create_department(&admin, "Eng").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/departments/{id}"),
            Some(json!({ "name": "Engineering" })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Department updated successfully.");
    assert_eq!(response.body["data"]["department"]["id"], id.as_str());
    assert_eq!(response.body["data"]["department"]["name"], "Engineering");
}

#[tokio::test]
async fn test_update_missing_department() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;

    let unknown = app
        .request(
            "PUT",
            "/api/departments/6f1c2b1e-8d4a-4c9e-9a57-2f5f0f4b7c11",
            Some(json!({ "name": "X" })),
            Some(&hr),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let malformed = app
        .request("PUT", "/api/departments/123", Some(json!({ "name": "X" })), Some(&hr))
        .await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_message_only() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;
    let id = app.create_department(&hr, "Temp").await;

    let response = app
        .request("DELETE", &format!("/api/departments/{id}"), None, Some(&hr))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Department deleted successfully.");
    assert!(response.body.get("data").is_none());

    let again = app
        .request("DELETE", &format!("/api/departments/{id}"), None, Some(&hr))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_is_restricted_while_staffed() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;
    let id = app.create_department(&hr, "Eng").await;

    let created = app
        .create_employee(
            &hr,
            json!({ "name": "Ada Lovelace", "email": "ada@x.com", "department_id": id }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let response = app
        .request("DELETE", &format!("/api/departments/{id}"), None, Some(&hr))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["field"], "department_id");
}
