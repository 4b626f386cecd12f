//! Integration tests for employee management and account linking.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use staffdesk_entity::user::Role;

fn unlinked_ids(body: &Value) -> Vec<String> {
    body["data"]["unlinkedUsers"]
        .as_array()
        .expect("unlinkedUsers")
        .iter()
        .filter_map(|u| u["id"].as_str().map(str::to_string))
        .collect()
}

#[tokio::test]
async fn test_create_with_defaults() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;
    let dept = app.create_department(&hr, "Eng").await;

    let response = app
        .create_employee(
            &hr,
            json!({ "name": "Ada Lovelace", "email": " ADA@x.com ", "department_id": dept }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.message(), "Employee created successfully.");
    let employee = &response.body["data"]["employee"];
    assert_eq!(employee["email"], "ada@x.com");
    assert_eq!(employee["role"], "employee");
    assert_eq!(employee["department"]["name"], "Eng");
    assert!(employee["joining_date"].as_str().is_some());
    assert!(employee.get("user_id").is_none());
}

#[tokio::test]
async fn test_create_reports_every_missing_field() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;

    let response = app.create_employee(&hr, json!({})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Validation failed.");
    assert_eq!(response.errors().len(), 3, "{:?}", response.body);
}

#[tokio::test]
async fn test_create_rejects_non_alphabetic_name() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;
    let dept = app.create_department(&hr, "Eng").await;

    let response = app
        .create_employee(
            &hr,
            json!({ "name": "R2D2", "email": "r2@x.com", "department_id": dept }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.errors().len(), 1);
}

#[tokio::test]
async fn test_employee_role_can_list_but_not_create() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;
    let employee = app.token_for(Role::Employee).await;
    let dept = app.create_department(&hr, "Eng").await;

    let list = app.request("GET", "/api/employees", None, Some(&employee)).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body["data"]["employees"], json!([]));

    let create = app
        .create_employee(
            &employee,
            json!({ "name": "Ada", "email": "ada@x.com", "department_id": dept }),
        )
        .await;
    assert_eq!(create.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_department_fails_validation() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;
    let dept = app.create_department(&hr, "Gone").await;
    let deleted = app
        .request("DELETE", &format!("/api/departments/{dept}"), None, Some(&hr))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let response = app
        .create_employee(
            &hr,
            json!({ "name": "Ada", "email": "ada@x.com", "department_id": dept }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Validation failed.");
    assert_eq!(response.errors(), vec!["Department does not exist.".to_string()]);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;
    let dept = app.create_department(&hr, "Eng").await;
    let body = json!({ "name": "Ada", "email": "ada@x.com", "department_id": dept });

    assert_eq!(app.create_employee(&hr, body.clone()).await.status, StatusCode::CREATED);
    let second = app.create_employee(&hr, body).await;

    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["field"], "email");
}

#[tokio::test]
async fn test_link_lifecycle() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;
    let dept = app.create_department(&hr, "Eng").await;
    let user = app.create_account("ada@x.com", "pw1", Role::Employee).await;

    let before = app
        .request("GET", "/api/employees/unlinked-users", None, Some(&hr))
        .await;
    assert_eq!(before.status, StatusCode::OK);
    assert!(unlinked_ids(&before.body).contains(&user));

    let created = app
        .create_employee(
            &hr,
            json!({ "name": "Ada", "email": "ada@x.com", "department_id": dept, "user_id": user }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["employee"]["user"]["email"], "ada@x.com");
    let employee_id = created.body["data"]["employee"]["id"]
        .as_str()
        .expect("employee id")
        .to_string();

    let linked = app
        .request("GET", "/api/employees/unlinked-users", None, Some(&hr))
        .await;
    assert!(!unlinked_ids(&linked.body).contains(&user));

    // A second employee cannot claim the same account.
    let clash = app
        .create_employee(
            &hr,
            json!({ "name": "Bob", "email": "bob@x.com", "department_id": dept, "user_id": user }),
        )
        .await;
    assert_eq!(clash.status, StatusCode::BAD_REQUEST);
    assert_eq!(clash.body["field"], "user_id");

    // Omitting user_id keeps the link.
    let renamed = app
        .request(
            "PUT",
            &format!("/api/employees/{employee_id}"),
            Some(json!({ "name": "Ada King" })),
            Some(&hr),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["data"]["employee"]["user_id"], user.as_str());

    // An explicit null clears it.
    let cleared = app
        .request(
            "PUT",
            &format!("/api/employees/{employee_id}"),
            Some(json!({ "user_id": null })),
            Some(&hr),
        )
        .await;
    assert_eq!(cleared.status, StatusCode::OK);
    assert!(cleared.body["data"]["employee"].get("user_id").is_none());

    let after = app
        .request("GET", "/api/employees/unlinked-users", None, Some(&hr))
        .await;
    assert!(unlinked_ids(&after.body).contains(&user));
}

#[tokio::test]
async fn test_empty_string_clears_link() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;
    let dept = app.create_department(&hr, "Eng").await;
    let user = app.create_account("ada@x.com", "pw1", Role::Employee).await;

    let created = app
        .create_employee(
            &hr,
            json!({ "name": "Ada", "email": "ada@x.com", "department_id": dept, "user_id": user }),
        )
        .await;
    let employee_id = created.body["data"]["employee"]["id"]
        .as_str()
        .expect("employee id")
        .to_string();

    let cleared = app
        .request(
            "PUT",
            &format!("/api/employees/{employee_id}"),
            Some(json!({ "user_id": "" })),
            Some(&hr),
        )
        .await;

    assert_eq!(cleared.status, StatusCode::OK);
    assert!(cleared.body["data"]["employee"].get("user_id").is_none());
}

#[tokio::test]
async fn test_unlinked_users_requires_manager() {
    let app = helpers::TestApp::new().await;
    let employee = app.token_for(Role::Employee).await;

    let response = app
        .request("GET", "/api/employees/unlinked-users", None, Some(&employee))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_filters() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;
    let eng = app.create_department(&hr, "Eng").await;
    let ops = app.create_department(&hr, "Ops").await;

    for body in [
        json!({ "name": "Ada Lovelace", "email": "ada@x.com", "department_id": eng, "joining_date": "2024-03-15" }),
        json!({ "name": "Grace Hopper", "email": "grace@x.com", "department_id": eng, "joining_date": "2023-01-02" }),
        json!({ "name": "Linus", "email": "linus@y.org", "department_id": ops, "joining_date": "2024-03-15" }),
    ] {
        assert_eq!(app.create_employee(&hr, body).await.status, StatusCode::CREATED);
    }

    let names = |body: &Value| -> Vec<String> {
        body["data"]["employees"]
            .as_array()
            .expect("employees")
            .iter()
            .filter_map(|e| e["name"].as_str().map(str::to_string))
            .collect()
    };

    let search = app
        .request("GET", "/api/employees?search=GRACE", None, Some(&hr))
        .await;
    assert_eq!(names(&search.body), vec!["Grace Hopper"]);

    let by_email = app
        .request("GET", "/api/employees?search=y.org", None, Some(&hr))
        .await;
    assert_eq!(names(&by_email.body), vec!["Linus"]);

    let by_department = app
        .request("GET", &format!("/api/employees?department_id={eng}"), None, Some(&hr))
        .await;
    assert_eq!(names(&by_department.body), vec!["Ada Lovelace", "Grace Hopper"]);

    let by_day = app
        .request("GET", "/api/employees?joining_date=2024-03-15", None, Some(&hr))
        .await;
    assert_eq!(names(&by_day.body), vec!["Ada Lovelace", "Linus"]);

    let combined = app
        .request(
            "GET",
            &format!("/api/employees?department_id={ops}&joining_date=2024-03-15&search="),
            None,
            Some(&hr),
        )
        .await;
    assert_eq!(names(&combined.body), vec!["Linus"]);

    let bad_date = app
        .request("GET", "/api/employees?joining_date=yesterday", None, Some(&hr))
        .await;
    assert_eq!(bad_date.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_and_delete_missing_employee() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;

    let update = app
        .request(
            "PUT",
            "/api/employees/6f1c2b1e-8d4a-4c9e-9a57-2f5f0f4b7c11",
            Some(json!({ "name": "Nobody" })),
            Some(&hr),
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let delete = app
        .request("DELETE", "/api/employees/not-a-uuid", None, Some(&hr))
        .await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_employee() {
    let app = helpers::TestApp::new().await;
    let hr = app.token_for(Role::Hr).await;
    let dept = app.create_department(&hr, "Eng").await;
    let created = app
        .create_employee(
            &hr,
            json!({ "name": "Ada", "email": "ada@x.com", "department_id": dept }),
        )
        .await;
    let id = created.body["data"]["employee"]["id"]
        .as_str()
        .expect("employee id")
        .to_string();

    let response = app
        .request("DELETE", &format!("/api/employees/{id}"), None, Some(&hr))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Employee deleted successfully.");

    let list = app.request("GET", "/api/employees", None, Some(&hr)).await;
    assert_eq!(list.body["data"]["employees"], json!([]));
}
