//! Employee handlers, including the unlinked-account listing.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use staffdesk_core::error::AppError;

use crate::dto::request::{CreateEmployeeInput, EmployeeQuery, UpdateEmployeeInput};
use crate::dto::response::{ApiResponse, EmployeeData, EmployeesData, UnlinkedUsersData};
use crate::extractors::{AuthUser, JsonBody, QueryParams};
use crate::middleware::rbac::require_manager;
use crate::state::AppState;

/// GET /api/employees?search=&department_id=&joining_date=
pub async fn list_employees(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<EmployeeQuery>,
) -> Result<Json<ApiResponse<EmployeesData>>, AppError> {
    let employees = state.employee_service.list(query).await?;
    Ok(Json(ApiResponse::ok(EmployeesData { employees })))
}

/// GET /api/employees/unlinked-users
pub async fn list_unlinked_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UnlinkedUsersData>>, AppError> {
    require_manager(&auth)?;

    let unlinked_users = state.link_resolver.list_unlinked().await?;
    Ok(Json(ApiResponse::ok(UnlinkedUsersData { unlinked_users })))
}

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<CreateEmployeeInput>,
) -> Result<(StatusCode, Json<ApiResponse<EmployeeData>>), AppError> {
    require_manager(&auth)?;

    let employee = state.employee_service.create(&auth, req).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(EmployeeData { employee }).with_message("Employee created successfully.")),
    ))
}

/// PUT /api/employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateEmployeeInput>,
) -> Result<Json<ApiResponse<EmployeeData>>, AppError> {
    require_manager(&auth)?;

    let employee = state.employee_service.update(&auth, &id, req).await?;
    Ok(Json(
        ApiResponse::ok(EmployeeData { employee }).with_message("Employee updated successfully."),
    ))
}

/// DELETE /api/employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    require_manager(&auth)?;

    state.employee_service.delete(&auth, &id).await?;
    Ok(Json(ApiResponse::message("Employee deleted successfully.")))
}
