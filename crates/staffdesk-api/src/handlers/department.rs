//! Department handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use staffdesk_core::error::AppError;

use crate::dto::request::{CreateDepartmentInput, UpdateDepartmentInput};
use crate::dto::response::{ApiResponse, DepartmentData, DepartmentsData};
use crate::extractors::{AuthUser, JsonBody};
use crate::middleware::rbac::require_manager;
use crate::state::AppState;

/// GET /api/departments
pub async fn list_departments(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<DepartmentsData>>, AppError> {
    let departments = state.department_service.list().await?;
    Ok(Json(ApiResponse::ok(DepartmentsData { departments })))
}

/// POST /api/departments
pub async fn create_department(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<CreateDepartmentInput>,
) -> Result<(StatusCode, Json<ApiResponse<DepartmentData>>), AppError> {
    require_manager(&auth)?;

    let department = state.department_service.create(&auth, req).await?;
    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::ok(DepartmentData { department })
                .with_message("Department created successfully."),
        ),
    ))
}

/// PUT /api/departments/{id}
pub async fn update_department(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateDepartmentInput>,
) -> Result<Json<ApiResponse<DepartmentData>>, AppError> {
    require_manager(&auth)?;

    let department = state.department_service.update(&auth, &id, req).await?;
    Ok(Json(
        ApiResponse::ok(DepartmentData { department })
            .with_message("Department updated successfully."),
    ))
}

/// DELETE /api/departments/{id}
pub async fn delete_department(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    require_manager(&auth)?;

    state.department_service.delete(&auth, &id).await?;
    Ok(Json(ApiResponse::message("Department deleted successfully.")))
}
