//! Authentication handlers: signup, login, profile, admin provisioning.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use staffdesk_core::error::AppError;

use crate::dto::request::{CreateUserInput, LoginInput, SignupInput};
use crate::dto::response::{ApiResponse, UserData};
use crate::extractors::{AuthUser, JsonBody};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SignupInput>,
) -> Result<(StatusCode, Json<ApiResponse<UserData>>), AppError> {
    let outcome = state.auth_service.signup(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::ok(UserData { user: outcome.user })
                .with_message("Account created successfully.")
                .with_token(outcome.token),
        ),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginInput>,
) -> Result<Json<ApiResponse<UserData>>, AppError> {
    let outcome = state.auth_service.login(req).await?;
    Ok(Json(
        ApiResponse::ok(UserData { user: outcome.user })
            .with_message("Logged in successfully.")
            .with_token(outcome.token),
    ))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserData>>, AppError> {
    let user = state.auth_service.me(auth.principal());
    Ok(Json(ApiResponse::ok(UserData { user })))
}

/// POST /api/auth/create-user (admin only)
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<CreateUserInput>,
) -> Result<(StatusCode, Json<ApiResponse<UserData>>), AppError> {
    require_admin(&auth)?;

    let user = state.auth_service.create_user(auth.principal(), req).await?;
    let message = format!("User created successfully with role: {}.", user.role);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserData { user }).with_message(message)),
    ))
}
