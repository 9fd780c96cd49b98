use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use edusphere_core::{AppError, ErrorResponse};
use edusphere_models::{PublicUser, UpdateRoleDto};

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = Vec<PublicUser>),
        (status = 401, description = "Missing, expired, or unknown token", body = ErrorResponse),
        (status = 403, description = "Invalid token or not an admin", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_users(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<PublicUser>>, AppError> {
    let users = UserService::get_users(&state.db).await?;
    Ok(Json(users))
}

/// Get a user by id (admin only)
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = PublicUser),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PublicUser>, AppError> {
    let user = UserService::get_user(&state.db, id).await?;
    Ok(Json(user))
}

/// Change a user's role (admin only)
///
/// The new role applies from the user's next request; no re-login is needed.
#[utoipa::path(
    put,
    path = "/api/users/{id}/role",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = PublicUser),
        (status = 400, description = "Unknown role or missing role field", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn update_user_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateRoleDto>,
) -> Result<Json<PublicUser>, AppError> {
    let user = UserService::update_role(&state.db, id, &dto.profile).await?;
    Ok(Json(user))
}

/// Delete a user and its role extension (admin only)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    UserService::delete_user(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
