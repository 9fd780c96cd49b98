use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use edusphere_core::{AppError, ErrorResponse};
use edusphere_models::{LoginRequest, LoginResponse, Principal, PublicUser, RegisterRequest};

use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user with its role profile
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = PublicUser),
        (status = 400, description = "Malformed body or missing role field", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>), AppError> {
    let user = AuthService::register(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Login and receive a session token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response =
        AuthService::login(&state.db, dto, &state.jwt_config, &state.demo_config).await?;
    Ok(Json(response))
}

/// The authenticated principal, as loaded for this request
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current principal", body = Principal),
        (status = 401, description = "Missing, expired, or unknown token", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
pub async fn get_me(AuthUser(principal): AuthUser) -> Json<Principal> {
    Json(principal)
}
