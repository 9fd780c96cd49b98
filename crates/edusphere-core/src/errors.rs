//! Error types shared by every layer of the API.
//!
//! [`AppError`] is the single error type returned by handlers and services. It pairs an
//! HTTP status with an [`anyhow::Error`] and renders as `{"error": "<message>"}`.
//!
//! [`AuthError`] is the closed taxonomy of authentication and authorization failures.
//! Each variant has a fixed status code and a short message; converting it into an
//! [`AppError`] keeps the variant recoverable through [`AppError::auth_error`].

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Why a bearer token was rejected as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTokenReason {
    /// Bad signature, malformed payload, or unsupported algorithm.
    Malformed,
    /// The token verified but its user no longer exists.
    UnknownUser,
    /// Loading the principal failed; the cause is logged, never returned.
    LookupFailed,
}

/// Authentication and authorization failures.
///
/// None of these are retryable; each is surfaced directly to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Access token required")]
    MissingToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Invalid token")]
    InvalidToken(InvalidTokenReason),
    #[error("Authentication required")]
    AuthRequired,
    #[error("Insufficient permissions")]
    InsufficientPermissions,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingToken
            | AuthError::TokenExpired
            | AuthError::AuthRequired
            | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken(InvalidTokenReason::UnknownUser) => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken(_) | AuthError::InsufficientPermissions => {
                StatusCode::FORBIDDEN
            }
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow::anyhow!(message.into()))
    }

    /// The authentication failure behind this error, if it is one.
    pub fn auth_error(&self) -> Option<&AuthError> {
        self.error.downcast_ref::<AuthError>()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Internal error");
            "Internal server error".to_string()
        } else {
            self.error.to_string()
        };

        (self.status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        Self::new(err.status(), err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::internal(err)
    }
}
