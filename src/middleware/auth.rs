use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use sqlx::PgPool;
use tracing::{debug, error};

use edusphere_auth::verify_token;
use edusphere_config::JwtConfig;
use edusphere_core::{AppError, AuthError, InvalidTokenReason};
use edusphere_models::Principal;

use crate::modules::users::service::UserService;
use crate::state::AppState;

/// The principal attached by [`authenticate`].
///
/// Extracting it on a route that `authenticate` does not cover fails with
/// [`AuthError::AuthRequired`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl AuthUser {
    pub fn principal(&self) -> &Principal {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AuthError::AuthRequired.into())
    }
}

/// Returns the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}

/// Verifies `token` and loads the principal it names.
///
/// The role and extension ids come from the database at call time, not from the token.
pub async fn resolve_principal(
    db: &PgPool,
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<Principal, AuthError> {
    let claims = verify_token(token, jwt_config)?;

    match UserService::find_principal_by_id(db, claims.user_id).await {
        Ok(Some(principal)) => Ok(principal),
        Ok(None) => {
            debug!(user_id = claims.user_id, "Token refers to a user that no longer exists");
            Err(AuthError::InvalidToken(InvalidTokenReason::UnknownUser))
        }
        Err(e) => {
            error!(user_id = claims.user_id, error = %e, "Failed to load principal");
            Err(AuthError::InvalidToken(InvalidTokenReason::LookupFailed))
        }
    }
}

/// Middleware that authenticates the request and stores its [`Principal`] in the
/// request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers())?.to_owned();
    let principal = resolve_principal(&state.db, &token, &state.jwt_config).await?;

    debug!(user_id = principal.id, role = %principal.role, "Request authenticated");
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
