//! Role-based authorization.
//!
//! Guards read the [`Principal`] that [`authenticate`](super::auth::authenticate) attached
//! and compare its current role with a fixed allow-list. Two forms are provided:
//!
//! 1. Layer functions ([`is_admin`], [`is_teacher`], [`is_student`], [`is_parent`]) for
//!    `axum::middleware::from_fn`
//! 2. Extractors ([`RequireAdmin`], [`RequireTeacher`], [`RequireStudent`],
//!    [`RequireParent`]) that gate a single handler and hand it the principal
//!
//! The allow-lists are business rules, not a seniority ladder: teachers pass both the
//! student and the parent gates, while students and parents never pass each other's.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use edusphere_core::{AppError, AuthError, UserRole};
use edusphere_models::Principal;

pub const ADMIN_ROLES: &[UserRole] = &[UserRole::Admin];
pub const TEACHER_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Teacher];
pub const STUDENT_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Teacher, UserRole::Student];
pub const PARENT_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Teacher, UserRole::Parent];

/// Checks `principal` against `allowed`.
///
/// A missing principal means the guard ran before authentication and is always
/// [`AuthError::AuthRequired`], whatever the allow-list.
pub fn check_any_role(
    principal: Option<&Principal>,
    allowed: &[UserRole],
) -> Result<(), AuthError> {
    let principal = principal.ok_or(AuthError::AuthRequired)?;

    if !principal.has_any_role(allowed) {
        tracing::debug!(
            user_id = principal.id,
            role = %principal.role,
            ?allowed,
            "Role not permitted"
        );
        return Err(AuthError::InsufficientPermissions);
    }

    Ok(())
}

/// Middleware that admits the request only when the principal's role is in `allowed`.
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/reports", get(reports))
///     .route_layer(middleware::from_fn(|req, next| {
///         require_roles(req, next, &[UserRole::Admin, UserRole::HrManager])
///     }));
/// ```
pub async fn require_roles(
    req: Request,
    next: Next,
    allowed: &'static [UserRole],
) -> Result<Response, AppError> {
    check_any_role(req.extensions().get::<Principal>(), allowed)?;
    Ok(next.run(req).await)
}

async fn gate(req: Request, next: Next, allowed: &'static [UserRole]) -> Response {
    match require_roles(req, next, allowed).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Admin only.
pub async fn is_admin(req: Request, next: Next) -> Response {
    gate(req, next, ADMIN_ROLES).await
}

/// Admins and teachers.
pub async fn is_teacher(req: Request, next: Next) -> Response {
    gate(req, next, TEACHER_ROLES).await
}

/// Admins, teachers, and students.
pub async fn is_student(req: Request, next: Next) -> Response {
    gate(req, next, STUDENT_ROLES).await
}

/// Admins, teachers, and parents.
pub async fn is_parent(req: Request, next: Next) -> Response {
    gate(req, next, PARENT_ROLES).await
}

/// Defines an extractor that yields the [`AuthUser`](super::auth::AuthUser) only when its
/// role is in the given allow-list.
#[macro_export]
macro_rules! require_role {
    ($name:ident, $roles:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl<S> axum::extract::FromRequestParts<S> for $name
        where
            S: Send + Sync,
        {
            type Rejection = edusphere_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                _state: &S,
            ) -> Result<Self, Self::Rejection> {
                let principal = parts.extensions.get::<edusphere_models::Principal>();
                $crate::middleware::role::check_any_role(principal, $roles)?;

                let principal = principal.cloned().ok_or(edusphere_core::AuthError::AuthRequired)?;
                Ok($name($crate::middleware::auth::AuthUser(principal)))
            }
        }
    };
}

require_role!(RequireAdmin, ADMIN_ROLES);
require_role!(RequireTeacher, TEACHER_ROLES);
require_role!(RequireStudent, STUDENT_ROLES);
require_role!(RequireParent, PARENT_ROLES);
