//! Administrative commands run outside the HTTP server.

use sqlx::PgPool;

use edusphere_core::AppError;
use edusphere_models::{PublicUser, RegisterRequest, RoleProfile};

use crate::modules::auth::service::AuthService;

/// Creates an admin account. Public registration can also create admins, but
/// this path needs no running server and no existing admin.
pub async fn create_admin(
    db: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<PublicUser, AppError> {
    let request = RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        profile: RoleProfile::Admin,
    };

    AuthService::register(db, request).await
}
