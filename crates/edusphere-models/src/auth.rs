//! Authentication payloads.

use edusphere_core::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Login request with email and password.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    #[schema(example = "teacher@school.com")]
    pub email: String,
    #[validate(length(min = 1))]
    #[schema(example = "password123")]
    pub password: String,
}

/// The user returned by a successful login. Never carries a password or hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

/// Role-specific registration data, tagged by `role`.
///
/// Each variant carries exactly the fields its extension table needs, so inserting the
/// extension is an exhaustive match rather than a chain of string comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RoleProfile {
    Admin,
    Teacher { subject: String },
    Student { grade: String },
    Parent { phone: String, address: String },
    HrManager,
    BranchManager,
}

impl RoleProfile {
    pub fn role(&self) -> UserRole {
        match self {
            RoleProfile::Admin => UserRole::Admin,
            RoleProfile::Teacher { .. } => UserRole::Teacher,
            RoleProfile::Student { .. } => UserRole::Student,
            RoleProfile::Parent { .. } => UserRole::Parent,
            RoleProfile::HrManager => UserRole::HrManager,
            RoleProfile::BranchManager => UserRole::BranchManager,
        }
    }
}

/// Registration request: base identity plus a flattened [`RoleProfile`].
///
/// ```json
/// { "name": "Ada", "email": "ada@school.com", "password": "s3cretpass",
///   "role": "teacher", "subject": "Mathematics" }
/// ```
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
}
